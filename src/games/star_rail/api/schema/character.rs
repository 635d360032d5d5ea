use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::schema::{normalized, normalized_or_empty, normalized_opt};
use crate::games::star_rail::consts::{HsrElement, HsrPath};

use super::{character_rank, ui, Names};

/// Character entry of the characters list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Character {
    #[serde(skip)]
    pub id: u32,

    #[serde(deserialize_with = "avatar_shop_icon")]
    pub icon: String,

    #[serde(rename = "rank", deserialize_with = "character_rank")]
    pub rarity: u8,

    #[serde(rename = "desc", default, deserialize_with = "normalized_or_empty")]
    pub description: String,

    #[serde(rename = "baseType")]
    pub path: HsrPath,

    #[serde(rename = "damageType")]
    pub element: HsrElement,

    #[serde(flatten)]
    pub names: Names,

    #[serde(skip)]
    pub name: String
}

fn avatar_shop_icon<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(ui(format!("avatarshopicon/{}.webp", String::deserialize(deserializer)?)))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillLevelInfo {
    #[serde(rename = "Level")]
    pub level: u32,

    #[serde(rename = "ParamList")]
    pub parameters: Vec<f64>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", default, deserialize_with = "normalized_opt")]
    pub description: Option<String>,

    #[serde(rename = "Type", default)]
    pub skill_type: Option<String>,

    #[serde(rename = "Tag")]
    pub tag: String,

    #[serde(rename = "SPBase", default)]
    pub energy_generation: Option<f64>,

    /// Skill level -> level info
    #[serde(rename = "Level")]
    pub level_info: IndexMap<String, SkillLevelInfo>
}

impl Skill {
    pub fn max_level(&self) -> u32 {
        self.level_info.keys()
            .filter_map(|level| level.parse().ok())
            .max()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Eidolon {
    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "ParamList")]
    pub parameters: Vec<f64>
}

impl Eidolon {
    /// Eidolon IDs are `{character id}{index}`, e.g. `130901`
    pub fn image(&self) -> String {
        let id = self.id.to_string();

        let character = id.get(..4).unwrap_or(&id);
        let index = id.get(id.len().saturating_sub(1)..).unwrap_or_default();

        ui(format!("rank/_dependencies/textures/{character}/{character}_Rank_{index}.webp"))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterDetail {
    /// The API only mentions the ID in the relics recommendation
    #[serde(rename = "Relics", deserialize_with = "recommended_relics_avatar")]
    pub id: u32,

    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", default, deserialize_with = "normalized_or_empty")]
    pub description: String,

    #[serde(rename = "Rarity", deserialize_with = "character_rank")]
    pub rarity: u8,

    /// Eidolon index -> eidolon
    #[serde(rename = "Ranks")]
    pub eidolons: IndexMap<String, Eidolon>,

    /// Skill ID -> skill
    #[serde(rename = "Skills")]
    pub skills: IndexMap<String, Skill>,

    /// Ascension phase -> raw stats table
    #[serde(rename = "Stats")]
    pub ascension_stats: IndexMap<String, IndexMap<String, serde_json::Value>>
}

fn recommended_relics_avatar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    struct Relics {
        #[serde(rename = "AvatarID")]
        avatar_id: u32
    }

    Ok(Relics::deserialize(deserializer)?.avatar_id)
}

impl CharacterDetail {
    #[inline]
    pub fn icon(&self) -> String {
        ui(format!("avatarshopicon/{}.webp", self.id))
    }

    /// Full size warp artwork
    #[inline]
    pub fn gacha_art(&self) -> String {
        ui(format!("avatardrawcard/{}.webp", self.id))
    }
}
