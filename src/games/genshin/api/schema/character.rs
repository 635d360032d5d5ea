use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::schema::{empty_as_none, normalized, ui_uri};
use crate::games::genshin::consts::GenshinElement;

use super::{icon, rarity, Names};

/// Character entry of the characters list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Character {
    /// Key of the list entry
    #[serde(skip)]
    pub id: String,

    #[serde(deserialize_with = "icon")]
    pub icon: String,

    #[serde(rename = "rank", deserialize_with = "rarity")]
    pub rarity: u8,

    #[serde(rename = "desc", deserialize_with = "normalized")]
    pub description: String,

    /// Traveler has no element
    #[serde(default, deserialize_with = "empty_as_none")]
    pub element: Option<GenshinElement>,

    #[serde(flatten)]
    pub names: Names,

    /// Name in the client's language
    #[serde(skip)]
    pub name: String
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Namecard {
    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "Icon", deserialize_with = "icon")]
    pub icon: String
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct CharacterInfo {
    /// Not every character has a namecard (e.g. Traveler)
    #[serde(rename = "Namecard", default, deserialize_with = "empty_as_none")]
    pub namecard: Option<Namecard>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillUpgradeInfo {
    #[serde(rename = "Level")]
    pub level: u32,

    #[serde(rename = "Icon", deserialize_with = "icon")]
    pub icon: String,

    /// Attribute templates like `1-Hit DMG|{param1:F1P}`,
    /// see `text::replace_params`
    #[serde(rename = "Desc", deserialize_with = "non_empty_strings")]
    pub attributes: Vec<String>,

    #[serde(rename = "Param")]
    pub parameters: Vec<f64>
}

fn non_empty_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let mut strings = Vec::<String>::deserialize(deserializer)?;

    strings.retain(|string| !string.is_empty());

    Ok(strings)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterSkill {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    /// Skill level -> upgrade info
    #[serde(rename = "Promote")]
    pub upgrade_info: IndexMap<String, SkillUpgradeInfo>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterPassive {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "Unlock")]
    pub unlock: i32,

    #[serde(rename = "ParamList")]
    pub parameters: Vec<f64>,

    #[serde(rename = "Icon", deserialize_with = "icon")]
    pub icon: String
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterConstellation {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "ParamList")]
    pub parameters: Vec<f64>,

    #[serde(rename = "Icon", deserialize_with = "icon")]
    pub icon: String
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct UpgradeMaterial {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "Count")]
    pub count: u32,

    #[serde(rename = "Rank")]
    pub rarity: u8
}

impl UpgradeMaterial {
    #[inline]
    pub fn icon(&self) -> String {
        ui_uri("gi", format!("UI_ItemIcon_{}.webp", self.id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct UpgradeMaterialInfo {
    #[serde(rename = "Mats")]
    pub materials: Vec<UpgradeMaterial>,

    #[serde(rename = "Cost")]
    pub mora_cost: u32
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct UpgradeMaterialInfos {
    #[serde(rename = "Ascensions")]
    pub ascensions: Vec<UpgradeMaterialInfo>,

    /// Per talent, per level
    #[serde(rename = "Talents")]
    pub talents: Vec<Vec<UpgradeMaterialInfo>>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct FightPropGrowthCurve {
    #[serde(rename = "type")]
    pub stat_type: String,

    #[serde(rename = "growCurve")]
    pub growth_type: String
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterStatsModifier {
    /// Level -> base HP multiplier
    #[serde(rename = "HP")]
    pub hp: IndexMap<String, f64>,

    #[serde(rename = "ATK")]
    pub atk: IndexMap<String, f64>,

    #[serde(rename = "DEF")]
    pub def: IndexMap<String, f64>,

    /// Stat bonuses of each ascension phase, starting from the first one
    #[serde(rename = "Ascension")]
    pub ascension: Vec<IndexMap<String, f64>>,

    #[serde(rename = "PropGrowCurves")]
    pub prop_growth_curves: Vec<FightPropGrowthCurve>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterDetail {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "CharaInfo")]
    pub info: CharacterInfo,

    #[serde(rename = "Rarity", deserialize_with = "rarity")]
    pub rarity: u8,

    #[serde(rename = "Icon", deserialize_with = "icon")]
    pub icon: String,

    #[serde(rename = "Skills")]
    pub skills: Vec<CharacterSkill>,

    #[serde(rename = "Passives")]
    pub passives: Vec<CharacterPassive>,

    #[serde(rename = "Constellations")]
    pub constellations: Vec<CharacterConstellation>,

    #[serde(rename = "StaminaRecovery")]
    pub stamina_recovery: f64,

    #[serde(rename = "BaseHP")]
    pub base_hp: f64,

    #[serde(rename = "BaseATK")]
    pub base_atk: f64,

    #[serde(rename = "BaseDEF")]
    pub base_def: f64,

    #[serde(rename = "CritRate")]
    pub crit_rate: f64,

    #[serde(rename = "CritDMG")]
    pub crit_dmg: f64,

    #[serde(rename = "StatsModifier")]
    pub stats_modifier: CharacterStatsModifier,

    #[serde(rename = "Materials")]
    pub upgrade_materials: UpgradeMaterialInfos
}

impl CharacterDetail {
    /// Full size wish artwork
    #[inline]
    pub fn gacha_art(&self) -> String {
        self.icon.replace("AvatarIcon", "Gacha_AvatarImg")
    }
}
