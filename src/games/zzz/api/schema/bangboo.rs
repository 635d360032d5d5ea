use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::schema::{map_values, materials, normalized, normalized_or_empty, numeric_map, Material};
use crate::games::zzz::consts::ZzzRarity;

use super::common::ExtraProp;
use super::{icon_file, rarity, Names};

/// Bangboo entry of the bangboos list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bangboo {
    #[serde(skip)]
    pub id: u32,

    #[serde(deserialize_with = "icon_file")]
    pub icon: String,

    #[serde(rename = "rank", default, deserialize_with = "rarity")]
    pub rarity: Option<ZzzRarity>,

    #[serde(rename = "codename")]
    pub code_name: String,

    #[serde(rename = "desc", default, deserialize_with = "normalized_or_empty")]
    pub description: String,

    #[serde(flatten)]
    pub names: Names,

    #[serde(skip)]
    pub name: String
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BangbooAscension {
    #[serde(rename = "HpMax")]
    pub max_hp: u32,

    #[serde(rename = "Attack")]
    pub attack: u32,

    #[serde(rename = "Defence")]
    pub defense: u32,

    #[serde(rename = "LevelMax")]
    pub max_level: u32,

    #[serde(rename = "LevelMin")]
    pub min_level: u32,

    #[serde(rename = "Materials", default, deserialize_with = "materials")]
    pub materials: Vec<Material>,

    #[serde(rename = "Extra", default, deserialize_with = "map_values")]
    pub extra_props: Vec<ExtraProp>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct BangbooSkill {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "Property", default)]
    pub properties: Vec<String>,

    #[serde(rename = "Param", default)]
    pub parameter: String
}

/// `{"A": {"Level": {"1": skill}}}` -> `{"A": {"1": skill}}`
fn skill_levels<'de, D>(deserializer: D) -> Result<IndexMap<String, IndexMap<String, BangbooSkill>>, D::Error>
where
    D: Deserializer<'de>
{
    #[derive(Deserialize)]
    struct Levels {
        #[serde(rename = "Level")]
        levels: IndexMap<String, BangbooSkill>
    }

    Ok(IndexMap::<String, Levels>::deserialize(deserializer)?
        .into_iter()
        .map(|(slot, skill)| (slot, skill.levels))
        .collect())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BangbooDetail {
    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "CodeName")]
    pub code_name: String,

    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "Rarity", deserialize_with = "rarity")]
    pub rarity: Option<ZzzRarity>,

    #[serde(rename = "Icon", deserialize_with = "icon_file")]
    pub icon: String,

    #[serde(rename = "Stats", deserialize_with = "numeric_map")]
    pub stats: HashMap<String, f64>,

    /// Ascension phase -> ascension info
    #[serde(rename = "Level")]
    pub ascensions: IndexMap<String, BangbooAscension>,

    /// Skill slot (`A`, `B`, `C`) -> level -> skill
    #[serde(rename = "Skill", deserialize_with = "skill_levels")]
    pub skills: IndexMap<String, IndexMap<String, BangbooSkill>>
}
