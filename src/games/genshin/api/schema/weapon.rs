use indexmap::IndexMap;
use serde::Deserialize;

use crate::schema::normalized;

use super::{icon, Names};

/// Weapon entry of the weapons list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Weapon {
    #[serde(skip)]
    pub id: u32,

    #[serde(deserialize_with = "icon")]
    pub icon: String,

    #[serde(rename = "rank")]
    pub rarity: u8,

    #[serde(rename = "desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(flatten)]
    pub names: Names,

    #[serde(skip)]
    pub name: String
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeaponStatModifier {
    #[serde(rename = "Base")]
    pub base: f64,

    /// Level -> multiplier of the base value
    #[serde(rename = "Levels")]
    pub levels: IndexMap<String, f64>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeaponRefinement {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "ParamList")]
    pub parameters: Vec<f64>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeaponDetail {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "Rarity")]
    pub rarity: u8,

    #[serde(rename = "Icon", deserialize_with = "icon")]
    pub icon: String,

    /// Fight prop -> stat modifier
    #[serde(rename = "StatsModifier")]
    pub stat_modifiers: IndexMap<String, WeaponStatModifier>,

    #[serde(rename = "XPRequirements")]
    pub xp_requirements: IndexMap<String, f64>,

    /// Ascension phase -> fight prop -> bonus value
    #[serde(rename = "Ascension")]
    pub ascension: IndexMap<String, IndexMap<String, f64>>,

    /// Refinement rank -> refinement, empty for 1-2 star weapons
    #[serde(rename = "Refinement", default)]
    pub refinements: IndexMap<String, WeaponRefinement>
}
