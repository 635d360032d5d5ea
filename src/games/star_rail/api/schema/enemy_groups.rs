//! Raw ExcelOutput tables of the enemy stat multipliers
//!
//! Final stats of elite and boss enemies are
//! `base * child monster ratio * group ratio`.

use serde::{Deserialize, Deserializer};

#[inline]
fn one() -> f64 {
    1.0
}

/// `{"Value": 2.32}` -> `2.32`
fn ratio<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    struct Ratio {
        #[serde(rename = "Value")]
        value: f64
    }

    Ok(Ratio::deserialize(deserializer)?.value)
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EliteGroup {
    #[serde(rename = "EliteGroup")]
    pub id: u32,

    #[serde(rename = "AttackRatio", default = "one", deserialize_with = "ratio")]
    pub attack_ratio: f64,

    #[serde(rename = "DefenceRatio", default = "one", deserialize_with = "ratio")]
    pub defence_ratio: f64,

    #[serde(rename = "HPRatio", default = "one", deserialize_with = "ratio")]
    pub hp_ratio: f64,

    #[serde(rename = "SpeedRatio", default = "one", deserialize_with = "ratio")]
    pub spd_ratio: f64,

    #[serde(rename = "StanceRatio", default = "one", deserialize_with = "ratio")]
    pub stance_ratio: f64
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HardLevelGroup {
    #[serde(rename = "HardLevelGroup")]
    pub id: u32,

    #[serde(rename = "Level")]
    pub level: u32,

    #[serde(rename = "AttackRatio", default = "one", deserialize_with = "ratio")]
    pub attack_ratio: f64,

    #[serde(rename = "DefenceRatio", default = "one", deserialize_with = "ratio")]
    pub defence_ratio: f64,

    #[serde(rename = "HPRatio", default = "one", deserialize_with = "ratio")]
    pub hp_ratio: f64,

    #[serde(rename = "SpeedRatio", default = "one", deserialize_with = "ratio")]
    pub spd_ratio: f64,

    #[serde(rename = "StanceRatio", default = "one", deserialize_with = "ratio")]
    pub stance_ratio: f64
}
