use serde::{Deserialize, Deserializer};

use crate::schema::{empty_as_none, icon_stem, normalized_or_empty, null_as_default};
use crate::games::star_rail::consts::HsrElement;

use super::{ui, Names};

/// Monster entry of the monsters list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Monster {
    #[serde(skip)]
    pub id: u32,

    #[serde(deserialize_with = "monster_figure")]
    pub icon: String,

    /// IDs of the monster variants
    #[serde(rename = "child")]
    pub children: Vec<u32>,

    #[serde(rename = "weak")]
    pub weaknesses: Vec<HsrElement>,

    #[serde(flatten)]
    pub names: Names,

    #[serde(rename = "desc", default, deserialize_with = "normalized_or_empty")]
    pub description: String,

    #[serde(skip)]
    pub name: String
}

/// `SpriteOutput/MonsterFigure/Monster_1001.png` -> `{base}/hsr/UI/monsterfigure/Monster_1001.webp`
fn monster_figure<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let path = String::deserialize(deserializer)?;

    Ok(ui(format!("monsterfigure/{}.webp", icon_stem(&path))))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnemySkill {
    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "SkillName", default, deserialize_with = "normalized_or_empty")]
    pub name: String,

    #[serde(rename = "SkillDesc", default, deserialize_with = "normalized_or_empty")]
    pub description: String,

    #[serde(rename = "DamageType", default, deserialize_with = "empty_as_none")]
    pub damage_type: Option<HsrElement>
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DamageTypeResistance {
    #[serde(rename = "DamageType")]
    pub element: HsrElement,

    #[serde(rename = "Value")]
    pub value: f64
}

#[inline]
fn one() -> f64 {
    1.0
}

/// Variant of a monster with its own modifiers
///
/// Final stats are `base * ratio`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChildMonster {
    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "AttackModifyRatio", default = "one")]
    pub attack_modify_ratio: f64,

    #[serde(rename = "DefenceModifyRatio", default = "one")]
    pub defence_modify_ratio: f64,

    #[serde(rename = "HPModifyRatio", default = "one")]
    pub hp_modify_ratio: f64,

    #[serde(rename = "SpeedModifyRatio", default = "one")]
    pub spd_modify_ratio: f64,

    /// Overrides the base speed when set
    #[serde(rename = "SpeedModifyValue", default)]
    pub spd_modify_value: Option<f64>,

    #[serde(rename = "StanceModifyRatio", default = "one")]
    pub stance_modify_ratio: f64,

    #[serde(rename = "StanceWeakList", default)]
    pub stance_weak_list: Vec<HsrElement>,

    #[serde(rename = "DamageTypeResistance", default)]
    pub damage_type_resistances: Vec<DamageTypeResistance>,

    #[serde(rename = "SkillList", default)]
    pub skills: Vec<EnemySkill>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonsterDetail {
    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "Rank")]
    pub rank: String,

    #[serde(rename = "Name", default, deserialize_with = "normalized_or_empty")]
    pub name: String,

    #[serde(rename = "Desc", default, deserialize_with = "normalized_or_empty")]
    pub description: String,

    #[serde(rename = "AttackBase", default, deserialize_with = "null_as_default")]
    pub attack_base: f64,

    #[serde(rename = "DefenceBase", default, deserialize_with = "null_as_default")]
    pub defence_base: f64,

    #[serde(rename = "HPBase", default, deserialize_with = "null_as_default")]
    pub hp_base: f64,

    #[serde(rename = "SpeedBase", default, deserialize_with = "null_as_default")]
    pub spd_base: f64,

    #[serde(rename = "StanceBase", default, deserialize_with = "null_as_default")]
    pub stance_base: f64,

    #[serde(rename = "StatusResistanceBase", default, deserialize_with = "null_as_default")]
    pub status_resistance_base: f64,

    #[serde(rename = "Child")]
    pub monster_types: Vec<ChildMonster>
}

impl MonsterDetail {
    #[inline]
    pub fn icon(&self) -> String {
        ui(format!("monsterfigure/Monster_{}.webp", self.id))
    }
}
