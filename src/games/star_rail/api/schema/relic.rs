use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::schema::normalized;
use crate::text::replace_placeholders;

use super::{item_figure, ui, Names};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Relic {
    /// Key of the parts map
    #[serde(skip)]
    pub id: u32,

    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "Story", deserialize_with = "normalized")]
    pub story: String
}

impl Relic {
    /// Relic IDs are `{rarity}{set id}{part}`, e.g. `61011`
    pub fn icon(&self) -> String {
        let id = self.id.to_string();

        let set = id.get(1..4).unwrap_or_default();
        let part = id.get(id.len().saturating_sub(1)..).unwrap_or_default();

        ui(format!("relicfigures/IconRelic_{set}_{part}.webp"))
    }
}

fn relic_parts<'de, D: Deserializer<'de>>(deserializer: D) -> Result<IndexMap<String, Relic>, D::Error> {
    IndexMap::<String, Relic>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, mut relic)| {
            relic.id = key.parse().map_err(serde::de::Error::custom)?;

            Ok((key, relic))
        })
        .collect()
}

/// Set effect with its placeholders already filled
#[derive(Debug, Clone, PartialEq)]
pub struct SetDetailSetEffect {
    pub description: String,
    pub parameters: Vec<f64>
}

impl<'de> Deserialize<'de> for SetDetailSetEffect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(rename = "Desc", deserialize_with = "normalized")]
            description: String,

            #[serde(rename = "ParamList")]
            parameters: Vec<f64>
        }

        let raw = Raw::deserialize(deserializer)?;

        Ok(Self {
            description: replace_placeholders(&raw.description, &raw.parameters),
            parameters: raw.parameters
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetDetailSetEffects {
    pub two_piece: SetDetailSetEffect,

    /// Planar ornaments have only the 2-piece bonus
    pub four_piece: Option<SetDetailSetEffect>
}

impl<'de> Deserialize<'de> for SetDetailSetEffects {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (two_piece, four_piece) = pieces(deserializer)?;

        Ok(Self { two_piece, four_piece })
    }
}

/// Split `{"2": ..., "4": ...}` into the 2-piece and the optional 4-piece effects
fn pieces<'de, D, T>(deserializer: D) -> Result<(T, Option<T>), D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>
{
    let mut effects = IndexMap::<String, T>::deserialize(deserializer)?;

    let two_piece = effects.shift_remove("2")
        .ok_or_else(|| serde::de::Error::custom("relic set has no 2-piece effect"))?;

    Ok((two_piece, effects.shift_remove("4")))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelicSetDetail {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Icon", deserialize_with = "item_figure")]
    pub icon: String,

    /// Relic ID -> relic
    #[serde(rename = "Parts", deserialize_with = "relic_parts")]
    pub parts: IndexMap<String, Relic>,

    #[serde(rename = "RequireNum")]
    pub set_effects: SetDetailSetEffects
}

/// Set effect of the relic sets list, localized by the client
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelicSetEffect {
    #[serde(flatten)]
    pub descriptions: Names,

    #[serde(skip)]
    pub description: String,

    #[serde(rename = "ParamList")]
    pub parameters: Vec<f64>
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelicSetEffects {
    pub two_piece: RelicSetEffect,
    pub four_piece: Option<RelicSetEffect>
}

impl<'de> Deserialize<'de> for RelicSetEffects {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (two_piece, four_piece) = pieces(deserializer)?;

        Ok(Self { two_piece, four_piece })
    }
}

/// Relic set entry of the relic sets list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelicSet {
    #[serde(skip)]
    pub id: u32,

    #[serde(deserialize_with = "item_figure")]
    pub icon: String,

    #[serde(flatten)]
    pub names: Names,

    #[serde(skip)]
    pub name: String,

    #[serde(rename = "set")]
    pub set_effect: RelicSetEffects
}
