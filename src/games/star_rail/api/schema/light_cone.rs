use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::schema::normalized;
use crate::games::star_rail::consts::HsrPath;

use super::{light_cone_rank, ui, Names};

/// Light cone entry of the light cones list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LightCone {
    #[serde(skip)]
    pub id: u32,

    #[serde(rename = "rank", deserialize_with = "light_cone_rank")]
    pub rarity: u8,

    #[serde(rename = "desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "baseType")]
    pub path: HsrPath,

    #[serde(flatten)]
    pub names: Names,

    #[serde(skip)]
    pub name: String
}

impl LightCone {
    #[inline]
    pub fn icon(&self) -> String {
        ui(format!("lightconemediumicon/{}.webp", self.id))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuperimposeInfo {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    /// Superimposition rank -> parameters
    #[serde(rename = "Level", deserialize_with = "param_lists")]
    pub parameters: IndexMap<String, Vec<f64>>
}

fn param_lists<'de, D: Deserializer<'de>>(deserializer: D) -> Result<IndexMap<String, Vec<f64>>, D::Error> {
    #[derive(Deserialize)]
    struct Level {
        #[serde(rename = "ParamList")]
        parameters: Vec<f64>
    }

    Ok(IndexMap::<String, Level>::deserialize(deserializer)?
        .into_iter()
        .map(|(rank, level)| (rank, level.parameters))
        .collect())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawLightConeDetail")]
pub struct LightConeDetail {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub path: HsrPath,
    pub rarity: u8,
    pub superimpose_info: SuperimposeInfo,

    /// Raw stats table of each ascension phase
    pub ascension_stats: Vec<IndexMap<String, serde_json::Value>>
}

impl LightConeDetail {
    #[inline]
    pub fn icon(&self) -> String {
        ui(format!("lightconemediumicon/{}.webp", self.id))
    }

    /// Full size artwork
    #[inline]
    pub fn image(&self) -> String {
        ui(format!("lightconemaxfigures/{}.webp", self.id))
    }
}

#[derive(Deserialize)]
struct RawLightConeDetail {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    description: String,

    #[serde(rename = "BaseType")]
    path: HsrPath,

    #[serde(rename = "Rarity", deserialize_with = "light_cone_rank")]
    rarity: u8,

    #[serde(rename = "Refinements")]
    superimpose_info: SuperimposeInfo,

    #[serde(rename = "Stats")]
    ascension_stats: Vec<IndexMap<String, serde_json::Value>>
}

impl TryFrom<RawLightConeDetail> for LightConeDetail {
    type Error = String;

    /// The light cone ID is only mentioned in its stats table
    fn try_from(raw: RawLightConeDetail) -> Result<Self, Self::Error> {
        let id = raw.ascension_stats.first()
            .and_then(|stats| stats.get("EquipmentID"))
            .and_then(|id| id.as_u64())
            .and_then(|id| u32::try_from(id).ok())
            .ok_or_else(|| String::from("light cone stats have no EquipmentID"))?;

        Ok(Self {
            id,
            name: raw.name,
            description: raw.description,
            path: raw.path,
            rarity: raw.rarity,
            superimpose_info: raw.superimpose_info,
            ascension_stats: raw.ascension_stats
        })
    }
}
