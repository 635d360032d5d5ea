use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::schema::normalized;

use super::{icon, Names};

/// Localized set effect of the artifact sets list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ArtifactSetEffect {
    #[serde(rename = "name")]
    pub names: Names,

    #[serde(rename = "desc")]
    pub descriptions: Names,

    #[serde(skip)]
    pub name: String,

    #[serde(skip)]
    pub description: String
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactSetEffects {
    pub two_piece: ArtifactSetEffect,

    /// Some low rarity sets have only the 1-piece / 2-piece bonus
    pub four_piece: Option<ArtifactSetEffect>
}

impl<'de> Deserialize<'de> for ArtifactSetEffects {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut effects = IndexMap::<String, ArtifactSetEffect>::deserialize(deserializer)?
            .into_values();

        let two_piece = effects.next()
            .ok_or_else(|| serde::de::Error::custom("artifact set has no set effects"))?;

        Ok(Self {
            two_piece,
            four_piece: effects.next()
        })
    }
}

/// Artifact set entry of the artifact sets list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ArtifactSet {
    #[serde(skip)]
    pub id: u32,

    #[serde(deserialize_with = "icon")]
    pub icon: String,

    #[serde(rename = "rank")]
    pub rarities: Vec<u8>,

    #[serde(rename = "set")]
    pub set_effect: ArtifactSetEffects,

    #[serde(skip)]
    pub name: String
}

impl ArtifactSet {
    /// Set names are the names of its first set effect
    #[inline]
    pub fn names(&self) -> &Names {
        &self.set_effect.two_piece.names
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetEffect {
    pub id: u32,

    #[serde(rename = "affixId")]
    pub affix_id: u32,

    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "paramList")]
    pub parameters: Vec<f64>
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactSetDetailSetEffects {
    pub two_piece: SetEffect,
    pub four_piece: Option<SetEffect>
}

impl<'de> Deserialize<'de> for ArtifactSetDetailSetEffects {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut effects = Vec::<SetEffect>::deserialize(deserializer)?.into_iter();

        let two_piece = effects.next()
            .ok_or_else(|| serde::de::Error::custom("artifact set has no set effects"))?;

        Ok(Self {
            two_piece,
            four_piece: effects.next()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Artifact {
    #[serde(rename = "Icon", deserialize_with = "icon")]
    pub icon: String,

    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArtifactSetDetail {
    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "Icon", deserialize_with = "icon")]
    pub icon: String,

    #[serde(rename = "Affix")]
    pub set_effect: ArtifactSetDetailSetEffects,

    /// Equip slot (`EQUIP_BRACER`, ...) -> artifact
    #[serde(rename = "Parts")]
    pub parts: IndexMap<String, Artifact>
}
