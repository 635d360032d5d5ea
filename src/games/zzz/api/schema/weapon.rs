use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::schema::normalized;
use crate::games::zzz::consts::{ZzzRarity, ZzzSpecialty};

use super::common::format_prop_value;
use super::{icon, icon_file, rarity, Names};

/// W-Engine entry of the weapons list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Weapon {
    #[serde(skip)]
    pub id: u32,

    #[serde(deserialize_with = "icon")]
    pub icon: String,

    #[serde(flatten)]
    pub names: Names,

    #[serde(skip)]
    pub name: String,

    #[serde(rename = "type")]
    pub specialty: ZzzSpecialty,

    #[serde(rename = "rank", default, deserialize_with = "rarity")]
    pub rarity: Option<ZzzRarity>
}

/// Agent specialty which can use the W-Engine
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeaponType {
    pub specialty: ZzzSpecialty,
    pub name: String
}

impl<'de> Deserialize<'de> for WeaponType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (specialty, name) = IndexMap::<String, String>::deserialize(deserializer)?
            .into_iter()
            .next()
            .ok_or_else(|| serde::de::Error::custom("empty weapon type"))?;

        let specialty = specialty.parse::<u16>()
            .map_err(serde::de::Error::custom)?;

        Ok(Self {
            specialty: ZzzSpecialty::try_from(specialty).map_err(serde::de::Error::custom)?,
            name
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeaponProp {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Name2")]
    pub name2: String,

    #[serde(rename = "Format")]
    pub format: String,

    #[serde(rename = "Value")]
    pub value: f64
}

impl WeaponProp {
    /// `2400` with a percent format -> `24%`, `48` -> `48`
    #[inline]
    pub fn formatted_value(&self) -> String {
        format_prop_value(&self.format, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct WeaponLevel {
    #[serde(rename = "Exp")]
    pub exp: u32,

    #[serde(rename = "Rate")]
    pub rate: u32,

    #[serde(rename = "Rate2")]
    pub rate2: u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct WeaponStar {
    #[serde(rename = "StarRate")]
    pub star_rate: u32,

    #[serde(rename = "RandRate")]
    pub rand_rate: u32
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct WeaponRefinement {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeaponDetail {
    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "CodeName")]
    pub code_name: String,

    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "Desc2", deserialize_with = "normalized")]
    pub description2: String,

    #[serde(rename = "Desc3", deserialize_with = "normalized")]
    pub short_description: String,

    #[serde(rename = "Rarity", default, deserialize_with = "rarity")]
    pub rarity: Option<ZzzRarity>,

    #[serde(rename = "Icon", deserialize_with = "icon_file")]
    pub icon: String,

    #[serde(rename = "WeaponType")]
    pub weapon_type: WeaponType,

    #[serde(rename = "BaseProperty")]
    pub base_property: WeaponProp,

    #[serde(rename = "RandProperty")]
    pub rand_property: WeaponProp,

    /// Level -> level info
    #[serde(rename = "Level")]
    pub levels: IndexMap<String, WeaponLevel>,

    #[serde(rename = "Stars")]
    pub stars: IndexMap<String, WeaponStar>,

    #[serde(rename = "Materials")]
    pub materials: String,

    /// Refinement rank -> refinement
    #[serde(rename = "Talents")]
    pub refinements: IndexMap<String, WeaponRefinement>
}
