use serde::{Deserialize, Deserializer};

use crate::consts::Language;
use crate::schema::{icon_stem, ui_uri};

use crate::games::star_rail::consts::{character_rarity, light_cone_rarity};

pub mod new;
pub mod character;
pub mod light_cone;
pub mod relic;
pub mod monster;
pub mod enemy_groups;

/// Localized strings as they're sent by the API, flattened into the entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct Names {
    #[serde(rename = "en")]
    pub english: String,

    #[serde(rename = "cn")]
    pub chinese: String,

    #[serde(rename = "kr")]
    pub korean: String,

    #[serde(rename = "jp")]
    pub japanese: String
}

impl Names {
    #[inline]
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::English  => &self.english,
            Language::Chinese  => &self.chinese,
            Language::Korean   => &self.korean,
            Language::Japanese => &self.japanese
        }
    }
}

/// `{base}/hsr/UI/{path}`
#[inline]
pub(crate) fn ui(path: impl AsRef<str>) -> String {
    ui_uri("hsr", path)
}

/// `SpriteOutput/ItemFigures/71000.png` -> `{base}/hsr/UI/itemfigures/71000.webp`
pub(crate) fn item_figure<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let path = String::deserialize(deserializer)?;

    Ok(ui(format!("itemfigures/{}.webp", icon_stem(&path))))
}

pub(crate) fn character_rank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let rarity = String::deserialize(deserializer)?;

    character_rarity(&rarity)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown character rarity: {rarity}")))
}

pub(crate) fn light_cone_rank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let rarity = String::deserialize(deserializer)?;

    light_cone_rarity(&rarity)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown light cone rarity: {rarity}")))
}
