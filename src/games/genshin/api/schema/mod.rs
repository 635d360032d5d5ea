use serde::{Deserialize, Deserializer};

use crate::consts::Language;
use crate::schema::ui_uri;

use crate::games::genshin::consts::character_rarity;

pub mod new;
pub mod character;
pub mod weapon;
pub mod artifact;

/// Localized names as they're sent by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct Names {
    #[serde(rename = "EN")]
    pub english: String,

    #[serde(rename = "CHS")]
    pub chinese: String,

    #[serde(rename = "KR")]
    pub korean: String,

    #[serde(rename = "JP")]
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

/// `UI_AvatarIcon_Ayaka` -> `https://api.hakush.in/gi/UI/UI_AvatarIcon_Ayaka.webp`
pub(crate) fn icon<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(ui_uri("gi", format!("{}.webp", String::deserialize(deserializer)?)))
}

pub(crate) fn rarity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let quality = String::deserialize(deserializer)?;

    character_rarity(&quality)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown character quality: {quality}")))
}
