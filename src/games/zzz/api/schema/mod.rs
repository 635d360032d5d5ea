use serde::{Deserialize, Deserializer};

use crate::consts::Language;
use crate::schema::{icon_stem, ui_uri};

use crate::games::zzz::consts::{ZzzAttackType, ZzzRarity};

pub mod common;
pub mod new;
pub mod character;
pub mod weapon;
pub mod bangboo;
pub mod disc;

/// Localized names as they're sent by the API, flattened into the entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct Names {
    #[serde(rename = "EN")]
    pub english: String,

    #[serde(rename = "CHS")]
    pub chinese: String,

    #[serde(rename = "KO")]
    pub korean: String,

    #[serde(rename = "JA")]
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

/// `{base}/zzz/UI/{path}`
#[inline]
pub(crate) fn ui(path: impl AsRef<str>) -> String {
    ui_uri("zzz", path)
}

/// `IconRole01` -> `{base}/zzz/UI/IconRole01.webp`
pub(crate) fn icon<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(ui(format!("{}.webp", String::deserialize(deserializer)?)))
}

/// `Assets/.../Bangboo_Avatar_Penguin.png` -> `{base}/zzz/UI/Bangboo_Avatar_Penguin.webp`
pub(crate) fn icon_file<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let path = String::deserialize(deserializer)?;

    Ok(ui(format!("{}.webp", icon_stem(&path))))
}

/// `4` -> `Some(S)`, `null` -> `None`
pub(crate) fn rarity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ZzzRarity>, D::Error> {
    match Option::<u8>::deserialize(deserializer)? {
        Some(rank) => ZzzRarity::from_rank(rank)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown rank: {rank}"))),

        None => Ok(None)
    }
}

/// Unknown attack types are reported as none
pub(crate) fn attack_type<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ZzzAttackType>, D::Error> {
    Ok(Option::<u16>::deserialize(deserializer)?
        .and_then(|value| ZzzAttackType::try_from(value).ok()))
}
