use serde::Deserialize;

use crate::consts::Language;
use crate::schema::{normalized, normalized_or_empty};

use super::icon_file;

/// Localized drive disc set info
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct DriveDiscInfo {
    #[serde(deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "desc2", default, deserialize_with = "normalized_or_empty")]
    pub two_piece_effect: String,

    #[serde(rename = "desc4", default, deserialize_with = "normalized_or_empty")]
    pub four_piece_effect: String
}

/// Drive disc set entry of the drive discs list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct DriveDisc {
    #[serde(skip)]
    pub id: u32,

    #[serde(deserialize_with = "icon_file")]
    pub icon: String,

    #[serde(skip)]
    pub name: String,

    /// May be empty
    #[serde(skip)]
    pub two_piece_effect: String,

    /// May be empty
    #[serde(skip)]
    pub four_piece_effect: String,

    #[serde(rename = "EN", default)]
    pub en_info: Option<DriveDiscInfo>,

    #[serde(rename = "KO", default)]
    pub ko_info: Option<DriveDiscInfo>,

    /// Chinese info is always present
    #[serde(rename = "CHS")]
    pub chs_info: DriveDiscInfo,

    #[serde(rename = "JA", default)]
    pub ja_info: Option<DriveDiscInfo>
}

impl DriveDisc {
    /// Info in the given language, Chinese one if it's not translated yet
    pub fn info(&self, lang: Language) -> &DriveDiscInfo {
        let info = match lang {
            Language::English  => self.en_info.as_ref(),
            Language::Korean   => self.ko_info.as_ref(),
            Language::Japanese => self.ja_info.as_ref(),
            Language::Chinese  => None
        };

        info.unwrap_or(&self.chs_info)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct DriveDiscDetail {
    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc2", default, deserialize_with = "normalized_or_empty")]
    pub two_piece_effect: String,

    #[serde(rename = "Desc4", default, deserialize_with = "normalized_or_empty")]
    pub four_piece_effect: String,

    #[serde(rename = "Story", default, deserialize_with = "normalized_or_empty")]
    pub story: String,

    #[serde(rename = "Icon", deserialize_with = "icon_file")]
    pub icon: String
}
