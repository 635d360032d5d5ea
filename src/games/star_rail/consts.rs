use serde::{Serialize, Deserialize};

use crate::consts::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HsrElement {
    Ice,
    Fire,
    Thunder,
    Wind,
    Physical,
    Quantum,
    Imaginary
}

impl HsrElement {
    #[inline]
    pub fn list() -> &'static [HsrElement] {
        &[Self::Ice, Self::Fire, Self::Thunder, Self::Wind, Self::Physical, Self::Quantum, Self::Imaginary]
    }
}

/// Character path. Serialized with the internal upstream names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HsrPath {
    #[serde(rename = "Knight")]
    Preservation,

    #[serde(rename = "Rogue")]
    TheHunt,

    #[serde(rename = "Warrior")]
    Destruction,

    #[serde(rename = "Mage")]
    Erudition,

    #[serde(rename = "Shaman")]
    Harmony,

    #[serde(rename = "Warlock")]
    Nihility,

    #[serde(rename = "Priest")]
    Abundance,

    #[serde(rename = "Memory")]
    Remembrance
}

impl HsrPath {
    #[inline]
    pub fn list() -> &'static [HsrPath] {
        &[
            Self::Preservation,
            Self::TheHunt,
            Self::Destruction,
            Self::Erudition,
            Self::Harmony,
            Self::Nihility,
            Self::Abundance,
            Self::Remembrance
        ]
    }

    /// Internal name used by the API
    ///
    /// `HsrPath::TheHunt` -> `Rogue`
    pub fn to_code(&self) -> &'static str {
        match self {
            Self::Preservation => "Knight",
            Self::TheHunt      => "Rogue",
            Self::Destruction  => "Warrior",
            Self::Erudition    => "Mage",
            Self::Harmony      => "Shaman",
            Self::Nihility     => "Warlock",
            Self::Abundance    => "Priest",
            Self::Remembrance  => "Memory"
        }
    }

    pub fn from_code<T: AsRef<str>>(code: T) -> Option<Self> {
        Self::list().iter()
            .copied()
            .find(|path| path.to_code() == code.as_ref())
    }

    /// In-game name of the path
    pub fn localized_name(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Abundance    => "Abundance",
                Self::Destruction  => "Destruction",
                Self::Erudition    => "Erudition",
                Self::Harmony      => "Harmony",
                Self::Nihility     => "Nihility",
                Self::Preservation => "Preservation",
                Self::TheHunt      => "The Hunt",
                Self::Remembrance  => "Remembrance"
            }

            Language::Japanese => match self {
                Self::Abundance    => "豊穣",
                Self::Destruction  => "壊滅",
                Self::Erudition    => "知恵",
                Self::Harmony      => "調和",
                Self::Nihility     => "虚無",
                Self::Preservation => "存護",
                Self::TheHunt      => "巡狩",
                Self::Remembrance  => "記憶"
            }

            Language::Chinese => match self {
                Self::Abundance    => "丰饶",
                Self::Destruction  => "毁灭",
                Self::Erudition    => "智识",
                Self::Harmony      => "同谐",
                Self::Nihility     => "虚无",
                Self::Preservation => "存护",
                Self::TheHunt      => "巡猎",
                Self::Remembrance  => "记忆"
            }

            Language::Korean => match self {
                Self::Abundance    => "풍요",
                Self::Destruction  => "파멸",
                Self::Erudition    => "지식",
                Self::Harmony      => "화합",
                Self::Nihility     => "공허",
                Self::Preservation => "보존",
                Self::TheHunt      => "수렵",
                Self::Remembrance  => "기억"
            }
        }
    }
}

/// Name shown instead of the `{NICKNAME}` placeholder
#[inline]
pub fn trailblazer_name(lang: Language) -> &'static str {
    match lang {
        Language::English  => "Trailblazer",
        Language::Japanese => "開拓者",
        Language::Chinese  => "开拓者",
        Language::Korean   => "개척자"
    }
}

/// `CombatPowerAvatarRarityType5` -> `5`
#[inline]
pub fn character_rarity(rarity: &str) -> Option<u8> {
    match rarity {
        "CombatPowerAvatarRarityType4" => Some(4),
        "CombatPowerAvatarRarityType5" => Some(5),

        _ => None
    }
}

/// `CombatPowerLightconeRarity3` -> `3`
#[inline]
pub fn light_cone_rarity(rarity: &str) -> Option<u8> {
    match rarity {
        "CombatPowerLightconeRarity3" => Some(3),
        "CombatPowerLightconeRarity4" => Some(4),
        "CombatPowerLightconeRarity5" => Some(5),

        _ => None
    }
}

/// Character level -> ascension phase for not yet ascended characters
pub const NOT_ASCENDED_LEVEL_TO_ASCENSION: &[(u32, u32)] = &[
    (70, 5), (60, 4), (50, 3), (40, 2), (30, 1), (20, 0)
];

/// Level range -> ascension phase for ascended characters
pub const ASCENDED_LEVEL_TO_ASCENSION: &[((u32, u32), u32)] = &[
    ((70, 80), 6), ((60, 70), 5), ((50, 60), 4), ((40, 50), 3), ((30, 40), 2), ((20, 30), 1)
];

pub const ASCENSION_TO_MAX_LEVEL: &[u32] = &[20, 30, 40, 50, 60, 70, 80];
