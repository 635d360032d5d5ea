use std::time::Duration;

use serde::{Serialize, Deserialize};

pub const API_BASE_URI: &str = "https://api.hakush.in";

/// Raw game tables used for HSR enemy stat groups
pub const GITLAB_DATA_URI: &str = "https://gitlab.com/Dimbreath/turnbasedgamedata/-/raw/main/ExcelOutput";

pub const DEFAULT_CACHE_PATH: &str = "./.cache/hakushin";

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

pub const DEFAULT_USER_AGENT: &str = concat!("hakushin-rs/", env!("CARGO_PKG_VERSION"));

lazy_static::lazy_static! {
    /// Timeout used by clients built without an explicit one
    ///
    /// Can be changed with `HAKUSHIN_REQUESTS_TIMEOUT` env variable (seconds)
    pub static ref REQUESTS_TIMEOUT: Duration = Duration::from_secs(
        std::env::var("HAKUSHIN_REQUESTS_TIMEOUT")
            .ok()
            .and_then(|timeout| timeout.parse().ok())
            .unwrap_or(8)
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    Genshin,
    StarRail,
    Zzz
}

impl Game {
    #[inline]
    pub fn list() -> &'static [Game] {
        &[Self::Genshin, Self::StarRail, Self::Zzz]
    }

    /// Convert enum value to its API path segment
    ///
    /// `Game::StarRail` -> `hsr`
    #[inline]
    pub fn to_code(&self) -> &'static str {
        match self {
            Self::Genshin  => "gi",
            Self::StarRail => "hsr",
            Self::Zzz      => "zzz"
        }
    }

    /// Try to convert string to enum
    ///
    /// - `gi` -> `Game::Genshin`
    /// - `star-rail` -> `Game::StarRail`
    pub fn from_str<T: AsRef<str>>(str: T) -> Option<Self> {
        match str.as_ref().to_ascii_lowercase().as_str() {
            "gi" | "genshin" | "genshin-impact" => Some(Self::Genshin),
            "hsr" | "star-rail" | "star_rail"   => Some(Self::StarRail),
            "zzz" | "zenless-zone-zero"         => Some(Self::Zzz),

            _ => None
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Chinese,
    Korean,
    Japanese
}

impl Language {
    #[inline]
    pub fn list() -> &'static [Language] {
        &[Self::English, Self::Chinese, Self::Korean, Self::Japanese]
    }

    /// Convert enum value to its code
    ///
    /// `Language::Chinese` -> `zh` (simplified chinese)
    #[inline]
    pub fn to_code(&self) -> &'static str {
        match self {
            Self::English  => "en",
            Self::Chinese  => "zh",
            Self::Korean   => "ko",
            Self::Japanese => "ja"
        }
    }

    /// Language segment used by the star rail data paths
    ///
    /// `Language::Japanese` -> `jp`
    #[inline]
    pub fn to_hsr_code(&self) -> &'static str {
        match self {
            Self::English  => "en",
            Self::Chinese  => "cn",
            Self::Korean   => "kr",
            Self::Japanese => "jp"
        }
    }

    /// Try to convert string to enum
    ///
    /// - `en` -> `Language::English`
    /// - `Japanese` -> `Language::Japanese`
    pub fn from_str<T: AsRef<str>>(str: T) -> Option<Self> {
        match str.as_ref() {
            "en" | "English"  | "english"  => Some(Self::English),
            "zh" | "Chinese"  | "chinese"  => Some(Self::Chinese),
            "ko" | "Korean"   | "korean"   => Some(Self::Korean),
            "ja" | "Japanese" | "japanese" => Some(Self::Japanese),

            _ => None
        }
    }
}

/// Fight props which values are shown as percents
pub const PERCENTAGE_FIGHT_PROPS: &[&str] = &[
    "FIGHT_PROP_HP_PERCENT",
    "FIGHT_PROP_ATTACK_PERCENT",
    "FIGHT_PROP_DEFENSE_PERCENT",
    "FIGHT_PROP_SPEED_PERCENT",
    "FIGHT_PROP_CRITICAL",
    "FIGHT_PROP_CRITICAL_HURT",
    "FIGHT_PROP_CHARGE_EFFICIENCY",
    "FIGHT_PROP_ADD_HURT",
    "FIGHT_PROP_HEAL_ADD",
    "FIGHT_PROP_HEALED_ADD",
    "FIGHT_PROP_FIRE_ADD_HURT",
    "FIGHT_PROP_WATER_ADD_HURT",
    "FIGHT_PROP_GRASS_ADD_HURT",
    "FIGHT_PROP_ELEC_ADD_HURT",
    "FIGHT_PROP_ICE_ADD_HURT",
    "FIGHT_PROP_WIND_ADD_HURT",
    "FIGHT_PROP_PHYSICAL_ADD_HURT",
    "FIGHT_PROP_ROCK_ADD_HURT",
    "FIGHT_PROP_SKILL_CD_MINUS_RATIO",
    "FIGHT_PROP_ATTACK_PERCENT_A",
    "FIGHT_PROP_DEFENSE_PERCENT_A",
    "FIGHT_PROP_HP_PERCENT_A",
    "criticalChance",
    "criticalDamage",
    "breakDamageAddedRatio",
    "breakDamageAddedRatioBase",
    "healRatio",
    "sPRatio",
    "statusProbability",
    "statusResistance",
    "criticalChanceBase",
    "criticalDamageBase",
    "healRatioBase",
    "sPRatioBase",
    "statusProbabilityBase",
    "statusResistanceBase",
    "physicalAddedRatio",
    "physicalResistance",
    "fireAddedRatio",
    "fireResistance",
    "iceAddedRatio",
    "iceResistance",
    "thunderAddedRatio",
    "thunderResistance",
    "windAddedRatio",
    "windResistance",
    "quantumAddedRatio",
    "quantumResistance",
    "imaginaryAddedRatio",
    "imaginaryResistance",
    "hPAddedRatio",
    "attackAddedRatio",
    "defenceAddedRatio",
    "healTakenRatio",
    "physicalResistanceDelta",
    "fireResistanceDelta",
    "iceResistanceDelta",
    "thunderResistanceDelta",
    "windResistanceDelta",
    "quantumResistanceDelta",
    "imaginaryResistanceDelta"
];

#[inline]
pub fn is_percentage_fight_prop(fight_prop: &str) -> bool {
    PERCENTAGE_FIGHT_PROPS.contains(&fight_prop)
}

/// Stat keys of the character schemas and their fight prop names
pub const STAT_TO_FIGHT_PROP: &[(&str, &str)] = &[
    ("BaseHP", "FIGHT_PROP_BASE_HP"),
    ("BaseDEF", "FIGHT_PROP_BASE_DEFENSE"),
    ("BaseATK", "FIGHT_PROP_BASE_ATTACK")
];

#[inline]
pub fn stat_to_fight_prop(stat: &str) -> &str {
    STAT_TO_FIGHT_PROP.iter()
        .find(|(key, _)| *key == stat)
        .map(|(_, fight_prop)| *fight_prop)
        .unwrap_or(stat)
}
