use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenshinElement {
    Hydro,
    Pyro,
    Cryo,
    Electro,
    Anemo,
    Geo,
    Dendro
}

impl GenshinElement {
    #[inline]
    pub fn list() -> &'static [GenshinElement] {
        &[Self::Hydro, Self::Pyro, Self::Cryo, Self::Electro, Self::Anemo, Self::Geo, Self::Dendro]
    }
}

/// Convert character quality string to its rarity
///
/// `QUALITY_PURPLE` -> `4`
#[inline]
pub fn character_rarity(quality: &str) -> Option<u8> {
    match quality {
        "QUALITY_PURPLE" => Some(4),
        "QUALITY_ORANGE" | "QUALITY_ORANGE_SP" => Some(5),

        _ => None
    }
}

/// Character level -> ascension phase for not yet ascended characters
pub const NOT_ASCENDED_LEVEL_TO_ASCENSION: &[(u32, u32)] = &[
    (80, 5), (70, 4), (60, 3), (50, 2), (40, 1), (20, 0)
];

/// Level range -> ascension phase for ascended characters
pub const ASCENDED_LEVEL_TO_ASCENSION: &[((u32, u32), u32)] = &[
    ((80, 90), 6), ((70, 80), 5), ((60, 70), 4), ((50, 60), 3), ((40, 50), 2), ((20, 40), 1)
];

pub const ASCENSION_TO_MAX_LEVEL: &[u32] = &[20, 40, 50, 60, 70, 80, 90];
