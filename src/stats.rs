//! Character level and stat helpers

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::consts::{is_percentage_fight_prop, Game};

#[cfg(feature = "genshin")]
use crate::consts::stat_to_fight_prop;

#[cfg(feature = "genshin")]
use crate::games::genshin::api::schema::character::CharacterDetail;

type AscensionTables = (
    &'static [(u32, u32)],
    &'static [((u32, u32), u32)],
    &'static [u32]
);

fn ascension_tables(game: Game) -> Option<AscensionTables> {
    match game {
        #[cfg(feature = "genshin")]
        Game::Genshin => {
            use crate::games::genshin::consts::*;

            Some((NOT_ASCENDED_LEVEL_TO_ASCENSION, ASCENDED_LEVEL_TO_ASCENSION, ASCENSION_TO_MAX_LEVEL))
        }

        #[cfg(feature = "star-rail")]
        Game::StarRail => {
            use crate::games::star_rail::consts::*;

            Some((NOT_ASCENDED_LEVEL_TO_ASCENSION, ASCENDED_LEVEL_TO_ASCENSION, ASCENSION_TO_MAX_LEVEL))
        }

        _ => None
    }
}

/// Ascension phase of a character of the given level
///
/// Not ascended characters at a level cap are still in the previous phase:
/// a GI character of level 40 is in phase 1, or in phase 2 once ascended.
/// Returns 0 for games without ascension tables.
pub fn ascension_from_level(level: u32, ascended: bool, game: Game) -> u32 {
    let Some((not_ascended, ascended_ranges, _)) = ascension_tables(game) else {
        return 0;
    };

    if !ascended {
        if let Some((_, ascension)) = not_ascended.iter().find(|(cap, _)| *cap == level) {
            return *ascension;
        }
    }

    ascended_ranges.iter()
        .find(|((start, end), _)| (*start..=*end).contains(&level))
        .map(|(_, ascension)| *ascension)
        .unwrap_or_default()
}

/// Level cap of the ascension phase
pub fn max_level_for_ascension(ascension: u32, game: Game) -> Option<u32> {
    let (_, _, max_levels) = ascension_tables(game)?;

    max_levels.get(ascension as usize).copied()
}

/// Fight prop -> value of the GI character stats at the given level
///
/// Returns `None` if the character has no stat multipliers for the level.
#[cfg(feature = "genshin")]
pub fn calc_upgrade_stat_values(character: &CharacterDetail, level: u32, ascended: bool) -> Option<IndexMap<String, f64>> {
    let modifier = &character.stats_modifier;
    let level_key = level.to_string();

    let mut values = IndexMap::new();

    values.insert(String::from("FIGHT_PROP_BASE_HP"), character.base_hp * modifier.hp.get(&level_key)?);
    values.insert(String::from("FIGHT_PROP_BASE_ATTACK"), character.base_atk * modifier.atk.get(&level_key)?);
    values.insert(String::from("FIGHT_PROP_BASE_DEFENSE"), character.base_def * modifier.def.get(&level_key)?);

    let ascension = ascension_from_level(level, ascended, Game::Genshin);

    // Bonuses list starts from the first ascension phase
    let bonuses = ascension.checked_sub(1)
        .and_then(|index| modifier.ascension.get(index as usize));

    for (stat, bonus) in bonuses.into_iter().flatten() {
        *values.entry(stat_to_fight_prop(stat).to_string()).or_insert(0.0) += bonus;
    }

    Some(values)
}

/// Percentage props get one decimal and a `%` sign, others are rounded
///
/// `FIGHT_PROP_CRITICAL: 24.2` -> `24.2%`, `FIGHT_PROP_BASE_HP: 12980.7` -> `12981`
pub fn format_stat_values(values: &IndexMap<String, f64>) -> IndexMap<String, String> {
    values.iter()
        .map(|(fight_prop, value)| {
            let value = if is_percentage_fight_prop(fight_prop) {
                format!("{value:.1}%")
            } else {
                format!("{}", value.round_ties_even())
            };

            (fight_prop.clone(), value)
        })
        .collect()
}

/// Replace fight prop keys with their display names, unknown props are kept as is
pub fn replace_fight_prop_with_name<T: Clone>(values: &IndexMap<String, T>, names: &HashMap<String, String>) -> IndexMap<String, T> {
    values.iter()
        .map(|(fight_prop, value)| {
            let name = names.get(fight_prop).unwrap_or(fight_prop);

            (name.clone(), value.clone())
        })
        .collect()
}
