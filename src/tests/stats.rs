use std::collections::HashMap;

use indexmap::IndexMap;

use crate::consts::Game;
use crate::stats::*;

#[test]
#[cfg(feature = "genshin")]
fn genshin_ascension() {
    assert_eq!(ascension_from_level(1, false, Game::Genshin), 0);
    assert_eq!(ascension_from_level(20, false, Game::Genshin), 0);
    assert_eq!(ascension_from_level(20, true, Game::Genshin), 1);
    assert_eq!(ascension_from_level(40, false, Game::Genshin), 1);
    assert_eq!(ascension_from_level(40, true, Game::Genshin), 2);
    assert_eq!(ascension_from_level(45, false, Game::Genshin), 2);
    assert_eq!(ascension_from_level(90, true, Game::Genshin), 6);

    assert_eq!(max_level_for_ascension(0, Game::Genshin), Some(20));
    assert_eq!(max_level_for_ascension(6, Game::Genshin), Some(90));
    assert_eq!(max_level_for_ascension(7, Game::Genshin), None);
}

#[test]
#[cfg(feature = "star-rail")]
fn star_rail_ascension() {
    assert_eq!(ascension_from_level(20, false, Game::StarRail), 0);
    assert_eq!(ascension_from_level(30, false, Game::StarRail), 1);
    assert_eq!(ascension_from_level(30, true, Game::StarRail), 2);
    assert_eq!(ascension_from_level(80, true, Game::StarRail), 6);

    assert_eq!(max_level_for_ascension(2, Game::StarRail), Some(40));
}

#[test]
fn zzz_has_no_ascension_tables() {
    assert_eq!(ascension_from_level(60, true, Game::Zzz), 0);
    assert_eq!(max_level_for_ascension(1, Game::Zzz), None);
}

#[test]
#[cfg(feature = "genshin")]
fn genshin_stat_values() -> anyhow::Result<()> {
    use crate::games::genshin::api::schema::character::CharacterDetail;

    let character = serde_json::from_str::<CharacterDetail>(super::fixtures::GI_CHARACTER_DETAIL)?;

    let values = calc_upgrade_stat_values(&character, 90, true)
        .ok_or_else(|| anyhow::anyhow!("level 90 must be known"))?;

    assert_eq!(values["FIGHT_PROP_BASE_HP"], 10600.0);
    assert_eq!(values["FIGHT_PROP_BASE_ATTACK"], 260.0);
    assert_eq!(values["FIGHT_PROP_BASE_DEFENSE"], 610.0);
    assert_eq!(values["FIGHT_PROP_CRITICAL_HURT"], 0.384);

    // No ascension bonuses before the first ascension
    let values = calc_upgrade_stat_values(&character, 1, false)
        .ok_or_else(|| anyhow::anyhow!("level 1 must be known"))?;

    assert_eq!(values["FIGHT_PROP_BASE_HP"], 1000.0);
    assert!(!values.contains_key("FIGHT_PROP_CRITICAL_HURT"));

    assert!(calc_upgrade_stat_values(&character, 95, true).is_none());

    Ok(())
}

#[test]
fn stat_values_formatting() {
    let values = IndexMap::from([
        (String::from("FIGHT_PROP_BASE_HP"), 12980.7),
        (String::from("FIGHT_PROP_CRITICAL"), 24.2),
        (String::from("FIGHT_PROP_BASE_DEFENSE"), 2.5)
    ]);

    let formatted = format_stat_values(&values);

    assert_eq!(formatted["FIGHT_PROP_BASE_HP"], "12981");
    assert_eq!(formatted["FIGHT_PROP_CRITICAL"], "24.2%");
    assert_eq!(formatted["FIGHT_PROP_BASE_DEFENSE"], "2");
}

#[test]
fn fight_prop_names() {
    let values = IndexMap::from([
        (String::from("FIGHT_PROP_BASE_HP"), 1.0),
        (String::from("FIGHT_PROP_UNKNOWN"), 2.0)
    ]);

    let names = HashMap::from([
        (String::from("FIGHT_PROP_BASE_HP"), String::from("Base HP"))
    ]);

    let replaced = replace_fight_prop_with_name(&values, &names);

    assert_eq!(replaced.keys().collect::<Vec<_>>(), ["Base HP", "FIGHT_PROP_UNKNOWN"]);
    assert_eq!(replaced["Base HP"], 1.0);
}
