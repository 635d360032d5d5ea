use indexmap::IndexMap;

use crate::schema::*;

use super::fixtures::*;

#[test]
fn icon_stems() {
    assert_eq!(icon_stem("SpriteOutput/ItemFigures/71000.png"), "71000");
    assert_eq!(icon_stem("IconRole01"), "IconRole01");
}

#[test]
fn parse_entry_ids() {
    let url = "https://api.hakush.in/gi/data/weapon.json";

    assert_eq!(parse_id(url, "1309").ok(), Some(1309));

    let result = parse_id(url, "10000005-anemo");

    assert!(matches!(&result, Err(crate::error::HakushinError::Decode { url: error_url, .. }) if error_url == url));
}

#[cfg(feature = "genshin")]
mod genshin {
    use crate::consts::Language;
    use crate::games::genshin::prelude::*;
    use crate::games::genshin::api::schema::new::New;
    use crate::games::genshin::api::schema::character::{Character, CharacterDetail};
    use crate::games::genshin::api::schema::weapon::{Weapon, WeaponDetail};
    use crate::games::genshin::api::schema::artifact::{ArtifactSet, ArtifactSetDetail};

    use super::*;

    #[test]
    fn new_items() -> anyhow::Result<()> {
        let new = serde_json::from_str::<New>(GI_NEW)?;

        assert_eq!(new.character_ids, ["10000089", "10000005-anemo"]);
        assert_eq!(new.artifact_set_ids, [15035]);
        assert_eq!(new.version, "5.4.51");

        Ok(())
    }

    #[test]
    fn characters_list() -> anyhow::Result<()> {
        let characters = serde_json::from_str::<IndexMap<String, Character>>(GI_CHARACTERS)?;

        let ayaka = &characters["10000002"];

        assert_eq!(ayaka.rarity, 5);
        assert_eq!(ayaka.element, Some(GenshinElement::Cryo));
        assert_eq!(ayaka.description, "Daughter of the Kamisato Clan.");
        assert_eq!(ayaka.icon, "https://api.hakush.in/gi/UI/UI_AvatarIcon_Ayaka.webp");
        assert_eq!(ayaka.names.get(Language::Japanese), "神里綾華");

        // Traveler has no element
        assert_eq!(characters["10000005-anemo"].element, None);

        Ok(())
    }

    #[test]
    fn character_detail() -> anyhow::Result<()> {
        let character = serde_json::from_str::<CharacterDetail>(GI_CHARACTER_DETAIL)?;

        assert_eq!(character.description, "Daughter of the Yashiro Commission's Kamisato Clan. Dignified and elegant.");
        assert_eq!(character.skills[0].description, "Press to attack.");
        assert_eq!(character.gacha_art(), "https://api.hakush.in/gi/UI/UI_Gacha_AvatarImg_Ayaka.webp");

        let namecard = character.info.namecard.as_ref().map(|namecard| namecard.id);

        assert_eq!(namecard, Some(210051));

        let upgrade = &character.skills[0].upgrade_info["1"];

        assert_eq!(upgrade.attributes, ["1-Hit DMG|{param1:F1P}"]);
        assert_eq!(crate::text::replace_params(&upgrade.attributes[0], &upgrade.parameters), ["1-Hit DMG", "45.7%"]);

        let mora = &character.upgrade_materials.ascensions[0].materials[0];

        assert_eq!(mora.icon(), "https://api.hakush.in/gi/UI/UI_ItemIcon_202.webp");

        Ok(())
    }

    #[test]
    fn weapon_detail() -> anyhow::Result<()> {
        let weapon = serde_json::from_str::<WeaponDetail>(GI_WEAPON_DETAIL)?;

        assert_eq!(weapon.rarity, 5);
        assert_eq!(weapon.stat_modifiers["ATK"].levels["90"], 14.0);
        assert_eq!(weapon.refinements["1"].description, "Gain a 12% Elemental DMG Bonus.");

        Ok(())
    }

    #[test]
    fn weapons_list() -> anyhow::Result<()> {
        let weapons = serde_json::from_str::<IndexMap<String, Weapon>>(GI_WEAPONS)?;

        let mistsplitter = &weapons["11509"];

        assert_eq!(mistsplitter.rarity, 5);
        assert_eq!(mistsplitter.icon, "https://api.hakush.in/gi/UI/UI_EquipIcon_Sword_Narukami.webp");
        assert_eq!(mistsplitter.description, "A blade that cuts through mist.");
        assert_eq!(mistsplitter.names.get(Language::Korean), "안개를 가르는 회광");

        assert_eq!(weapons["11101"].rarity, 1);

        Ok(())
    }

    #[test]
    fn artifact_set_detail() -> anyhow::Result<()> {
        let set = serde_json::from_str::<ArtifactSetDetail>(GI_ARTIFACT_SET_DETAIL)?;

        assert_eq!(set.id, 15035);
        assert_eq!(set.icon, "https://api.hakush.in/gi/UI/UI_RelicIcon_15035_4.webp");
        assert_eq!(set.set_effect.two_piece.description, "While the equipping character is in Nightsoul's Blessing, DMG +15%.");
        assert_eq!(set.set_effect.two_piece.parameters, [0.15]);

        let four_piece = set.set_effect.four_piece.as_ref().map(|effect| effect.affix_id);

        assert_eq!(four_piece, Some(2150351));

        let flower = &set.parts["EQUIP_BRACER"];

        assert_eq!(flower.name, "Reckoning of the Xenogenic");
        assert_eq!(flower.description, "A flower of obsidian.");

        Ok(())
    }

    #[test]
    fn artifact_sets() -> anyhow::Result<()> {
        let sets = serde_json::from_str::<IndexMap<String, ArtifactSet>>(GI_ARTIFACT_SETS)?;

        let codex = &sets["15035"];

        assert_eq!(codex.rarities, [4, 5]);
        assert_eq!(codex.set_effect.two_piece.names.get(Language::Chinese), "黑曜秘典");
        assert!(codex.set_effect.four_piece.is_some());

        // 3 star sets have only the 2-piece bonus
        assert!(sets["10001"].set_effect.four_piece.is_none());

        Ok(())
    }
}

#[cfg(feature = "star-rail")]
mod star_rail {
    use crate::consts::Language;
    use crate::games::star_rail::prelude::*;
    use crate::games::star_rail::api::schema::character::{Character, CharacterDetail};
    use crate::games::star_rail::api::schema::light_cone::{LightCone, LightConeDetail};
    use crate::games::star_rail::api::schema::relic::{RelicSet, RelicSetDetail};
    use crate::games::star_rail::api::schema::monster::{Monster, MonsterDetail};
    use crate::games::star_rail::api::schema::enemy_groups::{EliteGroup, HardLevelGroup};

    use super::*;

    #[test]
    fn characters_list() -> anyhow::Result<()> {
        let characters = serde_json::from_str::<IndexMap<String, Character>>(HSR_CHARACTERS)?;

        let robin = &characters["1309"];

        assert_eq!(robin.rarity, 5);
        assert_eq!(robin.path, HsrPath::Harmony);
        assert_eq!(robin.element, HsrElement::Physical);
        assert_eq!(robin.description, "A Halovian singer.");

        assert_eq!(characters["8001"].description, "");
        assert_eq!(characters["8001"].path, HsrPath::Destruction);

        Ok(())
    }

    #[test]
    fn character_detail() -> anyhow::Result<()> {
        let character = serde_json::from_str::<CharacterDetail>(HSR_CHARACTER_DETAIL)?;

        assert_eq!(character.id, 1309);
        assert_eq!(character.description, "");
        assert_eq!(character.icon(), "https://api.hakush.in/hsr/UI/avatarshopicon/1309.webp");

        let skill = &character.skills["130901"];

        assert_eq!(skill.max_level(), 9);
        assert_eq!(skill.description, None);

        assert_eq!(
            character.eidolons["1"].image(),
            "https://api.hakush.in/hsr/UI/rank/_dependencies/textures/1309/1309_Rank_1.webp"
        );

        Ok(())
    }

    #[test]
    fn light_cone_id_from_stats() -> anyhow::Result<()> {
        let light_cone = serde_json::from_str::<LightConeDetail>(HSR_LIGHT_CONE_DETAIL)?;

        assert_eq!(light_cone.id, 23026);
        assert_eq!(light_cone.rarity, 5);
        assert_eq!(light_cone.description, "The moonlight flows.");
        assert_eq!(light_cone.superimpose_info.parameters["2"], [0.035, 0.28]);
        assert_eq!(light_cone.image(), "https://api.hakush.in/hsr/UI/lightconemaxfigures/23026.webp");

        Ok(())
    }

    #[test]
    fn light_cones_list() -> anyhow::Result<()> {
        let light_cones = serde_json::from_str::<IndexMap<String, LightCone>>(HSR_LIGHT_CONES)?;

        let nightglow = &light_cones["23026"];

        assert_eq!(nightglow.rarity, 5);
        assert_eq!(nightglow.path, HsrPath::Harmony);
        assert_eq!(nightglow.description, "The moonlight flows.");
        assert_eq!(nightglow.names.get(Language::Chinese), "夜色流光溢彩");

        Ok(())
    }

    #[test]
    fn light_cone_without_stats() {
        let json = HSR_LIGHT_CONE_DETAIL.replace(r#""EquipmentID": 23026, "#, "");

        assert!(serde_json::from_str::<LightConeDetail>(&json).is_err());
    }

    #[test]
    fn relic_set_detail() -> anyhow::Result<()> {
        let set = serde_json::from_str::<RelicSetDetail>(HSR_RELIC_SET_DETAIL)?;

        assert_eq!(set.icon, "https://api.hakush.in/hsr/UI/itemfigures/71021.webp");
        assert_eq!(set.set_effects.two_piece.description, "Increases ATK by 12%.");

        let four_piece = set.set_effects.four_piece.as_ref().map(|effect| effect.description.as_str());

        assert_eq!(four_piece, Some("Ignores 6% of DEF, up to 3 DoTs."));

        let relic = &set.parts["61111"];

        assert_eq!(relic.id, 61111);
        assert_eq!(relic.story, "It was sealed.");
        assert_eq!(relic.icon(), "https://api.hakush.in/hsr/UI/relicfigures/IconRelic_111_1.webp");

        Ok(())
    }

    #[test]
    fn relic_sets_list() -> anyhow::Result<()> {
        let sets = serde_json::from_str::<IndexMap<String, RelicSet>>(HSR_RELIC_SETS)?;

        let prisoner = &sets["102"];

        assert_eq!(prisoner.names.english, "Prisoner in Deep Confinement");
        assert_eq!(prisoner.set_effect.two_piece.descriptions.english, "Increases ATK by #1[i]%.");
        assert_eq!(prisoner.set_effect.two_piece.parameters, [0.12]);

        Ok(())
    }

    #[test]
    fn monsters_list() -> anyhow::Result<()> {
        let monsters = serde_json::from_str::<IndexMap<String, Monster>>(HSR_MONSTERS)?;

        let cocolia = &monsters["8003010"];

        assert_eq!(cocolia.icon, "https://api.hakush.in/hsr/UI/monsterfigure/Monster_8003010.webp");
        assert_eq!(cocolia.children, [800301001, 800301002]);
        assert_eq!(cocolia.weaknesses, [HsrElement::Fire, HsrElement::Physical]);
        assert_eq!(cocolia.description, "");
        assert_eq!(cocolia.names.get(Language::English), "Cocolia, Mother of Deception");

        Ok(())
    }

    #[test]
    fn monster_detail() -> anyhow::Result<()> {
        let monster = serde_json::from_str::<MonsterDetail>(HSR_MONSTER_DETAIL)?;

        assert_eq!(monster.description, "");
        assert_eq!(monster.attack_base, 0.0);
        assert_eq!(monster.spd_base, 100.0);
        assert_eq!(monster.icon(), "https://api.hakush.in/hsr/UI/monsterfigure/Monster_8003010.webp");

        let child = &monster.monster_types[0];

        assert_eq!(child.hp_modify_ratio, 1.5);
        assert_eq!(child.attack_modify_ratio, 1.0);
        assert_eq!(child.stance_weak_list, [HsrElement::Fire, HsrElement::Physical]);
        assert_eq!(child.damage_type_resistances[0].element, HsrElement::Ice);
        assert_eq!(child.skills[0].description, "Deals Ice DMG.");
        assert_eq!(child.skills[0].damage_type, None);

        Ok(())
    }

    #[test]
    fn enemy_group_ratios() -> anyhow::Result<()> {
        let elite = serde_json::from_str::<EliteGroup>(r#"{ "EliteGroup": 1, "AttackRatio": { "Value": 1.2 } }"#)?;

        assert_eq!(elite.attack_ratio, 1.2);
        assert_eq!(elite.hp_ratio, 1.0);

        let hard_level = serde_json::from_str::<HardLevelGroup>(r#"{ "HardLevelGroup": 1, "Level": 80, "SpeedRatio": { "Value": 1.32 } }"#)?;

        assert_eq!(hard_level.level, 80);
        assert_eq!(hard_level.spd_ratio, 1.32);
        assert_eq!(hard_level.stance_ratio, 1.0);

        Ok(())
    }

    #[test]
    fn paths() {
        for path in HsrPath::list() {
            assert_eq!(HsrPath::from_code(path.to_code()), Some(*path));
        }

        assert_eq!(HsrPath::from_code("Unknown"), None);
    }

    #[test]
    fn path_names() {
        assert_eq!(HsrPath::TheHunt.localized_name(Language::English), "The Hunt");
        assert_eq!(HsrPath::Remembrance.localized_name(Language::Japanese), "記憶");
        assert_eq!(HsrPath::Preservation.localized_name(Language::Chinese), "存护");
        assert_eq!(HsrPath::Nihility.localized_name(Language::Korean), "공허");

        for lang in Language::list() {
            for path in HsrPath::list() {
                assert!(!path.localized_name(*lang).is_empty());
            }
        }
    }
}

#[cfg(feature = "zzz")]
mod zzz {
    use crate::consts::Language;
    use crate::games::zzz::prelude::*;
    use crate::games::zzz::api::schema::character::{Character, CharacterDetail, Gender};
    use crate::games::zzz::api::schema::weapon::{Weapon, WeaponDetail};
    use crate::games::zzz::api::schema::bangboo::{Bangboo, BangbooDetail};
    use crate::games::zzz::api::schema::disc::{DriveDisc, DriveDiscDetail};

    use super::*;

    #[test]
    fn characters_list() -> anyhow::Result<()> {
        let mut characters = serde_json::from_str::<IndexMap<String, serde_json::Value>>(ZZZ_CHARACTERS)?;

        characters.shift_remove("2011");

        let anby = serde_json::from_value::<Character>(characters["1011"].clone())?;

        assert_eq!(anby.rarity, Some(ZzzRarity::A));
        assert_eq!(anby.specialty, ZzzSpecialty::Stun);
        assert_eq!(anby.element, Some(ZzzElement::Electric));
        assert_eq!(anby.attack_type, Some(ZzzAttackType::Slash));
        assert_eq!(anby.description, "A quiet agent.");
        assert_eq!(anby.icon(), "https://api.hakush.in/zzz/UI/IconRoleSelect01.webp");

        // Unknown attack type
        let nekomata = serde_json::from_value::<Character>(characters["1021"].clone())?;

        assert_eq!(nekomata.rarity, Some(ZzzRarity::S));
        assert_eq!(nekomata.attack_type, None);
        assert_eq!(nekomata.names.get(Language::Korean), "네코마타");

        Ok(())
    }

    #[test]
    fn character_detail() -> anyhow::Result<()> {
        let character = serde_json::from_str::<CharacterDetail>(ZZZ_CHARACTER_DETAIL)?;

        assert_eq!(character.rarity, Some(ZzzRarity::A));
        assert_eq!(character.gender, Gender::Female);
        assert_eq!(character.info, None);
        assert_eq!(character.faction.name, "Cunning Hares");
        assert_eq!(character.element.id, 203);

        // Tags are not numeric
        assert_eq!(character.stats.get("Attack"), Some(&95.0));
        assert!(!character.stats.contains_key("Tags"));

        assert_eq!(character.mindscape_cinemas[0].description, "Gains energy.");
        assert!(character.ascension[0].materials.is_empty());
        assert_eq!(character.extra_ascension[0].props[0].formatted_value(), "2");

        let basic = &character.skills[&ZzzSkillType::Basic];

        assert_eq!(basic.descriptions[0].description.as_deref(), Some("Press to attack."));
        assert_eq!(basic.materials["2"][0], Material { id: 10, amount: 2000 });

        assert_eq!(character.passive.levels[&1].descriptions, ["Deals damage."]);
        assert_eq!(character.mindscape_art(2), "https://api.hakush.in/zzz/UI/Mindscape_1011_2.webp");

        Ok(())
    }

    #[test]
    fn weapon_detail() -> anyhow::Result<()> {
        let weapon = serde_json::from_str::<WeaponDetail>(ZZZ_WEAPON_DETAIL)?;

        assert_eq!(weapon.rarity, Some(ZzzRarity::B));
        assert_eq!(weapon.weapon_type.specialty, ZzzSpecialty::Attack);
        assert_eq!(weapon.icon, "https://api.hakush.in/zzz/UI/Weapon_A_Common_01.webp");
        assert_eq!(weapon.base_property.formatted_value(), "42");
        assert_eq!(weapon.rand_property.formatted_value(), "20%");
        assert_eq!(weapon.refinements["1"].description, "Increases ATK by 12%.");

        Ok(())
    }

    #[test]
    fn weapons_list() -> anyhow::Result<()> {
        let weapons = serde_json::from_str::<IndexMap<String, Weapon>>(ZZZ_WEAPONS)?;

        let engine = &weapons["14001"];

        assert_eq!(engine.rarity, Some(ZzzRarity::B));
        assert_eq!(engine.specialty, ZzzSpecialty::Attack);
        assert_eq!(engine.icon, "https://api.hakush.in/zzz/UI/Weapon_A_Common_01.webp");
        assert_eq!(engine.names.get(Language::Japanese), "スターライトエンジン");

        Ok(())
    }

    #[test]
    fn bangboos_list() -> anyhow::Result<()> {
        let bangboos = serde_json::from_str::<IndexMap<String, Bangboo>>(ZZZ_BANGBOOS)?;

        let penguinboo = &bangboos["53001"];

        assert_eq!(penguinboo.rarity, Some(ZzzRarity::A));
        assert_eq!(penguinboo.code_name, "Penguinboo");
        assert_eq!(penguinboo.description, "");
        assert_eq!(penguinboo.icon, "https://api.hakush.in/zzz/UI/Bangboo_Avatar_Penguin.webp");

        Ok(())
    }

    #[test]
    fn drive_disc_detail() -> anyhow::Result<()> {
        let disc = serde_json::from_str::<DriveDiscDetail>(ZZZ_DRIVE_DISC_DETAIL)?;

        assert_eq!(disc.id, 31000);
        assert_eq!(disc.four_piece_effect, "ATK +9%.");
        assert_eq!(disc.icon, "https://api.hakush.in/zzz/UI/SuitWoodpeckerElectro.webp");

        Ok(())
    }

    #[test]
    fn bangboo_detail() -> anyhow::Result<()> {
        let bangboo = serde_json::from_str::<BangbooDetail>(ZZZ_BANGBOO_DETAIL)?;

        assert_eq!(bangboo.icon, "https://api.hakush.in/zzz/UI/Bangboo_Avatar_Penguin.webp");
        assert_eq!(bangboo.ascensions["1"].materials, [Material { id: 10, amount: 2000 }]);
        assert_eq!(bangboo.ascensions["1"].extra_props[0].formatted_value(), "12%");
        assert_eq!(bangboo.skills["A"]["1"].description, "Throws ice.");

        Ok(())
    }

    #[test]
    fn drive_disc_language_fallback() -> anyhow::Result<()> {
        let discs = serde_json::from_str::<IndexMap<String, DriveDisc>>(ZZZ_DRIVE_DISCS)?;

        let disc = &discs["31000"];

        assert_eq!(disc.info(Language::English).name, "Woodpecker Electro");
        assert_eq!(disc.info(Language::Korean).name, "啄木鸟电音");
        assert_eq!(disc.info(Language::Chinese).two_piece_effect, "暴击率+8%。");

        Ok(())
    }

    #[test]
    fn prop_formatting() {
        use crate::games::zzz::api::schema::common::format_prop_value;

        assert_eq!(format_prop_value("{0:0.#%}", 1200.0), "12%");
        assert_eq!(format_prop_value("{0:0.#%}", 1250.0), "12.5%");
        assert_eq!(format_prop_value("{0:0.#}", 86.6), "87");
    }

    #[test]
    fn enum_codes() {
        for specialty in ZzzSpecialty::list() {
            assert_eq!(ZzzSpecialty::try_from(u16::from(*specialty)).ok(), Some(*specialty));
        }

        assert!(ZzzElement::try_from(204).is_err());
        assert_eq!(ZzzRarity::from_rank(1), None);
    }
}
