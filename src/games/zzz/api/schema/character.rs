use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::schema::{
    empty_as_none, map_values, material_groups, materials, normalized,
    normalized_opt, normalized_or_empty, numeric_map, Material
};

use crate::text::normalize_text;
use crate::games::zzz::consts::{ZzzAttackType, ZzzElement, ZzzRarity, ZzzSkillType, ZzzSpecialty};

use super::common::ExtraProp;
use super::{attack_type, icon, rarity, ui, Names};

/// Agent entry of the characters list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Character {
    #[serde(skip)]
    pub id: u32,

    /// Internal code name like `Anby`
    #[serde(rename = "code")]
    pub code_name: String,

    #[serde(rename = "rank", default, deserialize_with = "rarity")]
    pub rarity: Option<ZzzRarity>,

    #[serde(rename = "type")]
    pub specialty: ZzzSpecialty,

    #[serde(default)]
    pub element: Option<ZzzElement>,

    #[serde(rename = "hit", default, deserialize_with = "attack_type")]
    pub attack_type: Option<ZzzAttackType>,

    #[serde(rename = "icon", deserialize_with = "icon")]
    pub image: String,

    #[serde(rename = "desc", default, deserialize_with = "normalized_or_empty")]
    pub description: String,

    #[serde(flatten)]
    pub names: Names,

    #[serde(skip)]
    pub name: String
}

impl Character {
    /// `IconRole01` -> `IconRoleSelect01`
    #[inline]
    pub fn icon(&self) -> String {
        self.image.replace("Role", "RoleSelect")
    }

    /// Mindscape cinema art of the given phase (1-3)
    #[inline]
    pub fn mindscape_art(&self, phase: u8) -> String {
        mindscape_art(self.id, phase)
    }
}

#[inline]
fn mindscape_art(id: u32, phase: u8) -> String {
    ui(format!("Mindscape_{id}_{phase}.webp"))
}

/// Single `{id: name}` property like `{"1": "Attack"}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterProp {
    pub id: u32,
    pub name: String
}

impl<'de> Deserialize<'de> for CharacterProp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (id, name) = IndexMap::<String, String>::deserialize(deserializer)?
            .into_iter()
            .next()
            .ok_or_else(|| serde::de::Error::custom("empty character property"))?;

        Ok(Self {
            id: id.parse().map_err(serde::de::Error::custom)?,
            name: normalize_text(&name)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            1 => Ok(Self::Male),
            _ => Ok(Self::Female)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct CharacterInfo {
    #[serde(rename = "Birthday")]
    pub birthday: String,

    #[serde(rename = "FullName", deserialize_with = "normalized")]
    pub full_name: String,

    #[serde(rename = "Gender")]
    pub gender: String,

    #[serde(rename = "ImpressionF", deserialize_with = "normalized")]
    pub female_impression: String,

    #[serde(rename = "ImpressionM", deserialize_with = "normalized")]
    pub male_impression: String,

    #[serde(rename = "OutlookDesc", deserialize_with = "normalized")]
    pub outlook_description: String,

    #[serde(rename = "ProfileDesc", deserialize_with = "normalized")]
    pub profile_description: String,

    #[serde(rename = "Race")]
    pub faction: String,

    #[serde(rename = "UnlockCondition", default)]
    pub unlock_conditions: Vec<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct MindscapeCinema {
    #[serde(rename = "Level")]
    pub level: u32,

    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "Desc2", deserialize_with = "normalized")]
    pub description2: String
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct CharacterAscension {
    #[serde(rename = "HpMax")]
    pub max_hp: u32,

    #[serde(rename = "Attack")]
    pub attack: u32,

    #[serde(rename = "Defence")]
    pub defense: u32,

    #[serde(rename = "LevelMax")]
    pub max_level: u32,

    #[serde(rename = "LevelMin")]
    pub min_level: u32,

    #[serde(rename = "Materials", default, deserialize_with = "materials")]
    pub materials: Vec<Material>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterExtraAscension {
    #[serde(rename = "MaxLevel")]
    pub max_level: u32,

    #[serde(rename = "Extra", deserialize_with = "map_values")]
    pub props: Vec<ExtraProp>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct SkillParamProp {
    #[serde(rename = "Main")]
    pub main: i64,

    #[serde(rename = "Growth")]
    pub growth: i64,

    #[serde(rename = "Format")]
    pub format: String
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillDescriptionParam {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", deserialize_with = "normalized")]
    pub description: String,

    #[serde(rename = "Param", default)]
    pub params: Option<IndexMap<String, SkillParamProp>>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillDescription {
    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "Desc", default, deserialize_with = "normalized_opt")]
    pub description: Option<String>,

    #[serde(rename = "Param", default)]
    pub params: Option<Vec<SkillDescriptionParam>>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterSkill {
    #[serde(rename = "Description")]
    pub descriptions: Vec<SkillDescription>,

    /// Skill level -> level up materials
    #[serde(rename = "Material", default, deserialize_with = "material_groups")]
    pub materials: HashMap<String, Vec<Material>>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct CoreSkillLevel {
    #[serde(rename = "Level")]
    pub level: u32,

    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "Name")]
    pub names: Vec<String>,

    #[serde(rename = "Desc", deserialize_with = "normalized_list")]
    pub descriptions: Vec<String>
}

fn normalized_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Vec::<String>::deserialize(deserializer)?
        .iter()
        .map(|text| normalize_text(text))
        .collect())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoreSkill {
    /// Core skill level -> level info
    #[serde(rename = "Level")]
    pub levels: IndexMap<u32, CoreSkillLevel>,

    #[serde(rename = "Materials", default, deserialize_with = "material_groups")]
    pub level_up_materials: HashMap<String, Vec<Material>>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterDetail {
    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "Icon", deserialize_with = "icon")]
    pub image: String,

    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    #[serde(rename = "CodeName")]
    pub code_name: String,

    #[serde(rename = "Rarity", default, deserialize_with = "rarity")]
    pub rarity: Option<ZzzRarity>,

    #[serde(rename = "WeaponType")]
    pub specialty: CharacterProp,

    #[serde(rename = "ElementType")]
    pub element: CharacterProp,

    #[serde(rename = "HitType")]
    pub attack_type: CharacterProp,

    #[serde(rename = "Camp")]
    pub faction: CharacterProp,

    #[serde(rename = "Gender")]
    pub gender: Gender,

    /// Not every agent has a profile (e.g. unreleased ones)
    #[serde(rename = "PartnerInfo", default, deserialize_with = "empty_as_none")]
    pub info: Option<CharacterInfo>,

    /// Base stat -> value, auxiliary keys are skipped
    #[serde(rename = "Stats", deserialize_with = "numeric_map")]
    pub stats: HashMap<String, f64>,

    #[serde(rename = "Talent", deserialize_with = "map_values")]
    pub mindscape_cinemas: Vec<MindscapeCinema>,

    #[serde(rename = "Level", deserialize_with = "map_values")]
    pub ascension: Vec<CharacterAscension>,

    #[serde(rename = "ExtraLevel", deserialize_with = "map_values")]
    pub extra_ascension: Vec<CharacterExtraAscension>,

    #[serde(rename = "Skill")]
    pub skills: IndexMap<ZzzSkillType, CharacterSkill>,

    #[serde(rename = "Passive")]
    pub passive: CoreSkill
}

impl CharacterDetail {
    #[inline]
    pub fn icon(&self) -> String {
        self.image.replace("Role", "RoleSelect")
    }

    /// Mindscape cinema art of the given phase (1-3)
    #[inline]
    pub fn mindscape_art(&self, phase: u8) -> String {
        mindscape_art(self.id, phase)
    }
}
