//! Deserialization helpers shared by the games schemas

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde::de::DeserializeOwned;

use crate::consts::API_BASE_URI;
use crate::error::HakushinError;
use crate::text::normalize_text;

/// Deserialize a name / description / story string and normalize its markup
pub fn normalized<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(normalize_text(&String::deserialize(deserializer)?))
}

/// Same as `normalized`, but `null` and missing values become an empty string
pub fn normalized_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|text| normalize_text(&text))
        .unwrap_or_default())
}

pub fn normalized_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|text| normalize_text(&text)))
}

/// Treat `null` as the default value of the type
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treat `null`, `{}`, `[]` and `""` as a missing value
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned
{
    let value = serde_json::Value::deserialize(deserializer)?;

    let empty = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(object) => object.is_empty(),
        serde_json::Value::Array(array) => array.is_empty(),
        serde_json::Value::String(string) => string.is_empty(),

        _ => false
    };

    if empty {
        return Ok(None);
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

/// Values of a map keyed by stringified indexes, in upstream order
pub fn map_values<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>
{
    Ok(indexmap::IndexMap::<String, T>::deserialize(deserializer)?
        .into_values()
        .collect())
}

/// Numeric entries of a map, skipping auxiliary keys like `Tags`
pub fn numeric_map<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HashMap<String, f64>, D::Error> {
    Ok(HashMap::<String, serde_json::Value>::deserialize(deserializer)?
        .into_iter()
        .filter_map(|(key, value)| value.as_f64().map(|value| (key, value)))
        .collect())
}

/// `{"1": {"100": 2}}` -> `{"1": [Material { id: 100, amount: 2 }]}`
pub fn material_groups<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HashMap<String, Vec<Material>>, D::Error> {
    Ok(HashMap::<String, indexmap::IndexMap<String, u32>>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, group)| (key, Material::from_map(group)))
        .collect())
}

/// `{"100": 2, "101": 5}` -> `[Material { id: 100, amount: 2 }, ...]`
pub fn materials<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Material>, D::Error> {
    Ok(Material::from_map(null_as_default(deserializer)?))
}

/// Generic `{item id: amount}` material entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Material {
    pub id: u32,
    pub amount: u32
}

impl Material {
    fn from_map(map: indexmap::IndexMap<String, u32>) -> Vec<Self> {
        map.into_iter()
            .filter_map(|(id, amount)| Some(Self {
                id: id.parse().ok()?,
                amount
            }))
            .collect()
    }
}

/// Strip directories and extension from an icon path
///
/// `SpriteOutput/ItemFigures/71000.png` -> `71000`
#[inline]
pub fn icon_stem(path: &str) -> &str {
    let file = path.rsplit('/').next().unwrap_or(path);

    file.split('.').next().unwrap_or(file)
}

/// `{API_BASE_URI}/{game}/UI/{path}`
#[inline]
pub fn ui_uri(game: &str, path: impl AsRef<str>) -> String {
    format!("{API_BASE_URI}/{game}/UI/{}", path.as_ref())
}

/// Numeric key of a list endpoint requested from the URL
pub(crate) fn parse_id(url: &str, id: &str) -> Result<u32, HakushinError> {
    id.parse().map_err(|err| HakushinError::Decode {
        url: url.to_string(),
        message: format!("invalid entry id `{id}`: {err}")
    })
}
