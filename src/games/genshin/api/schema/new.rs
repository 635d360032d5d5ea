use serde::{Deserialize, Deserializer};

/// IDs of the items added in the current beta version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct New {
    /// Traveler variants have string IDs like `10000005-anemo`
    #[serde(rename = "character", deserialize_with = "character_ids")]
    pub character_ids: Vec<String>,

    #[serde(rename = "weapon")]
    pub weapon_ids: Vec<u32>,

    #[serde(rename = "artifact")]
    pub artifact_set_ids: Vec<u32>,

    #[serde(rename = "monster")]
    pub monster_ids: Vec<u32>,

    #[serde(rename = "item")]
    pub item_ids: Vec<u32>,

    pub version: String
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CharacterId {
    Number(u64),
    String(String)
}

fn character_ids<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Vec::<CharacterId>::deserialize(deserializer)?
        .into_iter()
        .map(|id| match id {
            CharacterId::Number(id) => id.to_string(),
            CharacterId::String(id) => id
        })
        .collect())
}
