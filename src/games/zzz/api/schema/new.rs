use serde::Deserialize;

/// IDs of the items added in the current beta version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct New {
    #[serde(rename = "character")]
    pub character_ids: Vec<u32>,

    #[serde(rename = "bangboo")]
    pub bangboo_ids: Vec<u32>,

    #[serde(rename = "weapon")]
    pub weapon_ids: Vec<u32>,

    /// Drive disc sets
    #[serde(rename = "equipment")]
    pub equipment_ids: Vec<u32>,

    #[serde(rename = "item")]
    pub item_ids: Vec<u32>,

    #[serde(rename = "version")]
    pub current_version: String,

    #[serde(rename = "previous", default)]
    pub previous_versions: Vec<String>
}
