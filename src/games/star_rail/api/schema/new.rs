use serde::Deserialize;

/// IDs of the items added in the current beta version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct New {
    #[serde(rename = "character")]
    pub character_ids: Vec<u32>,

    #[serde(rename = "lightcone")]
    pub light_cone_ids: Vec<u32>,

    #[serde(rename = "relicset")]
    pub relic_set_ids: Vec<u32>,

    #[serde(rename = "monster")]
    pub monster_ids: Vec<u32>,

    #[serde(rename = "item")]
    pub item_ids: Vec<u32>,

    pub version: String
}
