use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use crate::error::HakushinError;
use crate::network::api::{BaseClient, Route};
use crate::schema::parse_id;
use crate::text::{normalize_text, replace_placeholders};
use crate::games::star_rail::consts::trailblazer_name;

pub mod schema;

use schema::new::New;
use schema::character::{Character, CharacterDetail};
use schema::light_cone::{LightCone, LightConeDetail};
use schema::relic::{RelicSet, RelicSetDetail, RelicSetEffect};
use schema::monster::{Monster, MonsterDetail};
use schema::enemy_groups::{EliteGroup, HardLevelGroup};

/// Honkai: Star Rail API client
#[derive(Debug, Clone)]
pub struct StarRailClient {
    base: BaseClient
}

impl StarRailClient {
    #[inline]
    pub(crate) fn from_base(base: BaseClient) -> Self {
        Self { base }
    }

    #[inline]
    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    /// Same client which doesn't use the responses cache
    #[inline]
    pub fn bypass_cache(&self) -> Self {
        Self::from_base(self.base.bypass_cache())
    }

    /// Fetch list endpoint keyed by numeric IDs
    async fn request_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<(u32, T)>, HakushinError> {
        let url = self.base.url(Route::Data, endpoint);

        self.base.request::<IndexMap<String, T>>(Route::Data, endpoint).await?
            .into_iter()
            .map(|(id, entry)| Ok((parse_id(&url, &id)?, entry)))
            .collect()
    }

    /// IDs of the items added in the beta version
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_new(&self) -> Result<New, HakushinError> {
        tracing::trace!("Fetching API");

        self.base.request(Route::Static, "new").await
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_characters(&self) -> Result<Vec<Character>, HakushinError> {
        tracing::trace!("Fetching API");

        let lang = self.base.language();

        Ok(self.request_list::<Character>("character").await?
            .into_iter()
            .map(|(id, mut character)| {
                character.id = id;
                character.name = normalize_text(character.names.get(lang));

                if character.name == "{NICKNAME}" {
                    character.name = trailblazer_name(lang).to_string();
                }

                character
            })
            .collect())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_character_detail(&self, id: u32) -> Result<CharacterDetail, HakushinError> {
        tracing::trace!("Fetching API");

        self.base.request(Route::Localized, &format!("character/{id}")).await
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_light_cones(&self) -> Result<Vec<LightCone>, HakushinError> {
        tracing::trace!("Fetching API");

        let lang = self.base.language();

        Ok(self.request_list::<LightCone>("lightcone").await?
            .into_iter()
            .map(|(id, mut light_cone)| {
                light_cone.id = id;
                light_cone.name = normalize_text(light_cone.names.get(lang));

                light_cone
            })
            .collect())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_light_cone_detail(&self, id: u32) -> Result<LightConeDetail, HakushinError> {
        tracing::trace!("Fetching API");

        self.base.request(Route::Localized, &format!("lightcone/{id}")).await
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_relic_sets(&self) -> Result<Vec<RelicSet>, HakushinError> {
        tracing::trace!("Fetching API");

        let lang = self.base.language();

        let localize = |effect: &mut RelicSetEffect| {
            effect.description = replace_placeholders(
                &normalize_text(effect.descriptions.get(lang)),
                &effect.parameters
            );
        };

        Ok(self.request_list::<RelicSet>("relicset").await?
            .into_iter()
            .map(|(id, mut set)| {
                set.id = id;
                set.name = normalize_text(set.names.get(lang));

                localize(&mut set.set_effect.two_piece);

                if let Some(four_piece) = &mut set.set_effect.four_piece {
                    localize(four_piece);
                }

                set
            })
            .collect())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_relic_set_detail(&self, id: u32) -> Result<RelicSetDetail, HakushinError> {
        tracing::trace!("Fetching API");

        self.base.request(Route::Localized, &format!("relicset/{id}")).await
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_monsters(&self) -> Result<Vec<Monster>, HakushinError> {
        tracing::trace!("Fetching API");

        let lang = self.base.language();

        Ok(self.request_list::<Monster>("monster").await?
            .into_iter()
            .map(|(id, mut monster)| {
                monster.id = id;
                monster.name = normalize_text(monster.names.get(lang));

                monster
            })
            .collect())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_monster_detail(&self, id: u32) -> Result<MonsterDetail, HakushinError> {
        tracing::trace!("Fetching API");

        self.base.request(Route::Localized, &format!("monster/{id}")).await
    }

    /// Elite enemies stat multipliers, keyed by the group ID
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_elite_groups(&self) -> Result<IndexMap<u32, EliteGroup>, HakushinError> {
        tracing::trace!("Fetching ExcelOutput table");

        let url = self.base.gitlab_url("EliteGroup");

        let rows = self.base.download_json::<Vec<serde_json::Value>>(&url).await?;

        rows.into_iter()
            .filter(|row| row.get("EliteGroup").is_some())
            .map(|row| {
                let group = decode_row::<EliteGroup>(&url, row)?;

                Ok((group.id, group))
            })
            .collect()
    }

    /// Boss enemies stat multipliers, keyed by the group ID and the enemy level
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_hard_level_groups(&self) -> Result<IndexMap<(u32, u32), HardLevelGroup>, HakushinError> {
        tracing::trace!("Fetching ExcelOutput table");

        let url = self.base.gitlab_url("HardLevelGroup");

        let rows = self.base.download_json::<Vec<serde_json::Value>>(&url).await?;

        rows.into_iter()
            .filter(|row| row.get("HardLevelGroup").is_some() && row.get("Level").is_some())
            .map(|row| {
                let group = decode_row::<HardLevelGroup>(&url, row)?;

                Ok(((group.id, group.level), group))
            })
            .collect()
    }
}

fn decode_row<T: DeserializeOwned>(url: &str, row: serde_json::Value) -> Result<T, HakushinError> {
    serde_json::from_value(row).map_err(|err| HakushinError::Decode {
        url: url.to_string(),
        message: err.to_string()
    })
}
