use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use crate::error::HakushinError;
use crate::network::api::{BaseClient, Route};
use crate::schema::parse_id;
use crate::text::normalize_text;
use crate::games::zzz::consts::PLAYER_CHARACTER_IDS;

pub mod schema;

use schema::new::New;
use schema::character::{Character, CharacterDetail};
use schema::weapon::{Weapon, WeaponDetail};
use schema::bangboo::{Bangboo, BangbooDetail};
use schema::disc::{DriveDisc, DriveDiscDetail};

/// Zenless Zone Zero API client
#[derive(Debug, Clone)]
pub struct ZzzClient {
    base: BaseClient
}

impl ZzzClient {
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

    /// Playable agents, without the player avatars
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_characters(&self) -> Result<Vec<Character>, HakushinError> {
        tracing::trace!("Fetching API");

        let lang = self.base.language();
        let url = self.base.url(Route::Data, "character");

        // Player avatar entries are incomplete and must not be decoded
        self.request_list::<serde_json::Value>("character").await?
            .into_iter()
            .filter(|(id, _)| !PLAYER_CHARACTER_IDS.contains(id))
            .map(|(id, entry)| {
                let mut character = serde_json::from_value::<Character>(entry)
                    .map_err(|err| HakushinError::Decode {
                        url: url.clone(),
                        message: format!("character {id}: {err}")
                    })?;

                character.id = id;
                character.name = normalize_text(character.names.get(lang));

                Ok(character)
            })
            .collect()
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_character_detail(&self, id: u32) -> Result<CharacterDetail, HakushinError> {
        tracing::trace!("Fetching API");

        self.base.request(Route::Localized, &format!("character/{id}")).await
    }

    /// W-Engines
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_weapons(&self) -> Result<Vec<Weapon>, HakushinError> {
        tracing::trace!("Fetching API");

        let lang = self.base.language();

        Ok(self.request_list::<Weapon>("weapon").await?
            .into_iter()
            .map(|(id, mut weapon)| {
                weapon.id = id;
                weapon.name = normalize_text(weapon.names.get(lang));

                weapon
            })
            .collect())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_weapon_detail(&self, id: u32) -> Result<WeaponDetail, HakushinError> {
        tracing::trace!("Fetching API");

        self.base.request(Route::Localized, &format!("weapon/{id}")).await
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_bangboos(&self) -> Result<Vec<Bangboo>, HakushinError> {
        tracing::trace!("Fetching API");

        let lang = self.base.language();

        Ok(self.request_list::<Bangboo>("bangboo").await?
            .into_iter()
            .map(|(id, mut bangboo)| {
                bangboo.id = id;
                bangboo.name = normalize_text(bangboo.names.get(lang));

                bangboo
            })
            .collect())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_bangboo_detail(&self, id: u32) -> Result<BangbooDetail, HakushinError> {
        tracing::trace!("Fetching API");

        self.base.request(Route::Localized, &format!("bangboo/{id}")).await
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_drive_discs(&self) -> Result<Vec<DriveDisc>, HakushinError> {
        tracing::trace!("Fetching API");

        let lang = self.base.language();

        Ok(self.request_list::<DriveDisc>("equipment").await?
            .into_iter()
            .map(|(id, mut disc)| {
                let info = disc.info(lang).clone();

                disc.id = id;
                disc.name = info.name;
                disc.two_piece_effect = info.two_piece_effect;
                disc.four_piece_effect = info.four_piece_effect;

                disc
            })
            .collect())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_drive_disc_detail(&self, id: u32) -> Result<DriveDiscDetail, HakushinError> {
        tracing::trace!("Fetching API");

        self.base.request(Route::Localized, &format!("equipment/{id}")).await
    }
}
