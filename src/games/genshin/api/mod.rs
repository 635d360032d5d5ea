use indexmap::IndexMap;

use crate::error::HakushinError;
use crate::network::api::{BaseClient, Route};
use crate::schema::parse_id;
use crate::text::normalize_text;

pub mod schema;

use schema::new::New;
use schema::character::{Character, CharacterDetail};
use schema::weapon::{Weapon, WeaponDetail};
use schema::artifact::{ArtifactSet, ArtifactSetDetail, ArtifactSetEffect};

/// Genshin Impact API client
#[derive(Debug, Clone)]
pub struct GenshinClient {
    base: BaseClient
}

impl GenshinClient {
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

        let characters = self.base.request::<IndexMap<String, Character>>(Route::Data, "character").await?;

        Ok(characters.into_iter()
            .map(|(id, mut character)| {
                character.name = normalize_text(character.names.get(lang));
                character.id = id;

                character
            })
            .collect())
    }

    /// Character ID is a string since the Traveler's IDs look like `10000005-anemo`
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_character_detail(&self, id: &str) -> Result<CharacterDetail, HakushinError> {
        tracing::trace!("Fetching API");

        self.base.request(Route::Localized, &format!("character/{id}")).await
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_weapons(&self) -> Result<Vec<Weapon>, HakushinError> {
        tracing::trace!("Fetching API");

        let lang = self.base.language();
        let url = self.base.url(Route::Data, "weapon");

        let weapons = self.base.request::<IndexMap<String, Weapon>>(Route::Data, "weapon").await?;

        weapons.into_iter()
            .map(|(id, mut weapon)| {
                weapon.id = parse_id(&url, &id)?;
                weapon.name = normalize_text(weapon.names.get(lang));

                Ok(weapon)
            })
            .collect()
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_weapon_detail(&self, id: u32) -> Result<WeaponDetail, HakushinError> {
        tracing::trace!("Fetching API");

        self.base.request(Route::Localized, &format!("weapon/{id}")).await
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_artifact_sets(&self) -> Result<Vec<ArtifactSet>, HakushinError> {
        tracing::trace!("Fetching API");

        let lang = self.base.language();

        let localize = |effect: &mut ArtifactSetEffect| {
            effect.name = normalize_text(effect.names.get(lang));
            effect.description = normalize_text(effect.descriptions.get(lang));
        };

        let url = self.base.url(Route::Data, "artifact");

        let sets = self.base.request::<IndexMap<String, ArtifactSet>>(Route::Data, "artifact").await?;

        sets.into_iter()
            .map(|(id, mut set)| {
                set.id = parse_id(&url, &id)?;

                localize(&mut set.set_effect.two_piece);

                if let Some(four_piece) = &mut set.set_effect.four_piece {
                    localize(four_piece);
                }

                set.name = set.set_effect.two_piece.name.clone();

                Ok(set)
            })
            .collect()
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn fetch_artifact_set_detail(&self, id: u32) -> Result<ArtifactSetDetail, HakushinError> {
        tracing::trace!("Fetching API");

        self.base.request(Route::Localized, &format!("artifact/{id}")).await
    }
}
