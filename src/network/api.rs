use std::sync::Arc;

use reqwest::Client;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::consts::{Game, Language};
use crate::error::HakushinError;

use super::cache::ResponseCache;

/// Location of an endpoint in the API tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `{base}/{game}/{endpoint}.json`
    Static,

    /// `{base}/{game}/data/{endpoint}.json`
    Data,

    /// `{base}/{game}/data/{lang}/{endpoint}.json`
    Localized
}

#[derive(Debug)]
struct Session {
    http: Client,
    headers: HeaderMap,
    cache: ResponseCache,
    base_uri: String,
    gitlab_uri: String,
    debug: bool
}

/// HTTP session shared by all the game clients
///
/// Cloning is cheap: clones share the same connection pool and cache.
/// The session is closed when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct BaseClient {
    session: Arc<Session>,
    game: Game,
    lang: Language,
    use_cache: bool
}

impl BaseClient {
    pub(crate) fn new(
        game: Game,
        lang: Language,
        http: Client,
        headers: HeaderMap,
        cache: ResponseCache,
        base_uri: String,
        gitlab_uri: String,
        debug: bool
    ) -> Self {
        Self {
            session: Arc::new(Session {
                http,
                headers,
                cache,
                base_uri: base_uri.trim_end_matches('/').to_string(),
                gitlab_uri: gitlab_uri.trim_end_matches('/').to_string(),
                debug
            }),
            game,
            lang,
            use_cache: true
        }
    }

    #[inline]
    pub fn game(&self) -> Game {
        self.game
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.lang
    }

    #[inline]
    pub fn uses_cache(&self) -> bool {
        self.use_cache
    }

    #[inline]
    pub fn cache(&self) -> &ResponseCache {
        &self.session.cache
    }

    /// Same session which neither reads nor stores cached responses
    pub fn bypass_cache(&self) -> Self {
        Self {
            use_cache: false,
            ..self.clone()
        }
    }

    /// Same session, but responses are requested in another language
    pub fn with_language(&self, lang: Language) -> Self {
        Self {
            lang,
            ..self.clone()
        }
    }

    /// Remove all the cached responses of this session
    #[inline]
    pub async fn clear_cache(&self) -> Result<(), HakushinError> {
        self.session.cache.clear().await
    }

    /// Build URL of the endpoint
    ///
    /// `(Route::Localized, "character/1309")` -> `https://api.hakush.in/hsr/data/en/character/1309.json`
    pub fn url(&self, route: Route, endpoint: &str) -> String {
        let base = &self.session.base_uri;
        let game = self.game.to_code();

        match route {
            Route::Static => format!("{base}/{game}/{endpoint}.json"),
            Route::Data   => format!("{base}/{game}/data/{endpoint}.json"),

            Route::Localized => {
                let lang = match self.game {
                    Game::StarRail => self.lang.to_hsr_code(),
                    _ => self.lang.to_code()
                };

                format!("{base}/{game}/data/{lang}/{endpoint}.json")
            }
        }
    }

    /// URL of a raw HSR game table
    #[inline]
    pub fn gitlab_url(&self, table: &str) -> String {
        format!("{}/{table}.json", self.session.gitlab_uri)
    }

    /// Fetch endpoint and decode it into the schema
    pub async fn request<T: DeserializeOwned>(&self, route: Route, endpoint: &str) -> Result<T, HakushinError> {
        self.download_json(&self.url(route, endpoint)).await
    }

    /// Fetch absolute URL and decode it into the schema
    #[tracing::instrument(level = "trace", skip(self), fields(game = %self.game, cache = self.use_cache))]
    pub async fn download_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, HakushinError> {
        let body = self.get(url).await?;

        serde_json::from_str(&body).map_err(|err| HakushinError::Decode {
            url: url.to_string(),
            message: err.to_string()
        })
    }

    async fn get(&self, url: &str) -> Result<String, HakushinError> {
        if self.use_cache {
            if let Some(body) = self.session.cache.get(url).await {
                return Ok(body);
            }
        }

        if self.session.debug {
            tracing::debug!("Requesting {url}");
        } else {
            tracing::trace!("Requesting {url}");
        }

        let response = self.session.http.get(url)
            .headers(self.session.headers.clone())
            .send().await?;

        let status = response.status();

        if !status.is_success() {
            return Err(HakushinError::from_status(status.as_u16(), url));
        }

        let body = response.text().await?;

        if self.use_cache {
            if let Err(err) = self.session.cache.set(url, &body).await {
                tracing::warn!(url, %err, "Failed to cache response");
            }
        }

        Ok(body)
    }
}
