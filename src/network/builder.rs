use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use crate::consts::*;
use crate::error::HakushinError;

use super::api::BaseClient;
use super::cache::ResponseCache;

/// Options of the API session
///
/// ```no_run
/// use hakushin::prelude::*;
///
/// # async fn run() -> Result<(), HakushinError> {
/// let client = HakushinApi::builder()
///     .language(Language::Japanese)
///     .cache_ttl(std::time::Duration::from_secs(600))
///     .star_rail()?;
///
/// let characters = client.fetch_characters().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    lang: Language,
    cache_path: PathBuf,
    cache_ttl: Duration,
    headers: Vec<(String, String)>,
    debug: bool,
    http: Option<Client>,
    base_uri: String,
    gitlab_uri: String,
    timeout: Option<Duration>
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            lang: Language::default(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            cache_ttl: DEFAULT_CACHE_TTL,
            headers: Vec::new(),
            debug: false,
            http: None,
            base_uri: API_BASE_URI.to_string(),
            gitlab_uri: GITLAB_DATA_URI.to_string(),
            timeout: None
        }
    }
}

impl ClientBuilder {
    #[inline]
    pub fn language(self, lang: Language) -> Self {
        Self { lang, ..self }
    }

    /// Directory of the responses cache
    #[inline]
    pub fn cache_path(self, path: impl Into<PathBuf>) -> Self {
        Self { cache_path: path.into(), ..self }
    }

    /// Time-to-live of cached responses
    #[inline]
    pub fn cache_ttl(self, ttl: Duration) -> Self {
        Self { cache_ttl: ttl, ..self }
    }

    /// Add header to every request. Overrides the default `User-Agent` if given
    pub fn header(mut self, name: impl ToString, value: impl ToString) -> Self {
        self.headers.push((name.to_string(), value.to_string()));

        self
    }

    /// Log requested URLs on the debug level instead of the trace one
    #[inline]
    pub fn debug(self, debug: bool) -> Self {
        Self { debug, ..self }
    }

    /// Use existing reqwest client. Timeout option is ignored then
    #[inline]
    pub fn http_client(self, client: Client) -> Self {
        Self { http: Some(client), ..self }
    }

    #[inline]
    pub fn base_uri(self, uri: impl ToString) -> Self {
        Self { base_uri: uri.to_string(), ..self }
    }

    #[inline]
    pub fn gitlab_uri(self, uri: impl ToString) -> Self {
        Self { gitlab_uri: uri.to_string(), ..self }
    }

    /// Requests timeout. `REQUESTS_TIMEOUT` is used by default
    #[inline]
    pub fn timeout(self, timeout: Duration) -> Self {
        Self { timeout: Some(timeout), ..self }
    }

    fn headers(&self) -> Result<HeaderMap, HakushinError> {
        let mut headers = HeaderMap::new();

        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| HakushinError::InvalidHeader(format!("{name}: {err}")))?;

            let value = HeaderValue::from_str(value)
                .map_err(|err| HakushinError::InvalidHeader(format!("{name}: {err}")))?;

            headers.insert(name, value);
        }

        Ok(headers)
    }

    /// Start session for the given game
    pub fn base(&self, game: Game) -> Result<BaseClient, HakushinError> {
        let http = match &self.http {
            Some(client) => client.clone(),

            None => Client::builder()
                .timeout(self.timeout.unwrap_or(*REQUESTS_TIMEOUT))
                .build()?
        };

        tracing::trace!(?game, lang = ?self.lang, cache_path = ?self.cache_path, "Starting session");

        Ok(BaseClient::new(
            game,
            self.lang,
            http,
            self.headers()?,
            ResponseCache::new(&self.cache_path, self.cache_ttl),
            self.base_uri.clone(),
            self.gitlab_uri.clone(),
            self.debug
        ))
    }

    /// Start session and wrap it into the client of the given game
    pub fn build(&self, game: Game) -> Result<crate::client::AnyClient, HakushinError> {
        crate::client::AnyClient::from_base(self.base(game)?)
    }

    #[cfg(feature = "genshin")]
    #[inline]
    pub fn genshin(&self) -> Result<crate::games::genshin::api::GenshinClient, HakushinError> {
        Ok(crate::games::genshin::api::GenshinClient::from_base(self.base(Game::Genshin)?))
    }

    #[cfg(feature = "star-rail")]
    #[inline]
    pub fn star_rail(&self) -> Result<crate::games::star_rail::api::StarRailClient, HakushinError> {
        Ok(crate::games::star_rail::api::StarRailClient::from_base(self.base(Game::StarRail)?))
    }

    #[cfg(feature = "zzz")]
    #[inline]
    pub fn zzz(&self) -> Result<crate::games::zzz::api::ZzzClient, HakushinError> {
        Ok(crate::games::zzz::api::ZzzClient::from_base(self.base(Game::Zzz)?))
    }
}
