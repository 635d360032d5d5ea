use crate::consts::{Game, Language};
use crate::error::HakushinError;
use crate::network::api::BaseClient;
use crate::network::builder::ClientBuilder;

#[cfg(feature = "genshin")]
use crate::games::genshin::api::GenshinClient;

#[cfg(feature = "star-rail")]
use crate::games::star_rail::api::StarRailClient;

#[cfg(feature = "zzz")]
use crate::games::zzz::api::ZzzClient;

/// Entry point of the library
pub struct HakushinApi;

impl HakushinApi {
    /// Start session for the game with default options
    ///
    /// ```no_run
    /// use hakushin::prelude::*;
    ///
    /// # async fn run() -> Result<(), HakushinError> {
    /// if let AnyClient::Genshin(client) = HakushinApi::new(Game::Genshin, Language::English)? {
    ///     let new = client.fetch_new().await?;
    ///
    ///     println!("Version {}", new.version);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn new(game: Game, lang: Language) -> Result<AnyClient, HakushinError> {
        Self::builder().language(lang).build(game)
    }

    #[inline]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }
}

/// Client of any supported game
#[derive(Debug, Clone)]
pub enum AnyClient {
    #[cfg(feature = "genshin")]
    Genshin(GenshinClient),

    #[cfg(feature = "star-rail")]
    StarRail(StarRailClient),

    #[cfg(feature = "zzz")]
    Zzz(ZzzClient)
}

impl AnyClient {
    pub(crate) fn from_base(base: BaseClient) -> Result<Self, HakushinError> {
        match base.game() {
            #[cfg(feature = "genshin")]
            Game::Genshin => Ok(Self::Genshin(GenshinClient::from_base(base))),

            #[cfg(feature = "star-rail")]
            Game::StarRail => Ok(Self::StarRail(StarRailClient::from_base(base))),

            #[cfg(feature = "zzz")]
            Game::Zzz => Ok(Self::Zzz(ZzzClient::from_base(base))),

            #[allow(unreachable_patterns)]
            game => Err(HakushinError::UnsupportedGame(game))
        }
    }

    pub fn base(&self) -> &BaseClient {
        match self {
            #[cfg(feature = "genshin")]
            Self::Genshin(client) => client.base(),

            #[cfg(feature = "star-rail")]
            Self::StarRail(client) => client.base(),

            #[cfg(feature = "zzz")]
            Self::Zzz(client) => client.base()
        }
    }

    #[inline]
    pub fn game(&self) -> Game {
        self.base().game()
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.base().language()
    }
}
