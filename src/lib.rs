pub mod consts;
pub mod error;
pub mod text;
pub mod schema;
pub mod stats;
pub mod network;
pub mod client;
pub mod games;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::consts::*;
    pub use super::error::HakushinError;
    pub use super::network::prelude::*;
    pub use super::client::{HakushinApi, AnyClient};

    #[cfg(feature = "genshin")]
    pub use super::games::genshin::api::GenshinClient;

    #[cfg(feature = "star-rail")]
    pub use super::games::star_rail::api::StarRailClient;

    #[cfg(feature = "zzz")]
    pub use super::games::zzz::api::ZzzClient;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
