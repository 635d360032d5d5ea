pub mod api;
pub mod builder;
pub mod cache;

pub mod prelude {
    pub use super::api::{BaseClient, Route};
    pub use super::builder::ClientBuilder;
    pub use super::cache::{ResponseCache, CacheEntry};
}
