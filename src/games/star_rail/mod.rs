pub mod consts;
pub mod api;

pub mod prelude {
    pub use super::consts::*;
    pub use super::api::StarRailClient;
    pub use super::api::schema::Names as StarRailNames;
    pub use super::api::schema::new::New as StarRailNew;
}
