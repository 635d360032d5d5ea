pub mod consts;
pub mod api;

pub mod prelude {
    pub use super::consts::*;
    pub use super::api::GenshinClient;
    pub use super::api::schema::Names as GenshinNames;
    pub use super::api::schema::new::New as GenshinNew;
}
