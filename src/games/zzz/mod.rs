pub mod consts;
pub mod api;

pub mod prelude {
    pub use super::consts::*;
    pub use super::api::ZzzClient;
    pub use super::api::schema::Names as ZzzNames;
    pub use super::api::schema::new::New as ZzzNew;
}
