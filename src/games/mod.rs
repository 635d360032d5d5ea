#[cfg(feature = "genshin")]
pub mod genshin;

#[cfg(feature = "star-rail")]
pub mod star_rail;

#[cfg(feature = "zzz")]
pub mod zzz;
