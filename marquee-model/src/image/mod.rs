pub mod sizes;
pub mod url;

pub use sizes::*;
pub use self::url::{ImageUrl, TMDB_IMAGE_BASE, resolve, resolve_for};
