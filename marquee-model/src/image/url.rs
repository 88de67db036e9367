use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::sizes::{ImageCategory, ImageSize};
use crate::error::ModelError;

/// Root of the TMDB image CDN.
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Fully resolved CDN URL for one image variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ImageUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build `<base>/<token>/<path>` for a relative CDN path.
///
/// Returns `None` when the path is absent or blank so callers render their
/// placeholder instead of requesting a broken image. The path is used exactly
/// as the API supplied it.
pub fn resolve(path: Option<&str>, size: impl Into<ImageSize>) -> Option<ImageUrl> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;
    let size = size.into();
    let path = path.strip_prefix('/').unwrap_or(path);

    Some(ImageUrl(format!(
        "{TMDB_IMAGE_BASE}/{}/{path}",
        size.as_str()
    )))
}

/// Like [`resolve`], but rejects a size token from the wrong family.
pub fn resolve_for(
    category: ImageCategory,
    path: Option<&str>,
    size: ImageSize,
) -> Result<Option<ImageUrl>, ModelError> {
    if size.category() != category {
        return Err(ModelError::SizeCategoryMismatch {
            expected: category,
            actual: size.category(),
        });
    }

    Ok(resolve(path, size))
}
