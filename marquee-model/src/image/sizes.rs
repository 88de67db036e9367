use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Image families served by the TMDB CDN. Each family accepts its own set of
/// size tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageCategory {
    Poster,
    Backdrop,
    Profile,
}

impl Display for ImageCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageCategory::Poster => write!(f, "poster"),
            ImageCategory::Backdrop => write!(f, "backdrop"),
            ImageCategory::Profile => write!(f, "profile"),
        }
    }
}

/// A size token from any category.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    Poster(PosterSize),
    Backdrop(BackdropSize),
    Profile(ProfileSize),
}

impl ImageSize {
    pub const fn category(&self) -> ImageCategory {
        match self {
            ImageSize::Poster(_) => ImageCategory::Poster,
            ImageSize::Backdrop(_) => ImageCategory::Backdrop,
            ImageSize::Profile(_) => ImageCategory::Profile,
        }
    }

    /// CDN path segment, e.g. `w500`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Poster(s) => s.as_str(),
            ImageSize::Backdrop(s) => s.as_str(),
            ImageSize::Profile(s) => s.as_str(),
        }
    }

    /// Parse a token that must belong to `category`.
    pub fn parse(category: ImageCategory, token: &str) -> Result<Self, ModelError> {
        match category {
            ImageCategory::Poster => token.parse().map(ImageSize::Poster),
            ImageCategory::Backdrop => token.parse().map(ImageSize::Backdrop),
            ImageCategory::Profile => token.parse().map(ImageSize::Profile),
        }
    }
}

impl From<PosterSize> for ImageSize {
    fn from(size: PosterSize) -> Self {
        ImageSize::Poster(size)
    }
}

impl From<BackdropSize> for ImageSize {
    fn from(size: BackdropSize) -> Self {
        ImageSize::Backdrop(size)
    }
}

impl From<ProfileSize> for ImageSize {
    fn from(size: ProfileSize) -> Self {
        ImageSize::Profile(size)
    }
}

/// Poster widths published by the CDN (2:3 aspect ratio).
#[derive(
    Debug, Clone, Copy, PartialEq, Hash, Eq, Default, Serialize, Deserialize,
)]
pub enum PosterSize {
    W92,
    W154,
    W185,
    W342,
    /// Detail screen poster
    #[default]
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub const ALL: [PosterSize; 7] = [
        Self::W92,
        Self::W154,
        Self::W185,
        Self::W342,
        Self::W500,
        Self::W780,
        Self::Original,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W92 => "w92",
            Self::W154 => "w154",
            Self::W185 => "w185",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::W780 => "w780",
            Self::Original => "original",
        }
    }
}

impl FromStr for PosterSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ModelError::UnknownSizeToken {
                category: ImageCategory::Poster,
                token: s.to_string(),
            })
    }
}

/// 16:9 backdrop widths published by the CDN.
#[derive(
    Debug, Clone, Copy, PartialEq, Hash, Eq, Default, Serialize, Deserialize,
)]
pub enum BackdropSize {
    W300,
    W780,
    #[default]
    W1280,
    Original,
}

impl BackdropSize {
    pub const ALL: [BackdropSize; 4] =
        [Self::W300, Self::W780, Self::W1280, Self::Original];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W300 => "w300",
            Self::W780 => "w780",
            Self::W1280 => "w1280",
            Self::Original => "original",
        }
    }
}

impl FromStr for BackdropSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ModelError::UnknownSizeToken {
                category: ImageCategory::Backdrop,
                token: s.to_string(),
            })
    }
}

/// Person profile image sizes (2:3 aspect ratio). `H632` is height-bound.
#[derive(
    Debug, Clone, Copy, PartialEq, Hash, Eq, Default, Serialize, Deserialize,
)]
pub enum ProfileSize {
    W45,
    #[default]
    W185,
    H632,
    Original,
}

impl ProfileSize {
    pub const ALL: [ProfileSize; 4] =
        [Self::W45, Self::W185, Self::H632, Self::Original];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W45 => "w45",
            Self::W185 => "w185",
            Self::H632 => "h632",
            Self::Original => "original",
        }
    }
}

impl FromStr for ProfileSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ModelError::UnknownSizeToken {
                category: ImageCategory::Profile,
                token: s.to_string(),
            })
    }
}
