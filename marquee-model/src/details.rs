use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::display::{
    format_genres, format_ratings, format_runtime, release_year,
};
use crate::error::ModelError;
use crate::ids::MovieId;
use crate::image::{
    BackdropSize, ImageCategory, ImageSize, ImageUrl, PosterSize, ProfileSize,
    resolve, resolve_for,
};

pub const TMDB_MOVIE_PAGE_BASE: &str = "https://www.themoviedb.org/movie";
pub const IMDB_TITLE_PAGE_BASE: &str = "https://www.imdb.com/title";

/// Display-ready movie details.
///
/// Built from a [`crate::wire::RawMovieRecord`] by [`crate::mapper`]. Fields
/// keep the raw values; everything shown to a user is derived on demand by the
/// accessor methods, which are thin calls into [`crate::image`] and
/// [`crate::display`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub homepage: Option<String>,
    pub status: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<i64>,
    pub vote_average: Option<f32>,
    pub vote_count: Option<u32>,
    pub genres: Vec<Genre>,
    pub external_ids: ExternalIds,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub collection: Option<CollectionRef>,
    pub production_countries: Vec<ProductionCountry>,
}

/// Image slots carried by a [`Movie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovieImage {
    Poster,
    Backdrop,
}

impl MovieImage {
    pub const fn category(&self) -> ImageCategory {
        match self {
            MovieImage::Poster => ImageCategory::Poster,
            MovieImage::Backdrop => ImageCategory::Backdrop,
        }
    }
}

impl Movie {
    pub fn poster_url(&self, size: PosterSize) -> Option<ImageUrl> {
        resolve(self.poster_path.as_deref(), size)
    }

    pub fn backdrop_url(&self, size: BackdropSize) -> Option<ImageUrl> {
        resolve(self.backdrop_path.as_deref(), size)
    }

    /// Resolve an image slot chosen at runtime.
    ///
    /// A size token from another family is rejected rather than turned into a
    /// URL the CDN would 404 on.
    pub fn image_url(
        &self,
        image: MovieImage,
        size: ImageSize,
    ) -> Result<Option<ImageUrl>, ModelError> {
        let path = match image {
            MovieImage::Poster => self.poster_path.as_deref(),
            MovieImage::Backdrop => self.backdrop_path.as_deref(),
        };
        resolve_for(image.category(), path, size)
    }

    pub fn runtime_display(&self) -> Option<String> {
        self.runtime.and_then(format_runtime)
    }

    pub fn release_year(&self) -> Option<i32> {
        release_year(self.release_date)
    }

    pub fn ratings_display(&self) -> String {
        format_ratings(
            self.vote_average.unwrap_or_default(),
            self.vote_count.unwrap_or_default(),
        )
    }

    pub fn genres_summary(&self) -> Option<String> {
        format_genres(&self.genres)
    }

    pub fn tmdb_url(&self) -> String {
        format!("{TMDB_MOVIE_PAGE_BASE}/{}", self.id)
    }

    pub fn imdb_url(&self) -> Option<String> {
        self.external_ids
            .imdb_id
            .as_ref()
            .map(|imdb| format!("{IMDB_TITLE_PAGE_BASE}/{imdb}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Identifiers of the same title in other databases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIds {
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRef {
    pub id: u64,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

impl CollectionRef {
    pub fn poster_url(&self, size: PosterSize) -> Option<ImageUrl> {
        resolve(self.poster_path.as_deref(), size)
    }

    pub fn backdrop_url(&self, size: BackdropSize) -> Option<ImageUrl> {
        resolve(self.backdrop_path.as_deref(), size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: Option<String>,
}

/// Billed cast of one movie, in billing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    pub movie_id: MovieId,
    pub cast: Vec<CastMember>,
}

impl Credits {
    pub fn is_empty(&self) -> bool {
        self.cast.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
    pub order: Option<u32>,
}

impl CastMember {
    pub fn profile_url(&self, size: ProfileSize) -> Option<ImageUrl> {
        resolve(self.profile_path.as_deref(), size)
    }
}
