//! Data model definitions shared across Marquee crates.
//!
//! [`wire`] holds TMDB responses exactly as received, [`mapper`] turns them
//! into the display-ready models in [`details`], and [`image`] / [`display`]
//! derive URLs and strings from those models on demand.
#![allow(missing_docs)]

pub mod details;
pub mod display;
pub mod error;
pub mod ids;
pub mod image;
pub mod mapper;
pub mod wire;

pub use details::{
    CastMember, CollectionRef, Credits, ExternalIds, Genre, Movie, MovieImage,
    ProductionCountry,
};
pub use display::{
    NO_RATINGS_MESSAGE, format_ratings, format_release_year, format_runtime,
};
pub use error::{ModelError, Result as ModelResult};
pub use ids::MovieId;
pub use image::{
    BackdropSize, ImageCategory, ImageSize, ImageUrl, PosterSize, ProfileSize,
};
pub use mapper::{map_credits, map_movie};
pub use wire::{RawCastMember, RawCreditsRecord, RawGenre, RawMovieRecord};
