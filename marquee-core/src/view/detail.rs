use marquee_model::{BackdropSize, ImageUrl, Movie, MovieId, PosterSize};
use serde::Serialize;

use super::ScreenState;
use crate::cache::{CacheEntry, ResourceDriver, Subscription};
use crate::metadata::Resource;

pub const DETAIL_POSTER_SIZE: PosterSize = PosterSize::W500;
pub const DETAIL_BACKDROP_SIZE: BackdropSize = BackdropSize::W1280;

/// Everything the movie detail screen renders, already formatted.
///
/// Optional parts are `None` when the screen should leave them out entirely:
/// no tagline, no genres, a zero runtime, no IMDb id, no images.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetailView {
    pub id: MovieId,
    /// `"Title (Year)"`, or just the title when the release date is unknown.
    pub heading: String,
    pub title: String,
    pub release_year: Option<i32>,
    pub tagline: Option<String>,
    pub genres: Option<String>,
    pub runtime: Option<String>,
    pub ratings: String,
    pub overview: Option<String>,
    pub tmdb_url: String,
    pub imdb_url: Option<String>,
    pub poster_url: Option<ImageUrl>,
    pub backdrop_url: Option<ImageUrl>,
}

impl MovieDetailView {
    pub fn from_movie(movie: &Movie) -> Self {
        let release_year = movie.release_year();
        let heading = match release_year {
            Some(year) => format!("{} ({year})", movie.title),
            None => movie.title.clone(),
        };

        Self {
            id: movie.id,
            heading,
            title: movie.title.clone(),
            release_year,
            tagline: movie.tagline.clone(),
            genres: movie.genres_summary(),
            runtime: movie.runtime_display(),
            ratings: movie.ratings_display(),
            overview: movie.overview.clone(),
            tmdb_url: movie.tmdb_url(),
            imdb_url: movie.imdb_url(),
            poster_url: movie.poster_url(DETAIL_POSTER_SIZE),
            backdrop_url: movie.backdrop_url(DETAIL_BACKDROP_SIZE),
        }
    }
}

impl From<&Movie> for MovieDetailView {
    fn from(movie: &Movie) -> Self {
        Self::from_movie(movie)
    }
}

pub fn detail_view(
    enabled: bool,
    entry: &CacheEntry<Resource>,
) -> ScreenState<MovieDetailView> {
    ScreenState::from_entry(enabled, entry, 0, |resource| {
        resource.as_movie().map(MovieDetailView::from_movie)
    })
}

pub fn detail_screen<D>(subscription: &Subscription<D>) -> ScreenState<MovieDetailView>
where
    D: ResourceDriver<Output = Resource>,
{
    detail_view(subscription.is_enabled(), &subscription.current())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use marquee_model::{ExternalIds, Genre};

    use super::*;
    use crate::cache::LoadState;

    fn movie() -> Movie {
        Movie {
            id: MovieId(603),
            title: "The Matrix".into(),
            original_title: None,
            overview: Some("A hacker learns the truth.".into()),
            tagline: Some("Welcome to the Real World.".into()),
            homepage: None,
            status: Some("Released".into()),
            release_date: NaiveDate::from_ymd_opt(1999, 3, 31),
            runtime: Some(136),
            vote_average: Some(8.2),
            vote_count: Some(24_000),
            genres: vec![
                Genre {
                    id: 28,
                    name: "Action".into(),
                },
                Genre {
                    id: 878,
                    name: "Science Fiction".into(),
                },
            ],
            external_ids: ExternalIds {
                imdb_id: Some("tt0133093".into()),
            },
            poster_path: Some("/poster.jpg".into()),
            backdrop_path: None,
            collection: None,
            production_countries: Vec::new(),
        }
    }

    #[test]
    fn full_record_renders_every_line() {
        let view = MovieDetailView::from_movie(&movie());

        assert_eq!(view.heading, "The Matrix (1999)");
        assert_eq!(view.genres.as_deref(), Some("Action, Science Fiction"));
        assert_eq!(view.runtime.as_deref(), Some("2h 16m"));
        assert_eq!(view.ratings, "8.2 / 10 (votes: 24000)");
        assert_eq!(view.tmdb_url, "https://www.themoviedb.org/movie/603");
        assert_eq!(
            view.imdb_url.as_deref(),
            Some("https://www.imdb.com/title/tt0133093")
        );
        assert_eq!(
            view.poster_url.as_ref().map(ImageUrl::as_str),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
        assert!(view.backdrop_url.is_none());
    }

    #[test]
    fn sparse_record_drops_optional_lines() {
        let sparse = Movie {
            release_date: None,
            runtime: Some(0),
            vote_average: Some(0.0),
            vote_count: Some(0),
            tagline: None,
            genres: Vec::new(),
            external_ids: ExternalIds::default(),
            poster_path: None,
            ..movie()
        };
        let view = MovieDetailView::from(&sparse);

        assert_eq!(view.heading, "The Matrix");
        assert!(view.release_year.is_none());
        assert!(view.runtime.is_none());
        assert!(view.genres.is_none());
        assert!(view.imdb_url.is_none());
        assert!(view.poster_url.is_none());
        assert_eq!(view.ratings, "No ratings yet");
    }

    #[test]
    fn credits_in_a_detail_slot_fail_instead_of_rendering() {
        let entry = CacheEntry {
            state: LoadState::Success(Arc::new(Resource::Credits(
                marquee_model::Credits {
                    movie_id: MovieId(603),
                    cast: Vec::new(),
                },
            ))),
            generation: 2,
        };

        assert!(matches!(
            detail_view(true, &entry),
            ScreenState::Failed { .. }
        ));
        assert_eq!(
            detail_view(true, &CacheEntry::idle()),
            ScreenState::Loading { skeleton_cards: 0 }
        );
    }
}
