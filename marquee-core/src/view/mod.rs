//! Screen states derived from cache snapshots.
//!
//! Everything here is a pure projection: a snapshot in, a value a renderer
//! can draw without further decisions out.

pub mod cast;
pub mod detail;

pub use cast::{CastCardView, CastRow, cast_screen, cast_view};
pub use detail::{MovieDetailView, detail_screen, detail_view};

use crate::cache::{CacheEntry, LoadState};
use crate::error::FetchError;

pub const MOVIE_NOT_FOUND_MESSAGE: &str = "Movie not found";
pub const FAILED_TO_LOAD_MESSAGE: &str =
    "Failed to load data, please reload this page or come back later";
pub const LOADING_MESSAGE: &str = "Loading";
pub const LOADING_CAST_MESSAGE: &str = "Loading cast members";

/// What a screen shows for one resource.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    /// No usable id was supplied; nothing was requested.
    NotFound,
    /// Waiting on the first settled snapshot.
    Loading {
        /// Placeholder cards to draw while waiting; `0` for a plain label.
        skeleton_cards: usize,
    },
    Failed {
        message: &'static str,
        error: FetchError,
    },
    Ready(T),
}

impl<T> ScreenState<T> {
    /// Project a snapshot. `project` picks the view out of the stored
    /// resource and returns `None` if the resource is of the wrong kind.
    pub fn from_entry<R>(
        enabled: bool,
        entry: &CacheEntry<R>,
        skeleton_cards: usize,
        project: impl FnOnce(&R) -> Option<T>,
    ) -> Self {
        if !enabled {
            return ScreenState::NotFound;
        }

        match entry.state() {
            LoadState::Idle | LoadState::Pending => {
                ScreenState::Loading { skeleton_cards }
            }
            LoadState::Error(error) => ScreenState::failed(error.clone()),
            LoadState::Success(data) => match project(data) {
                Some(view) => ScreenState::Ready(view),
                None => ScreenState::failed(FetchError::MappingFailure(
                    "cached resource has an unexpected kind".to_string(),
                )),
            },
        }
    }

    fn failed(error: FetchError) -> Self {
        ScreenState::Failed {
            message: FAILED_TO_LOAD_MESSAGE,
            error,
        }
    }

    /// Text shown in place of the content, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ScreenState::NotFound => Some(MOVIE_NOT_FOUND_MESSAGE),
            ScreenState::Loading { skeleton_cards: 0 } => Some(LOADING_MESSAGE),
            ScreenState::Loading { .. } => Some(LOADING_CAST_MESSAGE),
            ScreenState::Failed { message, .. } => Some(message),
            ScreenState::Ready(_) => None,
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ScreenState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading { .. })
    }
}
