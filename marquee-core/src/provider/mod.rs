//! Remote metadata sources.
//!
//! The cache only ever talks to a [`RemoteMetadataClient`]; the client knows
//! nothing about caching.

pub mod tmdb;

pub use tmdb::TmdbClient;

use async_trait::async_trait;
use marquee_model::{MovieId, RawCreditsRecord, RawMovieRecord};

use crate::error::FetchError;

/// Fetches raw TMDB records. Implementations must be idempotent and keep no
/// state beyond the request itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteMetadataClient: Send + Sync + 'static {
    async fn fetch_detail(&self, id: MovieId) -> Result<RawMovieRecord, FetchError>;

    async fn fetch_credits(&self, id: MovieId) -> Result<RawCreditsRecord, FetchError>;
}

#[async_trait]
impl<C: RemoteMetadataClient + ?Sized> RemoteMetadataClient for std::sync::Arc<C> {
    async fn fetch_detail(&self, id: MovieId) -> Result<RawMovieRecord, FetchError> {
        (**self).fetch_detail(id).await
    }

    async fn fetch_credits(&self, id: MovieId) -> Result<RawCreditsRecord, FetchError> {
        (**self).fetch_credits(id).await
    }
}
