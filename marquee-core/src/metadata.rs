//! The resource cache specialised for TMDB movie metadata.

use async_trait::async_trait;
use marquee_model::{Credits, Movie, MovieId, map_credits, map_movie};
use tracing::{debug, instrument};

use crate::cache::{CacheEntry, ResourceCache, ResourceDriver, Subscription};
use crate::error::FetchError;
use crate::key::{ResourceKey, ResourceKind};
use crate::provider::RemoteMetadataClient;

/// A mapped domain model, as stored in a [`MetadataCache`] entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Movie(Movie),
    Credits(Credits),
}

impl Resource {
    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            Resource::Movie(movie) => Some(movie),
            Resource::Credits(_) => None,
        }
    }

    pub fn as_credits(&self) -> Option<&Credits> {
        match self {
            Resource::Credits(credits) => Some(credits),
            Resource::Movie(_) => None,
        }
    }
}

/// Fetches raw records through a [`RemoteMetadataClient`] and maps them.
#[derive(Debug)]
pub struct MetadataDriver<C> {
    client: C,
}

impl<C: RemoteMetadataClient> MetadataDriver<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C: RemoteMetadataClient> ResourceDriver for MetadataDriver<C> {
    type Key = ResourceKey;
    type Output = Resource;

    #[instrument(skip_all, fields(kind = %key.kind, id = %key.id))]
    async fn fetch(&self, key: ResourceKey) -> Result<Resource, FetchError> {
        let resource = match key.kind {
            ResourceKind::MovieDetail => {
                let raw = self.client.fetch_detail(key.id).await?;
                Resource::Movie(map_movie(raw)?)
            }
            ResourceKind::MovieCredits => {
                let raw = self.client.fetch_credits(key.id).await?;
                Resource::Credits(map_credits(raw)?)
            }
        };
        debug!("mapped remote record");
        Ok(resource)
    }
}

pub type MetadataCache<C> = ResourceCache<MetadataDriver<C>>;

impl<C: RemoteMetadataClient> ResourceCache<MetadataDriver<C>> {
    pub fn with_client(client: C) -> Self {
        Self::new(MetadataDriver::new(client))
    }

    /// Subscribe to a movie's details. Without an id the subscription is
    /// disabled and never reaches the client.
    pub fn movie_detail(&self, id: Option<MovieId>) -> Subscription<MetadataDriver<C>> {
        self.subscribe_movie(ResourceKind::MovieDetail, id)
    }

    /// Subscribe to a movie's credits, disabled without an id.
    pub fn movie_credits(&self, id: Option<MovieId>) -> Subscription<MetadataDriver<C>> {
        self.subscribe_movie(ResourceKind::MovieCredits, id)
    }

    /// Request detail and credits together and wait for both to settle.
    /// Both entries are `Idle` without an id.
    pub async fn load_movie_screen(
        &self,
        id: Option<MovieId>,
    ) -> (CacheEntry<Resource>, CacheEntry<Resource>) {
        let Some(id) = id else {
            return (CacheEntry::idle(), CacheEntry::idle());
        };

        let detail = ResourceKey::movie_detail(id);
        let credits = ResourceKey::movie_credits(id);
        futures::join!(self.fetch(&detail), self.fetch(&credits))
    }

    fn subscribe_movie(
        &self,
        kind: ResourceKind,
        id: Option<MovieId>,
    ) -> Subscription<MetadataDriver<C>> {
        match id {
            Some(id) => self.subscribe(&ResourceKey::new(kind, id), true),
            None => Subscription::detached(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use marquee_model::{RawCastMember, RawCreditsRecord, RawMovieRecord};

    use super::*;
    use crate::provider::MockRemoteMetadataClient;

    fn raw_movie(id: u64, title: &str) -> RawMovieRecord {
        RawMovieRecord {
            id: Some(id),
            title: Some(title.to_string()),
            runtime: Some(139),
            vote_average: Some(8.4),
            vote_count: Some(26_280),
            release_date: Some("1999-10-15".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn detail_is_fetched_once_and_mapped() {
        let mut client = MockRemoteMetadataClient::new();
        client
            .expect_fetch_detail()
            .times(1)
            .returning(|id| Ok(raw_movie(id.get(), "Fight Club")));
        client.expect_fetch_credits().never();

        let cache = MetadataCache::with_client(client);
        let mut first = cache.movie_detail(Some(MovieId(550)));
        let second = cache.movie_detail(Some(MovieId(550)));
        assert_eq!(first.current().generation(), second.current().generation());

        let settled = first.settled().await;
        let movie = settled
            .data()
            .and_then(|resource| resource.as_movie())
            .expect("movie mapped");
        assert_eq!(movie.title, "Fight Club");
        assert_eq!(movie.runtime_display().as_deref(), Some("2h 19m"));
        assert!(second.current().is_success());
    }

    #[tokio::test]
    async fn missing_id_never_reaches_the_client() {
        let mut client = MockRemoteMetadataClient::new();
        client.expect_fetch_detail().never();
        client.expect_fetch_credits().never();

        let cache = MetadataCache::with_client(client);
        let mut detail = cache.movie_detail(None);
        let credits = cache.movie_credits(None);

        assert!(!detail.is_enabled());
        assert!(detail.settled().await.is_idle());
        assert!(credits.current().is_idle());
        assert!(cache.is_empty());

        let (detail, credits) = cache.load_movie_screen(None).await;
        assert!(detail.is_idle() && credits.is_idle());
    }

    #[tokio::test]
    async fn record_without_title_is_a_mapping_failure() {
        let mut client = MockRemoteMetadataClient::new();
        client.expect_fetch_detail().returning(|id| {
            Ok(RawMovieRecord {
                id: Some(id.get()),
                ..Default::default()
            })
        });

        let cache = MetadataCache::with_client(client);
        let entry = cache.fetch(&ResourceKey::movie_detail(MovieId(9))).await;

        assert!(entry.data().is_none());
        assert!(matches!(entry.error(), Some(FetchError::MappingFailure(msg)) if msg.contains("title")));
    }

    #[tokio::test]
    async fn client_errors_are_stored_verbatim() {
        let mut client = MockRemoteMetadataClient::new();
        client.expect_fetch_credits().returning(|_| {
            Err(FetchError::ServerError {
                status: 502,
                message: "Bad Gateway".into(),
            })
        });

        let cache = MetadataCache::with_client(client);
        let entry = cache.fetch(&ResourceKey::movie_credits(MovieId(3))).await;

        assert_eq!(
            entry.error(),
            Some(&FetchError::ServerError {
                status: 502,
                message: "Bad Gateway".into(),
            })
        );
    }

    #[tokio::test]
    async fn screen_load_fetches_detail_and_credits_together() {
        let mut client = MockRemoteMetadataClient::new();
        client
            .expect_fetch_detail()
            .times(1)
            .returning(|id| Ok(raw_movie(id.get(), "Heat")));
        client.expect_fetch_credits().times(1).returning(|id| {
            Ok(RawCreditsRecord {
                id: Some(id.get()),
                cast: Some(vec![RawCastMember {
                    id: Some(1158),
                    name: Some("Al Pacino".into()),
                    character: Some("Lt. Vincent Hanna".into()),
                    ..Default::default()
                }]),
            })
        });

        let cache = MetadataCache::with_client(client);
        let (detail, credits) = cache.load_movie_screen(Some(MovieId(949))).await;

        assert_eq!(
            detail.data().and_then(|r| r.as_movie()).map(|m| m.title.as_str()),
            Some("Heat")
        );
        let credits = credits.data().and_then(|r| r.as_credits()).cloned();
        assert_eq!(credits.map(|c| c.cast.len()), Some(1));
        assert_eq!(cache.len(), 2);
    }
}
