//! Marquee core: a keyed async resource cache for TMDB movie metadata and the
//! screen states projected from it.
//!
//! ```no_run
//! use marquee_core::{MetadataCache, TmdbClient, TmdbConfig, view};
//! use marquee_model::MovieId;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let (config, _) = TmdbConfig::load_from_env()?;
//! let cache = MetadataCache::with_client(TmdbClient::new(config)?);
//!
//! let mut detail = cache.movie_detail(MovieId::from_param(Some("550")));
//! detail.settled().await;
//! let screen = view::detail_screen(&detail);
//! # let _ = screen;
//! # Ok(())
//! # }
//! ```
#![allow(missing_docs)]

pub mod cache;
pub mod config;
pub mod error;
pub mod key;
pub mod metadata;
pub mod provider;
pub mod view;

pub use cache::{
    CacheEntry, LoadState, ResourceCache, ResourceDriver, Status, Subscription,
};
pub use config::{TmdbConfig, TmdbConfigSource};
pub use error::FetchError;
pub use key::{ResourceKey, ResourceKind};
pub use metadata::{MetadataCache, MetadataDriver, Resource};
pub use provider::{RemoteMetadataClient, TmdbClient};
pub use view::ScreenState;
