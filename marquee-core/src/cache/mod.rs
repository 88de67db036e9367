//! Keyed cache of asynchronous fetch state.
//!
//! One entry per key moves through `Idle -> Pending -> Success | Error`. The
//! cache owns every transition: consumers only request keys, read snapshots
//! and subscribe to changes.
//!
//! - **Dedup**: a `request` for a key that is already `Pending` or `Success`
//!   returns the existing snapshot without touching the driver.
//! - **Generations**: every fetch is tagged with a generation drawn from a
//!   cache-wide counter. A completion only writes if its generation is still
//!   the entry's current one, so a superseded fetch can never overwrite a
//!   newer result.
//! - **Reclamation**: an entry lives while it has subscribers. Dropping the
//!   last [`Subscription`] removes it, even mid-flight; the in-flight fetch
//!   finishes and its result is discarded.
//!
//! Entries sit in a [`DashMap`], whose shard locks serialize check-and-
//! transition for a key across threads. Snapshots fan out through a
//! per-entry [`tokio::sync::watch`] channel. No guard is held across an
//! `.await`.

mod entry;
mod subscription;

pub use entry::{CacheEntry, LoadState, Status};
pub use subscription::Subscription;

use std::fmt::{self, Debug};
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{Instrument, debug, debug_span, info, warn};

use crate::error::FetchError;

/// Supplies the keys and the fetch behind a [`ResourceCache`].
#[async_trait]
pub trait ResourceDriver: Send + Sync + 'static {
    type Key: Clone + Eq + Hash + Debug + Send + Sync + 'static;
    type Output: Send + Sync + 'static;

    /// Produce the value for `key`. Called at most once per transition of
    /// the key into `Pending`.
    async fn fetch(&self, key: Self::Key) -> Result<Self::Output, FetchError>;
}

struct Slot<T> {
    tx: watch::Sender<CacheEntry<T>>,
    subscribers: usize,
}

impl<T> Slot<T> {
    fn new() -> Self {
        Self {
            tx: watch::Sender::new(CacheEntry::idle()),
            subscribers: 0,
        }
    }

    fn snapshot(&self) -> CacheEntry<T> {
        self.tx.borrow().clone()
    }
}

struct Shared<D: ResourceDriver> {
    driver: D,
    entries: DashMap<D::Key, Slot<D::Output>>,
    generations: AtomicU64,
    runtime: Option<Handle>,
}

impl<D: ResourceDriver> Shared<D> {
    fn next_generation(&self) -> u64 {
        self.generations.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn complete(
        &self,
        key: &D::Key,
        generation: u64,
        result: Result<D::Output, FetchError>,
    ) {
        let Some(slot) = self.entries.get(key) else {
            debug!("entry reclaimed before completion; discarding result");
            return;
        };

        let current = slot.tx.borrow().generation;
        if current != generation {
            debug!(current, "superseded fetch completed; discarding result");
            return;
        }

        let state = match result {
            Ok(output) => {
                info!("fetch succeeded");
                LoadState::Success(Arc::new(output))
            }
            Err(err) => {
                warn!(error = %err, "fetch failed");
                LoadState::Error(err)
            }
        };
        slot.tx.send_replace(CacheEntry { state, generation });
    }
}

/// Async resource cache. Cheap to clone; clones share entries and driver.
pub struct ResourceCache<D: ResourceDriver> {
    shared: Arc<Shared<D>>,
}

impl<D: ResourceDriver> Clone for ResourceCache<D> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<D: ResourceDriver> Debug for ResourceCache<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceCache")
            .field("entries", &self.shared.entries.len())
            .field(
                "generation",
                &self.shared.generations.load(Ordering::Relaxed),
            )
            .finish_non_exhaustive()
    }
}

impl<D: ResourceDriver> ResourceCache<D> {
    /// Create a cache that spawns fetches on the Tokio runtime it is created
    /// in. Outside a runtime, fetches fall back to whichever runtime the
    /// requesting thread is in at request time.
    pub fn new(driver: D) -> Self {
        Self::build(driver, Handle::try_current().ok())
    }

    /// Create a cache that always spawns fetches on `runtime`, so keys can be
    /// requested from threads outside it.
    pub fn with_runtime(driver: D, runtime: Handle) -> Self {
        Self::build(driver, Some(runtime))
    }

    fn build(driver: D, runtime: Option<Handle>) -> Self {
        Self {
            shared: Arc::new(Shared {
                driver,
                entries: DashMap::new(),
                generations: AtomicU64::new(0),
                runtime,
            }),
        }
    }

    pub fn driver(&self) -> &D {
        &self.shared.driver
    }

    /// Ensure a fetch exists for `key` and return the resulting snapshot.
    ///
    /// With `enabled == false` this is a no-op returning an `Idle` snapshot;
    /// no entry is created and the driver is not called. Otherwise an absent,
    /// `Idle` or `Error` entry moves to `Pending` and a fetch is spawned on
    /// the cache's Tokio runtime, while a `Pending` or `Success` entry is
    /// returned as is. With no runtime available the entry settles as
    /// `Error(NetworkFailure)` and the driver is not called.
    pub fn request(
        &self,
        key: &D::Key,
        enabled: bool,
    ) -> CacheEntry<D::Output> {
        if !enabled {
            debug!(?key, "request disabled; key stays idle");
            return CacheEntry::idle();
        }

        self.begin(key, false)
    }

    /// Start a fresh fetch for `key` regardless of its state.
    ///
    /// Any fetch still in flight for the key is superseded: its completion
    /// will be discarded.
    pub fn refetch(&self, key: &D::Key) -> CacheEntry<D::Output> {
        self.begin(key, true)
    }

    /// Current snapshot for `key`, or an `Idle` placeholder.
    pub fn read(&self, key: &D::Key) -> CacheEntry<D::Output> {
        self.shared
            .entries
            .get(key)
            .map(|slot| slot.snapshot())
            .unwrap_or_default()
    }

    /// Register interest in `key` and request it.
    ///
    /// A disabled subscription is detached: it never creates an entry and
    /// always reports `Idle`.
    pub fn subscribe(&self, key: &D::Key, enabled: bool) -> Subscription<D> {
        if !enabled {
            debug!(?key, "subscription disabled; key stays idle");
            return Subscription::detached(Some(key.clone()));
        }

        let rx = {
            let mut slot = self
                .shared
                .entries
                .entry(key.clone())
                .or_insert_with(Slot::new);
            slot.subscribers += 1;
            slot.tx.subscribe()
        };
        self.request(key, true);

        Subscription::attached(self.clone(), key.clone(), rx)
    }

    /// Request `key` and wait until its entry settles.
    ///
    /// Does not register as a subscriber, so the settled entry stays cached
    /// for later readers.
    pub async fn fetch(&self, key: &D::Key) -> CacheEntry<D::Output> {
        let entry = self.request(key, true);
        if entry.is_settled() {
            return entry;
        }

        let mut rx = match self.shared.entries.get(key) {
            Some(slot) => slot.tx.subscribe(),
            None => return self.read(key),
        };
        settle(&mut rx).await
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.shared.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.entries.is_empty()
    }

    /// Number of entries currently waiting on the driver.
    pub fn in_flight(&self) -> usize {
        self.shared
            .entries
            .iter()
            .filter(|slot| slot.tx.borrow().is_pending())
            .count()
    }

    fn begin(&self, key: &D::Key, force: bool) -> CacheEntry<D::Output> {
        let pending = {
            let slot = self
                .shared
                .entries
                .entry(key.clone())
                .or_insert_with(Slot::new);
            let current = slot.snapshot();
            if !force && (current.is_pending() || current.is_success()) {
                debug!(
                    ?key,
                    generation = current.generation,
                    status = ?current.status(),
                    "reusing cached entry"
                );
                return current;
            }

            let pending = CacheEntry::pending(self.shared.next_generation());
            slot.tx.send_replace(pending.clone());
            pending
        };

        if self.spawn_fetch(key.clone(), pending.generation) {
            pending
        } else {
            self.read(key)
        }
    }

    /// Returns `false` when no runtime could take the fetch; the entry is
    /// then settled as an error instead.
    fn spawn_fetch(&self, key: D::Key, generation: u64) -> bool {
        let runtime = match self.shared.runtime.clone() {
            Some(runtime) => runtime,
            None => match Handle::try_current() {
                Ok(runtime) => runtime,
                Err(err) => {
                    self.shared.complete(
                        &key,
                        generation,
                        Err(FetchError::NetworkFailure(format!(
                            "no Tokio runtime to run the fetch: {err}"
                        ))),
                    );
                    return false;
                }
            },
        };

        let shared = Arc::clone(&self.shared);
        let span = debug_span!("resource_fetch", ?key, generation);

        runtime.spawn(
            async move {
                debug!("fetch started");
                let result = shared.driver.fetch(key.clone()).await;
                shared.complete(&key, generation, result);
            }
            .instrument(span),
        );
        true
    }

    pub(crate) fn release(&self, key: &D::Key) {
        let unobserved = {
            let Some(mut slot) = self.shared.entries.get_mut(key) else {
                return;
            };
            slot.subscribers = slot.subscribers.saturating_sub(1);
            slot.subscribers == 0
        };

        if unobserved
            && self
                .shared
                .entries
                .remove_if(key, |_, slot| slot.subscribers == 0)
                .is_some()
        {
            debug!(?key, "last subscriber dropped; entry reclaimed");
        }
    }
}

/// Wait for the first non-pending snapshot. A closed channel means the entry
/// was reclaimed, which reads as `Idle`.
pub(crate) async fn settle<T>(
    rx: &mut watch::Receiver<CacheEntry<T>>,
) -> CacheEntry<T> {
    match rx.wait_for(CacheEntry::is_settled).await {
        Ok(entry) => entry.clone(),
        Err(_) => CacheEntry::idle(),
    }
}
