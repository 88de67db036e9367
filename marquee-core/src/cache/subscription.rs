use std::fmt;

use tokio::sync::watch;

use super::{CacheEntry, ResourceCache, ResourceDriver, settle};

struct Attachment<D: ResourceDriver> {
    cache: ResourceCache<D>,
    rx: watch::Receiver<CacheEntry<D::Output>>,
}

/// A consumer's interest in one key.
///
/// Holds the entry alive; dropping the last subscription for a key lets the
/// cache reclaim it. A detached subscription (disabled, or without a key)
/// reports `Idle` forever and never triggers a fetch.
pub struct Subscription<D: ResourceDriver> {
    key: Option<D::Key>,
    attachment: Option<Attachment<D>>,
}

impl<D: ResourceDriver> Subscription<D> {
    pub(super) fn attached(
        cache: ResourceCache<D>,
        key: D::Key,
        rx: watch::Receiver<CacheEntry<D::Output>>,
    ) -> Self {
        Self {
            key: Some(key),
            attachment: Some(Attachment { cache, rx }),
        }
    }

    /// A subscription that will never observe anything but `Idle`.
    pub fn detached(key: Option<D::Key>) -> Self {
        Self {
            key,
            attachment: None,
        }
    }

    pub fn key(&self) -> Option<&D::Key> {
        self.key.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.attachment.is_some()
    }

    pub fn current(&self) -> CacheEntry<D::Output> {
        match &self.attachment {
            Some(attachment) => attachment.rx.borrow().clone(),
            None => CacheEntry::idle(),
        }
    }

    /// Wait for the next snapshot. `None` once nothing more can change:
    /// the subscription is detached or the entry is gone.
    pub async fn changed(&mut self) -> Option<CacheEntry<D::Output>> {
        let attachment = self.attachment.as_mut()?;
        attachment.rx.changed().await.ok()?;
        Some(attachment.rx.borrow_and_update().clone())
    }

    /// Wait until the entry is no longer `Pending`.
    pub async fn settled(&mut self) -> CacheEntry<D::Output> {
        match self.attachment.as_mut() {
            Some(attachment) => settle(&mut attachment.rx).await,
            None => CacheEntry::idle(),
        }
    }

    /// User-triggered reload of the subscribed key.
    pub fn refetch(&self) -> CacheEntry<D::Output> {
        match (&self.attachment, &self.key) {
            (Some(attachment), Some(key)) => attachment.cache.refetch(key),
            _ => CacheEntry::idle(),
        }
    }
}

impl<D: ResourceDriver> Drop for Subscription<D> {
    fn drop(&mut self) {
        if let (Some(attachment), Some(key)) =
            (self.attachment.take(), self.key.as_ref())
        {
            attachment.cache.release(key);
        }
    }
}

impl<D: ResourceDriver> fmt::Debug for Subscription<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .field("enabled", &self.is_enabled())
            .field("status", &self.current().status())
            .finish()
    }
}
