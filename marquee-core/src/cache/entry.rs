use std::sync::Arc;

use crate::error::FetchError;

/// Coarse lifecycle phase of a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Idle,
    Pending,
    Success,
    Error,
}

/// Lifecycle of one key. Data only exists in `Success` and an error only in
/// `Error`, so the two can never be observed together.
#[derive(Debug)]
pub enum LoadState<T> {
    Idle,
    Pending,
    Success(Arc<T>),
    Error(FetchError),
}

// Manual impl: cloning only bumps the Arc, `T` itself need not be Clone.
impl<T> Clone for LoadState<T> {
    fn clone(&self) -> Self {
        match self {
            LoadState::Idle => LoadState::Idle,
            LoadState::Pending => LoadState::Pending,
            LoadState::Success(data) => LoadState::Success(Arc::clone(data)),
            LoadState::Error(err) => LoadState::Error(err.clone()),
        }
    }
}

/// Snapshot of a key's state, tagged with the generation of the fetch that
/// produced it.
#[derive(Debug)]
pub struct CacheEntry<T> {
    pub(crate) state: LoadState<T>,
    pub(crate) generation: u64,
}

impl<T> Clone for CacheEntry<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            generation: self.generation,
        }
    }
}

impl<T> CacheEntry<T> {
    /// Placeholder for keys that were never requested or are disabled.
    pub const fn idle() -> Self {
        Self {
            state: LoadState::Idle,
            generation: 0,
        }
    }

    pub(crate) const fn pending(generation: u64) -> Self {
        Self {
            state: LoadState::Pending,
            generation,
        }
    }

    pub fn status(&self) -> Status {
        match self.state {
            LoadState::Idle => Status::Idle,
            LoadState::Pending => Status::Pending,
            LoadState::Success(_) => Status::Success,
            LoadState::Error(_) => Status::Error,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&Arc<T>> {
        match &self.state {
            LoadState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.state {
            LoadState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Generation of the most recently issued fetch; `0` for an entry that
    /// never fetched.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, LoadState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, LoadState::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, LoadState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self.state, LoadState::Error(_))
    }

    /// Terminal or never started: nothing is in flight for this snapshot.
    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }
}

impl<T> Default for CacheEntry<T> {
    fn default() -> Self {
        Self::idle()
    }
}
