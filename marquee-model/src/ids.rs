use serde::{Deserialize, Serialize};

/// TMDB movie identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl MovieId {
    pub const fn new(id: u64) -> Self {
        MovieId(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Parse an id from an untrusted route parameter.
    ///
    /// Absent, blank, non-numeric and zero inputs yield `None`; callers treat
    /// that as "nothing to fetch" rather than as an error.
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        let raw = param?.trim();
        match raw.parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(id) => Some(MovieId(id)),
        }
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        MovieId(id)
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
