use std::fmt;

use marquee_model::MovieId;

/// Endpoints the cache knows how to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    MovieDetail,
    MovieCredits,
}

impl ResourceKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::MovieDetail => "movie_detail",
            ResourceKind::MovieCredits => "movie_credits",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one cacheable fetch. Two keys are equal iff kind and id match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey {
    pub kind: ResourceKind,
    pub id: MovieId,
}

impl ResourceKey {
    pub const fn new(kind: ResourceKind, id: MovieId) -> Self {
        Self { kind, id }
    }

    pub const fn movie_detail(id: MovieId) -> Self {
        Self::new(ResourceKind::MovieDetail, id)
    }

    pub const fn movie_credits(id: MovieId) -> Self {
        Self::new(ResourceKind::MovieCredits, id)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
