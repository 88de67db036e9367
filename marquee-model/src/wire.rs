//! Untouched TMDB v3 response shapes.
//!
//! Every field tolerates `null` or absence. Deciding which fields a record
//! cannot live without is the mapper's job, so a half-populated payload still
//! deserializes and fails with a precise [`crate::ModelError`] instead of an
//! opaque decode error.

use serde::{Deserialize, Serialize};

/// `GET /movie/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMovieRecord {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub homepage: Option<String>,
    pub status: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<i64>,
    pub vote_average: Option<f32>,
    pub vote_count: Option<u32>,
    pub imdb_id: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub genres: Option<Vec<RawGenre>>,
    pub belongs_to_collection: Option<RawCollection>,
    pub production_countries: Option<Vec<RawProductionCountry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawGenre {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCollection {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProductionCountry {
    pub iso_3166_1: Option<String>,
    pub name: Option<String>,
}

/// `GET /movie/{id}/credits`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCreditsRecord {
    pub id: Option<u64>,
    pub cast: Option<Vec<RawCastMember>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCastMember {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub character: Option<String>,
    pub profile_path: Option<String>,
    pub order: Option<u32>,
    pub credit_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_detail_payload_deserializes() {
        let raw: RawMovieRecord = serde_json::from_str(
            r#"{"id":42,"title":"X","runtime":0,"vote_average":0,"vote_count":0,
                "poster_path":null,"release_date":"","genres":null}"#,
        )
        .unwrap();

        assert_eq!(raw.id, Some(42));
        assert_eq!(raw.runtime, Some(0));
        assert_eq!(raw.poster_path, None);
        assert_eq!(raw.release_date.as_deref(), Some(""));
        assert_eq!(raw.genres, None);
        assert_eq!(raw.tagline, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw: RawCreditsRecord = serde_json::from_str(
            r#"{"id":7,"cast":[{"id":1,"name":"A","cast_id":3,"gender":2}],"crew":[]}"#,
        )
        .unwrap();

        let cast = raw.cast.unwrap();
        assert_eq!(cast.len(), 1);
        assert_eq!(cast[0].name.as_deref(), Some("A"));
    }
}
