//! Raw record to domain model conversion.
//!
//! Mapping is pure and total over optional data: absent or blank optional
//! fields become `None`, absent collections become empty vectors, incomplete
//! genres and countries are dropped, and only a missing or blank identity
//! field (`id`, `title`, cast `name`) fails the record.

use crate::details::{
    CastMember, CollectionRef, Credits, ExternalIds, Genre, Movie,
    ProductionCountry,
};
use crate::display::parse_release_date;
use crate::error::{ModelError, Result};
use crate::ids::MovieId;
use crate::wire::{
    RawCastMember, RawCollection, RawCreditsRecord, RawGenre, RawMovieRecord,
    RawProductionCountry,
};

pub fn map_movie(raw: RawMovieRecord) -> Result<Movie> {
    let id = required(raw.id, "movie", "id")?;
    let title = required(non_blank(raw.title), "movie", "title")?;

    let genres = raw
        .genres
        .unwrap_or_default()
        .into_iter()
        .filter_map(map_genre)
        .collect();

    let production_countries = raw
        .production_countries
        .unwrap_or_default()
        .into_iter()
        .filter_map(map_country)
        .collect();

    Ok(Movie {
        id: MovieId(id),
        title,
        original_title: non_blank(raw.original_title),
        overview: non_blank(raw.overview),
        tagline: non_blank(raw.tagline),
        homepage: non_blank(raw.homepage),
        status: non_blank(raw.status),
        release_date: parse_release_date(raw.release_date.as_deref()),
        runtime: raw.runtime,
        vote_average: raw.vote_average,
        vote_count: raw.vote_count,
        genres,
        external_ids: ExternalIds {
            imdb_id: non_blank(raw.imdb_id),
        },
        poster_path: non_blank(raw.poster_path),
        backdrop_path: non_blank(raw.backdrop_path),
        collection: raw.belongs_to_collection.and_then(map_collection),
        production_countries,
    })
}

pub fn map_credits(raw: RawCreditsRecord) -> Result<Credits> {
    let movie_id = required(raw.id, "credits", "id")?;
    let cast = raw
        .cast
        .unwrap_or_default()
        .into_iter()
        .map(map_cast_member)
        .collect::<Result<Vec<_>>>()?;

    Ok(Credits {
        movie_id: MovieId(movie_id),
        cast,
    })
}

// An incomplete genre is dropped rather than failing the movie.
fn map_genre(raw: RawGenre) -> Option<Genre> {
    Some(Genre {
        id: raw.id?,
        name: non_blank(raw.name)?,
    })
}

fn map_cast_member(raw: RawCastMember) -> Result<CastMember> {
    Ok(CastMember {
        id: required(raw.id, "cast member", "id")?,
        name: required(non_blank(raw.name), "cast member", "name")?,
        character: non_blank(raw.character),
        profile_path: non_blank(raw.profile_path),
        order: raw.order,
    })
}

// Collection membership is optional as a whole; a stub without an id is no membership.
fn map_collection(raw: RawCollection) -> Option<CollectionRef> {
    Some(CollectionRef {
        id: raw.id?,
        name: non_blank(raw.name),
        poster_path: non_blank(raw.poster_path),
        backdrop_path: non_blank(raw.backdrop_path),
    })
}

fn map_country(raw: RawProductionCountry) -> Option<ProductionCountry> {
    Some(ProductionCountry {
        iso_3166_1: non_blank(raw.iso_3166_1)?,
        name: non_blank(raw.name),
    })
}

fn required<T>(
    value: Option<T>,
    record: &'static str,
    field: &'static str,
) -> Result<T> {
    value.ok_or(ModelError::MissingField { record, field })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<RawMovieRecord> for Movie {
    type Error = ModelError;

    fn try_from(raw: RawMovieRecord) -> Result<Self> {
        map_movie(raw)
    }
}

impl TryFrom<RawCreditsRecord> for Credits {
    type Error = ModelError;

    fn try_from(raw: RawCreditsRecord) -> Result<Self> {
        map_credits(raw)
    }
}
