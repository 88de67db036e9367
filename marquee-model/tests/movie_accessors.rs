//! Accessors on mapped movies: image URLs, display strings and links built
//! from realistic TMDB payloads.

use marquee_model::{
    BackdropSize, ImageSize, Movie, MovieImage, NO_RATINGS_MESSAGE, PosterSize,
    ProfileSize, RawCreditsRecord, RawMovieRecord, map_credits, map_movie,
};

const FIGHT_CLUB: &str = r#"{
    "adult": false,
    "backdrop_path": "/hZkgoQYus5vegHoetLkCJzb17zJ.jpg",
    "belongs_to_collection": null,
    "budget": 63000000,
    "genres": [{"id": 18, "name": "Drama"}, {"id": 53, "name": "Thriller"}],
    "homepage": "http://www.foxmovies.com/movies/fight-club",
    "id": 550,
    "imdb_id": "tt0137523",
    "original_language": "en",
    "original_title": "Fight Club",
    "overview": "A ticking-time-bomb insomniac and a slippery soap salesman channel primal male aggression.",
    "popularity": 61.416,
    "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
    "production_countries": [{"iso_3166_1": "US", "name": "United States of America"}],
    "release_date": "1999-10-15",
    "revenue": 100853753,
    "runtime": 139,
    "status": "Released",
    "tagline": "Mischief. Mayhem. Soap.",
    "title": "Fight Club",
    "video": false,
    "vote_average": 8.433,
    "vote_count": 26280
}"#;

fn fight_club() -> Movie {
    let raw: RawMovieRecord = serde_json::from_str(FIGHT_CLUB).expect("fixture");
    map_movie(raw).expect("maps")
}

#[test]
fn full_record_projects_display_values() {
    let movie = fight_club();

    assert_eq!(movie.title, "Fight Club");
    assert_eq!(movie.release_year(), Some(1999));
    assert_eq!(movie.runtime_display().as_deref(), Some("2h 19m"));
    assert_eq!(movie.ratings_display(), "8.4 / 10 (votes: 26280)");
    assert_eq!(movie.genres_summary().as_deref(), Some("Drama, Thriller"));
    assert_eq!(movie.tagline.as_deref(), Some("Mischief. Mayhem. Soap."));
    assert_eq!(movie.tmdb_url(), "https://www.themoviedb.org/movie/550");
    assert_eq!(
        movie.imdb_url().as_deref(),
        Some("https://www.imdb.com/title/tt0137523")
    );
}

#[test]
fn image_accessors_take_size_tokens() {
    let movie = fight_club();

    assert_eq!(
        movie.poster_url(PosterSize::W500).unwrap().as_str(),
        "https://image.tmdb.org/t/p/w500/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"
    );
    assert_eq!(
        movie.backdrop_url(BackdropSize::W1280).unwrap().as_str(),
        "https://image.tmdb.org/t/p/w1280/hZkgoQYus5vegHoetLkCJzb17zJ.jpg"
    );
    assert_eq!(
        movie
            .image_url(MovieImage::Backdrop, ImageSize::Backdrop(BackdropSize::Original))
            .unwrap()
            .unwrap()
            .as_str(),
        "https://image.tmdb.org/t/p/original/hZkgoQYus5vegHoetLkCJzb17zJ.jpg"
    );
    assert!(
        movie
            .image_url(MovieImage::Poster, ImageSize::Profile(ProfileSize::W185))
            .is_err()
    );
}

#[test]
fn absent_backdrop_yields_no_url_for_any_size() {
    let mut movie = fight_club();
    movie.backdrop_path = None;

    for size in BackdropSize::ALL {
        assert_eq!(movie.backdrop_url(size), None);
        assert_eq!(
            movie.image_url(MovieImage::Backdrop, size.into()).unwrap(),
            None
        );
    }
}

#[test]
fn degenerate_record_omits_every_derived_line() {
    let raw: RawMovieRecord = serde_json::from_str(
        r#"{"id":42,"title":"X","runtime":0,"vote_average":0,"vote_count":0,
            "poster_path":null,"release_date":""}"#,
    )
    .unwrap();
    let movie = map_movie(raw).unwrap();

    assert_eq!(movie.runtime_display(), None);
    assert_eq!(movie.ratings_display(), NO_RATINGS_MESSAGE);
    assert_eq!(movie.poster_url(PosterSize::W500), None);
    assert_eq!(movie.release_year(), None);
    assert_eq!(movie.genres_summary(), None);
    assert_eq!(movie.imdb_url(), None);
}

#[test]
fn mapping_is_repeatable_and_serializable() {
    let raw: RawMovieRecord = serde_json::from_str(FIGHT_CLUB).unwrap();
    let first = map_movie(raw.clone()).unwrap();
    let second = map_movie(raw).unwrap();
    assert_eq!(first, second);

    let json = serde_json::to_string(&first).unwrap();
    let back: Movie = serde_json::from_str(&json).unwrap();
    assert_eq!(back, first);
}

#[test]
fn cast_profiles_resolve_only_when_present() {
    let raw: RawCreditsRecord = serde_json::from_str(
        r#"{"id":550,"cast":[
            {"id":819,"name":"Edward Norton","character":"Narrator","profile_path":"/8nytsqL59SFJTVYVrN72k6qkGgJ.jpg","order":0},
            {"id":7499,"name":"Jared Leto","character":"Angel Face","profile_path":null,"order":1}
        ],"crew":[]}"#,
    )
    .unwrap();
    let credits = map_credits(raw).unwrap();

    assert_eq!(
        credits.cast[0].profile_url(ProfileSize::W185).unwrap().as_str(),
        "https://image.tmdb.org/t/p/w185/8nytsqL59SFJTVYVrN72k6qkGgJ.jpg"
    );
    assert_eq!(credits.cast[1].profile_url(ProfileSize::W185), None);
}
