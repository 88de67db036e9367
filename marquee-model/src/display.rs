//! Display strings for raw numeric and date fields.
//!
//! Every formatter returns `None` (or a fixed message) for values that would
//! otherwise render as garbage: a zero runtime, a missing release date, a
//! rating average backed by no votes.

use chrono::{Datelike, NaiveDate};

use crate::details::Genre;

/// Shown instead of a `0.0 / 10` average when nobody has voted.
pub const NO_RATINGS_MESSAGE: &str = "No ratings yet";

/// Wire format of TMDB release dates.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a runtime in minutes as `2h 22m`, `2h` or `45m`.
///
/// Non-positive runtimes are not durations worth showing; the caller omits
/// the line.
pub fn format_runtime(minutes: i64) -> Option<String> {
    if minutes <= 0 {
        return None;
    }

    let hours = minutes / 60;
    let rest = minutes % 60;

    Some(match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    })
}

/// Inverse of [`format_runtime`].
pub fn parse_runtime(display: &str) -> Option<i64> {
    let mut total = 0i64;
    let mut seen = false;

    for part in display.split_whitespace() {
        let unit = part.chars().last()?;
        let value: i64 = part[..part.len() - unit.len_utf8()].parse().ok()?;
        let minutes = match unit {
            'h' => value.checked_mul(60)?,
            'm' => value,
            _ => return None,
        };
        total = total.checked_add(minutes)?;
        seen = true;
    }

    seen.then_some(total)
}

/// Parse a wire release date. Empty or malformed dates yield `None`.
pub fn parse_release_date(date: Option<&str>) -> Option<NaiveDate> {
    let date = date.map(str::trim).filter(|d| !d.is_empty())?;
    NaiveDate::parse_from_str(date, RELEASE_DATE_FORMAT).ok()
}

/// Year of a wire release date, if it parses.
pub fn format_release_year(date: Option<&str>) -> Option<i32> {
    release_year(parse_release_date(date))
}

pub fn release_year(date: Option<NaiveDate>) -> Option<i32> {
    date.map(|d| d.year())
}

/// Render the vote average to one decimal alongside the raw vote count.
pub fn format_ratings(average: f32, count: u32) -> String {
    if count == 0 {
        return NO_RATINGS_MESSAGE.to_string();
    }

    format!("{average:.1} / 10 (votes: {count})")
}

/// Genre names joined by `, `; `None` for an empty list.
pub fn format_genres(genres: &[Genre]) -> Option<String> {
    if genres.is_empty() {
        return None;
    }

    Some(
        genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    )
}
