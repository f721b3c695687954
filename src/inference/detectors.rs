//! Per-cell type detectors
//!
//! Numeric patterns use explicit ASCII digit classes; temporal patterns are
//! shape-checked with a regex and then range-checked with chrono.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::config::InferenceConfig;
use super::types::TypeCandidate;

static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

static FLOAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

static DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^([0-9]{4}-[0-9]{2}-[0-9]{2})",
        r"[T ]([0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?)",
        r"(Z|[+-][0-9]{2}:?[0-9]{2})?$",
    ))
    .unwrap()
});

static TIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?$").unwrap());

impl TypeCandidate {
    /// Whether a non-missing cell value satisfies this candidate's predicate.
    ///
    /// Integer cells also satisfy `Float`, so a column mixing both resolves to
    /// `Float` rather than `String`.
    pub fn accepts(&self, value: &str, config: &InferenceConfig) -> bool {
        match self {
            TypeCandidate::Boolean => config.is_boolean_token(value),
            TypeCandidate::Integer => is_integer(value),
            TypeCandidate::Float => is_float(value),
            TypeCandidate::Date => config.detect_temporal && is_date(value),
            TypeCandidate::DateTime => config.detect_temporal && is_datetime(value),
            TypeCandidate::Time => config.detect_temporal && is_time(value),
            TypeCandidate::String => true,
        }
    }
}

/// Detect the most specific candidate for a single cell value
pub fn detect_type(value: &str, config: &InferenceConfig) -> TypeCandidate {
    TypeCandidate::ALL
        .into_iter()
        .find(|candidate| candidate.accepts(value, config))
        .unwrap_or(TypeCandidate::String)
}

/// Base-10 signed whole number, no surrounding whitespace
pub fn is_integer(value: &str) -> bool {
    INTEGER_REGEX.is_match(value)
}

/// Signed decimal or exponential-notation real number
pub fn is_float(value: &str) -> bool {
    FLOAT_REGEX.is_match(value)
}

/// ISO 8601 calendar date (`YYYY-MM-DD`)
pub fn is_date(value: &str) -> bool {
    DATE_REGEX.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// ISO 8601 date and time with optional fraction and UTC offset
pub fn is_datetime(value: &str) -> bool {
    let Some(caps) = DATETIME_REGEX.captures(value) else {
        return false;
    };

    let date_ok = caps
        .get(1)
        .is_some_and(|d| NaiveDate::parse_from_str(d.as_str(), "%Y-%m-%d").is_ok());
    let time_ok = caps.get(2).is_some_and(|t| valid_time(t.as_str()));
    let offset_ok = caps.get(3).is_none_or(|o| valid_offset(o.as_str()));

    date_ok && time_ok && offset_ok
}

/// Time of day (`HH:MM:SS` with optional fraction)
pub fn is_time(value: &str) -> bool {
    TIME_REGEX.is_match(value) && valid_time(value)
}

fn valid_time(value: &str) -> bool {
    // chrono admits second 60 as a leap second
    value.get(6..8).is_some_and(|seconds| seconds < "60")
        && NaiveTime::parse_from_str(value, "%H:%M:%S%.f").is_ok()
}

fn valid_offset(offset: &str) -> bool {
    if offset == "Z" {
        return true;
    }

    let digits: String = offset[1..].chars().filter(|c| *c != ':').collect();
    let (hours, minutes) = digits.split_at(2);
    matches!(
        (hours.parse::<u32>(), minutes.parse::<u32>()),
        (Ok(h), Ok(m)) if h <= 23 && m <= 59
    )
}
