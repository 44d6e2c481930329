use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{entry::PostData, PostEntry};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// `YYYY` and `YYYY-MM` stand for the first day of the year or month.
fn expand_partial_date(raw: &str) -> Option<String> {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match raw.split_once('-') {
        None if raw.len() == 4 && digits(raw) => Some(format!("{raw}-01-01")),
        Some((year, month))
            if year.len() == 4 && month.len() == 2 && digits(year) && digits(month) =>
        {
            Some(format!("{raw}-01"))
        }
        _ => None,
    }
}

/// Parses a frontmatter date. Values without an offset are read as UTC.
/// Returns `None` for anything that is not a recognised date.
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|f| DateTime::parse_from_str(raw, f).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
    {
        return Some(dt.and_utc());
    }

    let expanded = expand_partial_date(raw);
    let raw = expanded.as_deref().unwrap_or(raw);

    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

pub trait Published {
    fn published(&self) -> &str;

    fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_published(self.published())
    }
}

impl Published for PostData {
    fn published(&self) -> &str {
        &self.published
    }
}

impl Published for PostEntry {
    fn published(&self) -> &str {
        self.data.published()
    }
}

/// Newest first. Invalid dates go after every valid one; the sort is
/// stable, so those keep their fetch order.
pub fn sort_by_published<T: Published>(items: &mut [T]) {
    items.sort_by_cached_key(|item| {
        let at = item.published_at();
        (at.is_none(), Reverse(at))
    });
}
