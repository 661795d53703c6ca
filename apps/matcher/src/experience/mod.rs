// Experience aggregation: overlapping job intervals merged into one tenure.

pub mod dates;

use std::fmt;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::MatchError;
use crate::extraction::schema::ExperienceEntry;

pub use dates::{parse_date_token, DateToken};

const MIN_SPAN_DAYS: i64 = 30;
const MAX_SPAN_DAYS: i64 = 60 * 365;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tenure {
    pub years: u32,
    pub months: u32,
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years {} months", self.years, self.months)
    }
}

/// A closed date range that survived validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Interval {
    fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

pub fn aggregate(entries: &[ExperienceEntry]) -> Tenure {
    aggregate_at(entries, Utc::now().date_naive())
}

/// Same as [`aggregate`] with a fixed clock.
pub fn aggregate_at(entries: &[ExperienceEntry], today: NaiveDate) -> Tenure {
    tenure_of(&merge(valid_intervals(entries, today)))
}

/// Entries that pass every date check, in input order.
pub fn valid_intervals(entries: &[ExperienceEntry], today: NaiveDate) -> Vec<Interval> {
    entries
        .iter()
        .filter_map(|entry| match interval_of(entry, today) {
            Ok(interval) => Some(interval),
            Err(e) => {
                debug!("{e}");
                None
            }
        })
        .collect()
}

fn interval_of(entry: &ExperienceEntry, today: NaiveDate) -> Result<Interval, MatchError> {
    let reject = |reason: &str| {
        MatchError::InvalidDateEntry(format!(
            "{} at {}: {reason}",
            entry.role, entry.company
        ))
    };

    let start = match parse_date_token(&entry.start) {
        DateToken::Date(d) => d,
        _ => return Err(reject("start date missing or unparsable")),
    };
    let end = if entry.end.trim().is_empty() {
        today
    } else {
        parse_date_token(&entry.end)
            .resolve(today)
            .ok_or_else(|| reject("end date unparsable"))?
    };

    if start > today {
        return Err(reject("starts in the future"));
    }
    if end < start {
        return Err(reject("ends before it starts"));
    }

    let interval = Interval { start, end };
    let days = interval.days();
    if !(MIN_SPAN_DAYS..=MAX_SPAN_DAYS).contains(&days) {
        return Err(reject("implausible duration"));
    }
    Ok(interval)
}

/// Sorts by start and folds every interval that starts on or before the
/// running end into it.
pub fn merge(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_by_key(|i| i.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for current in intervals {
        match merged.last_mut() {
            Some(last) if current.start <= last.end => {
                last.end = last.end.max(current.end);
            }
            _ => merged.push(current),
        }
    }
    merged
}

/// 365-day years and 30-day months over the summed span.
pub fn tenure_of(merged: &[Interval]) -> Tenure {
    let total_days: i64 = merged.iter().map(Interval::days).sum();
    let tenure = Tenure {
        years: (total_days / 365) as u32,
        months: ((total_days % 365) / 30) as u32,
    };
    if !merged.is_empty() {
        info!("Experience: {tenure}");
    }
    tenure
}
