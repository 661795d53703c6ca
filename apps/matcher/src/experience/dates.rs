//! Free-form resume date parsing.

use chrono::NaiveDate;
use tracing::debug;

const PRESENT_KEYWORDS: &[&str] = &[
    "present",
    "current",
    "ongoing",
    "till now",
    "today",
    "till present",
    "till date",
    "current role",
];

const UNKNOWN_KEYWORDS: &[&str] = &["no date", "n/a", "not available", "unknown", "--", "none"];

/// Which components a format leaves out, filled with 1 before parsing.
#[derive(Clone, Copy)]
enum Missing {
    Nothing,
    Day,
    MonthAndDay,
}

const FORMATS: &[(&str, Missing)] = &[
    ("%Y", Missing::MonthAndDay),
    ("%Y-%m", Missing::Day),
    ("%Y-%m-%d", Missing::Nothing),
    ("%m/%Y", Missing::Day),
    ("%m-%Y", Missing::Day),
    ("%m/%d/%Y", Missing::Nothing),
    ("%d-%m-%Y", Missing::Nothing),
    ("%B %Y", Missing::Day),
    ("%b %Y", Missing::Day),
    ("%B %d, %Y", Missing::Nothing),
    ("%b %d, %Y", Missing::Nothing),
    ("%d %B %Y", Missing::Nothing),
    ("%d %b %Y", Missing::Nothing),
    ("%b'%y", Missing::Day),
    ("%B'%y", Missing::Day),
    ("%m.%Y", Missing::Day),
    ("%Y.%m", Missing::Day),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateToken {
    Date(NaiveDate),
    /// "Present", "current role" and friends.
    Present,
    /// An explicit no-date marker, or text no known format accepts.
    Unknown,
}

impl DateToken {
    /// Resolves `Present` against `today`.
    pub fn resolve(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateToken::Date(d) => Some(d),
            DateToken::Present => Some(today),
            DateToken::Unknown => None,
        }
    }
}

pub fn parse_date_token(raw: &str) -> DateToken {
    let trimmed = raw.trim();
    let lower = trimmed.to_lowercase();

    if PRESENT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return DateToken::Present;
    }
    if trimmed.is_empty() || UNKNOWN_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return DateToken::Unknown;
    }

    for (fmt, missing) in FORMATS {
        if let Some(date) = parse_with(trimmed, fmt, *missing) {
            return DateToken::Date(date);
        }
    }

    if trimmed.contains('\'') || trimmed.contains('\u{2019}') {
        let cleaned: String = trimmed
            .chars()
            .filter(|c| *c != '\'' && *c != '\u{2019}')
            .collect();
        if let Some(date) = parse_with(&cleaned, "%b%y", Missing::Day) {
            return DateToken::Date(date);
        }
    }

    debug!("Could not parse date: {trimmed}");
    DateToken::Unknown
}

fn parse_with(text: &str, fmt: &str, missing: Missing) -> Option<NaiveDate> {
    let parsed = match missing {
        Missing::Nothing => NaiveDate::parse_from_str(text, fmt),
        Missing::Day => NaiveDate::parse_from_str(&format!("{text} 1"), &format!("{fmt} %d")),
        Missing::MonthAndDay => {
            NaiveDate::parse_from_str(&format!("{text} 1 1"), &format!("{fmt} %m %d"))
        }
    };
    parsed.ok()
}
