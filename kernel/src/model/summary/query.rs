use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use derive_new::new;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date range requested by the caller, as raw `YYYY-MM-DD` strings.
/// An empty string means the side is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct SummaryQuery {
    pub start_date: String,
    pub end_date: String,
}

impl SummaryQuery {
    pub fn date_range(&self) -> DateRange {
        DateRange {
            start: DateBound::parse(&self.start_date),
            end: DateBound::parse(&self.end_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateBound {
    Unbounded,
    On(NaiveDate),
    /// A non-empty string that is not a `YYYY-MM-DD` date. It still acts as
    /// a bound, pinned to 0001-01-01T00:00:00Z: no lower limit in practice,
    /// and an upper limit that excludes every real booking.
    Malformed(String),
}

impl DateBound {
    /// Only the zero-padded `YYYY-MM-DD` shape is a date; chrono alone
    /// would also take `2024-1-5` or `+2024-01-05`.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Unbounded;
        }
        if !has_date_shape(raw) {
            return Self::Malformed(raw.to_string());
        }
        match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => Self::On(date),
            Err(_) => Self::Malformed(raw.to_string()),
        }
    }

    /// Midnight UTC of the bound's date, or `None` when open.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        let date = match self {
            Self::Unbounded => return None,
            Self::On(date) => *date,
            Self::Malformed(_) => zero_date(),
        };
        Some(date.and_time(NaiveTime::MIN).and_utc())
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateBound,
    pub end: DateBound,
}

impl DateRange {
    pub fn is_unbounded(&self) -> bool {
        self.start == DateBound::Unbounded && self.end == DateBound::Unbounded
    }

    /// Inclusive on both sides, compared on the booking-date instant.
    pub fn contains(&self, booking_date: &DateTime<FixedOffset>) -> bool {
        let at = booking_date.with_timezone(&Utc);
        if let Some(start) = self.start.instant() {
            if at < start {
                return false;
            }
        }
        if let Some(end) = self.end.instant() {
            if at > end {
                return false;
            }
        }
        true
    }
}
