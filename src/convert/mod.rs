// Conversion module
// Converts between zone-aware and wall-clock date-time representations

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Timelike, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Locale data needed to interpret a wall-clock value: the time zone it
/// should be anchored in, and the first day of the week for range queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionContext {
    pub tz: Tz,
    pub first_weekday: Weekday,
}

impl Default for ConversionContext {
    fn default() -> Self {
        Self {
            tz: Tz::UTC,
            first_weekday: Weekday::Mon,
        }
    }
}

impl ConversionContext {
    /// Create a context for the given time zone with a Monday week start.
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            first_weekday: Weekday::Mon,
        }
    }

    pub fn with_first_weekday(mut self, first_weekday: Weekday) -> Self {
        self.first_weekday = first_weekday;
        self
    }
}

/// Conversion failure. Wall-clock times skipped by a DST transition have no
/// zone-aware counterpart; they are rejected rather than shifted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("wall-clock time {naive} does not exist in time zone {zone}")]
    NonexistentLocalTime { naive: NaiveDateTime, zone: Tz },
}

/// Drop sub-second fields. The zone-aware representation keeps whole
/// seconds only, so mirrored values are compared at second granularity.
pub fn truncate_to_seconds(naive: NaiveDateTime) -> NaiveDateTime {
    naive.with_nanosecond(0).unwrap_or(naive)
}

/// Extract the wall-clock fields of a zone-aware value.
pub fn naive_from_zoned(zoned: &DateTime<Tz>) -> NaiveDateTime {
    truncate_to_seconds(zoned.naive_local())
}

/// Anchor a wall-clock value in the context's time zone.
///
/// Times that occur twice at a fall-back transition resolve to the earlier
/// instant. Times skipped by a spring-forward transition are an error; the
/// caller decides how to recover, nothing is clamped here.
pub fn zoned_from_naive(
    naive: NaiveDateTime,
    context: &ConversionContext,
) -> Result<DateTime<Tz>, ConvertError> {
    let naive = truncate_to_seconds(naive);
    match context.tz.from_local_datetime(&naive) {
        LocalResult::Single(zoned) => Ok(zoned),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(ConvertError::NonexistentLocalTime {
            naive,
            zone: context.tz,
        }),
    }
}
