// Test fixtures - reusable test data
// Provides consistent dates and zones across integration tests

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Mar 1, 2024 at midnight
    pub fn march_1_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Mar 2, 2024 at midnight
    pub fn march_2_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Skipped by the spring-forward transition in Europe/Amsterdam
    pub fn amsterdam_gap_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap()
    }
}

/// Sample zones for testing
pub mod zones {
    use super::*;

    pub fn amsterdam() -> Tz {
        chrono_tz::Europe::Amsterdam
    }

    pub fn new_york() -> Tz {
        chrono_tz::America::New_York
    }
}

/// Anchor an unambiguous wall-clock value in a zone.
pub fn zoned(naive: NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    tz.from_local_datetime(&naive).unwrap()
}
