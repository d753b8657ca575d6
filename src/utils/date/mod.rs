// Date utility functions

use chrono::{DateTime, Datelike, Duration, NaiveDate, Weekday};
use chrono_tz::Tz;

pub fn is_same_day(date1: &DateTime<Tz>, date2: &DateTime<Tz>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// First day of the week containing `date`, for the given week start.
pub fn week_start(date: NaiveDate, first_weekday: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7
        - first_weekday.num_days_from_monday())
        % 7;
    date - Duration::days(i64::from(offset))
}

/// The seven days of the week containing `date`.
pub fn week_days(date: NaiveDate, first_weekday: Weekday) -> Vec<NaiveDate> {
    let start = week_start(date, first_weekday);
    (0..7).map(|day| start + Duration::days(day)).collect()
}

/// Every day of the month containing `date`, in order.
pub fn month_days(date: NaiveDate) -> Vec<NaiveDate> {
    let first = date.with_day(1).unwrap();
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
    .unwrap();

    let mut days = Vec::new();
    let mut day = first;
    while day < next_month {
        days.push(day);
        day = day + Duration::days(1);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Europe::Amsterdam;
    use test_case::test_case;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_same_day() {
        let morning = Amsterdam.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let evening = Amsterdam.with_ymd_and_hms(2024, 3, 1, 22, 0, 0).unwrap();
        let tomorrow = Amsterdam.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap();

        assert!(is_same_day(&morning, &evening));
        assert!(!is_same_day(&morning, &tomorrow));
    }

    #[test_case(Weekday::Mon, 4 ; "monday week start")]
    #[test_case(Weekday::Sun, 3 ; "sunday week start")]
    #[test_case(Weekday::Sat, 2 ; "saturday week start")]
    fn test_week_start(first_weekday: Weekday, expected_day: u32) {
        // 2024-03-06 is a Wednesday
        let start = week_start(day(2024, 3, 6), first_weekday);
        assert_eq!(start, day(2024, 3, expected_day));
    }

    #[test]
    fn test_week_start_on_the_first_weekday_itself() {
        assert_eq!(week_start(day(2024, 3, 4), Weekday::Mon), day(2024, 3, 4));
    }

    #[test]
    fn test_week_days_crosses_month_boundary() {
        let week = week_days(day(2024, 2, 29), Weekday::Mon);
        assert_eq!(week.first(), Some(&day(2024, 2, 26)));
        assert_eq!(week.last(), Some(&day(2024, 3, 3)));
        assert_eq!(week.len(), 7);
    }

    #[test_case(2024, 1, 31 ; "january")]
    #[test_case(2024, 2, 29 ; "leap february")]
    #[test_case(2025, 2, 28 ; "regular february")]
    #[test_case(2024, 4, 30 ; "april")]
    #[test_case(2024, 12, 31 ; "december")]
    fn test_month_days_length(year: i32, month: u32, expected: usize) {
        let days = month_days(day(year, month, 15));
        assert_eq!(days.len(), expected);
        assert_eq!(days.first(), Some(&day(year, month, 1)));
        assert_eq!(days.last().map(|d| d.day()), Some(expected as u32));
    }
}
