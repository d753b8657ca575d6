// Quick date formatting helpers for logging and debugging

use chrono::DateTime;
use chrono_tz::Tz;

/// Format a date as `yyyy-mm-dd`, or `"null"` when absent.
pub fn quick_format_date(value: Option<&DateTime<Tz>>) -> String {
    match value {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => "null".to_string(),
    }
}

/// Format a list of dates as `"Nx [d1,d2,...]"`.
pub fn quick_format_dates(values: &[DateTime<Tz>]) -> String {
    let mut formatted = format!("{}x [", values.len());
    for date in values {
        if !formatted.ends_with('[') {
            formatted.push(',');
        }
        formatted.push_str(&quick_format_date(Some(date)));
    }
    formatted.push(']');
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Europe::Amsterdam;

    #[test]
    fn test_quick_format_date() {
        let date = Amsterdam.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(quick_format_date(Some(&date)), "2024-03-01");
        assert_eq!(quick_format_date(None), "null");
    }

    #[test]
    fn test_quick_format_dates() {
        let first = Amsterdam.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let second = Amsterdam.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();

        assert_eq!(quick_format_dates(&[]), "0x []");
        assert_eq!(
            quick_format_dates(&[first, second]),
            "2x [2024-03-01,2024-03-02]"
        );
    }
}
