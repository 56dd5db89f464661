use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// Parse a `YYYY-MM-DD` string as typed into the UI or passed on the command line.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), TimeUtils::STANDARD_TIME_FORMAT)
        .with_context(|| format!("'{}' is not a date in YYYY-MM-DD form", text.trim()))
}

/// UTC midnight of `date` as Unix seconds (the provider's `period1`/`period2` unit).
pub fn date_to_epoch_sec(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}

pub fn date_to_epoch_ms(date: NaiveDate) -> i64 {
    date_to_epoch_sec(date) * TimeUtils::MS_IN_S
}

pub fn epoch_ms_to_date(epoch_ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(epoch_ms).map(|dt| dt.date_naive())
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    match epoch_ms_to_date(epoch_ms) {
        Some(date) => date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Chart x coordinate: whole days since the epoch, so egui_plot grid steps land on days.
pub fn epoch_ms_to_days(epoch_ms: i64) -> f64 {
    epoch_ms as f64 / TimeUtils::MS_IN_D as f64
}

pub fn days_to_utc(days: f64) -> String {
    epoch_ms_to_utc((days * TimeUtils::MS_IN_D as f64).round() as i64)
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid_and_trimmed() {
        let date = parse_date(" 2023-01-01 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("2023/01/01").is_err());
        assert!(parse_date("01-01-2023").is_err());
        assert!(parse_date("2023-02-30").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_epoch_conversions() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(date_to_epoch_sec(date), 1_704_067_200);
        assert_eq!(date_to_epoch_ms(date), 1_704_067_200_000);
        assert_eq!(epoch_ms_to_utc(1_704_067_200_000), "2024-01-01");
        assert_eq!(epoch_ms_to_days(1_704_067_200_000), 19_723.0);
        assert_eq!(days_to_utc(19_723.0), "2024-01-01");
    }

    #[test]
    fn test_leap_day_is_one_day_apart() {
        let feb28 = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let feb29 = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(date_to_epoch_sec(feb29) - date_to_epoch_sec(feb28), 86_400);
    }
}
