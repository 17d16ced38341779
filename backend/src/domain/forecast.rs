//! Daily aggregation of 3-hour forecast samples.
//!
//! The provider returns one sample every three hours; listings want one
//! summary per calendar day. Grouping is by the UTC date of each sample's
//! timestamp. Min/max cover only samples carrying a numeric temperature, so
//! a day without any reports absent bounds rather than zero. Icon and
//! description come from the first sample of the day — not a mode and not
//! the midday sample; downstream consumers rely on that exact behaviour.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::domain::DateRange;

/// One decoded 3-hour-step observation from the forecast provider.
///
/// `temperature` is `None` when the provider sent a non-numeric value; such
/// samples still anchor a day's icon/description but never contribute to
/// min/max.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    /// Unix timestamp (seconds) of the observation.
    pub timestamp: i64,
    /// Temperature in °C, when numeric.
    pub temperature: Option<f64>,
    /// Provider icon code.
    pub icon: Option<String>,
    /// Short weather description.
    pub description: Option<String>,
}

/// One aggregated forecast day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    /// Calendar date (UTC) the samples were grouped under.
    pub day: NaiveDate,
    /// Lowest numeric temperature of the day, absent without numeric samples.
    pub min: Option<f64>,
    /// Highest numeric temperature of the day, absent without numeric samples.
    pub max: Option<f64>,
    /// Icon of the day's first sample.
    pub icon: Option<String>,
    /// Description of the day's first sample.
    pub description: Option<String>,
}

/// Forecast response for one resolved location.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    /// Canonical `"City, Country"` name.
    pub location_name: String,
    /// Latitude in WGS84.
    pub lat: f64,
    /// Longitude in WGS84.
    pub lon: f64,
    /// Days intersecting the requested range, ascending.
    pub days: Vec<ForecastDay>,
}

struct DayBucket {
    min: Option<f64>,
    max: Option<f64>,
    icon: Option<String>,
    description: Option<String>,
}

/// Collapse raw samples into one [`ForecastDay`] per calendar date inside
/// `range`, ascending by date.
///
/// Samples whose timestamp cannot be represented as a UTC datetime are
/// skipped entirely.
pub fn aggregate_daily(samples: &[ForecastSample], range: &DateRange) -> Vec<ForecastDay> {
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for sample in samples {
        let Some(timestamp) = DateTime::from_timestamp(sample.timestamp, 0) else {
            continue;
        };
        let day = timestamp.date_naive();

        let bucket = buckets.entry(day).or_insert_with(|| DayBucket {
            min: None,
            max: None,
            // First sample of the day fixes icon and description, present
            // or not.
            icon: sample.icon.clone(),
            description: sample.description.clone(),
        });

        if let Some(temp) = sample.temperature {
            bucket.min = Some(bucket.min.map_or(temp, |current| current.min(temp)));
            bucket.max = Some(bucket.max.map_or(temp, |current| current.max(temp)));
        }
    }

    buckets
        .into_iter()
        .filter(|(day, _)| range.contains(*day))
        .map(|(day, bucket)| ForecastDay {
            day,
            min: bucket.min,
            max: bucket.max,
            icon: bucket.icon,
            description: bucket.description,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid test date")
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(date(start), date(end)).expect("valid test range")
    }

    /// Seconds for midnight UTC of the given day plus `hours`.
    fn at(day: &str, hours: i64) -> i64 {
        date(day)
            .and_hms_opt(0, 0, 0)
            .expect("midnight exists")
            .and_utc()
            .timestamp()
            + hours * 3600
    }

    fn sample(ts: i64, temp: Option<f64>, icon: &str, desc: &str) -> ForecastSample {
        ForecastSample {
            timestamp: ts,
            temperature: temp,
            icon: Some(icon.to_owned()),
            description: Some(desc.to_owned()),
        }
    }

    fn two_day_samples() -> Vec<ForecastSample> {
        vec![
            sample(at("2026-02-16", 0), Some(4.0), "04d", "overcast clouds"),
            sample(at("2026-02-16", 3), Some(2.5), "10d", "light rain"),
            sample(at("2026-02-16", 12), Some(7.5), "01d", "clear sky"),
            sample(at("2026-02-17", 0), Some(1.0), "13d", "snow"),
            sample(at("2026-02-17", 9), Some(3.0), "13d", "snow"),
        ]
    }

    #[test]
    fn groups_samples_by_utc_calendar_date() {
        let days = aggregate_daily(&two_day_samples(), &range("2026-02-16", "2026-02-17"));
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day, date("2026-02-16"));
        assert_eq!(days[1].day, date("2026-02-17"));
    }

    #[test]
    fn min_max_cover_all_numeric_samples_of_the_day() {
        let days = aggregate_daily(&two_day_samples(), &range("2026-02-16", "2026-02-17"));
        assert_eq!(days[0].min, Some(2.5));
        assert_eq!(days[0].max, Some(7.5));
        assert_eq!(days[1].min, Some(1.0));
        assert_eq!(days[1].max, Some(3.0));
    }

    #[test]
    fn icon_and_description_come_from_the_first_sample() {
        let days = aggregate_daily(&two_day_samples(), &range("2026-02-16", "2026-02-17"));
        assert_eq!(days[0].icon.as_deref(), Some("04d"));
        assert_eq!(days[0].description.as_deref(), Some("overcast clouds"));
    }

    #[test]
    fn day_without_numeric_temperatures_reports_absent_bounds() {
        let samples = vec![
            ForecastSample {
                timestamp: at("2026-02-16", 0),
                temperature: None,
                icon: Some("50d".to_owned()),
                description: Some("mist".to_owned()),
            },
            ForecastSample {
                timestamp: at("2026-02-16", 3),
                temperature: None,
                icon: Some("50n".to_owned()),
                description: Some("fog".to_owned()),
            },
        ];
        let days = aggregate_daily(&samples, &range("2026-02-16", "2026-02-16"));
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].min, None);
        assert_eq!(days[0].max, None);
        assert_eq!(days[0].icon.as_deref(), Some("50d"));
    }

    #[test]
    fn non_numeric_samples_do_not_disturb_min_max() {
        let samples = vec![
            sample(at("2026-02-16", 0), Some(5.0), "01d", "clear sky"),
            ForecastSample {
                timestamp: at("2026-02-16", 3),
                temperature: None,
                icon: Some("01d".to_owned()),
                description: Some("clear sky".to_owned()),
            },
            sample(at("2026-02-16", 6), Some(9.0), "01d", "clear sky"),
        ];
        let days = aggregate_daily(&samples, &range("2026-02-16", "2026-02-16"));
        assert_eq!(days[0].min, Some(5.0));
        assert_eq!(days[0].max, Some(9.0));
    }

    #[rstest]
    #[case::full_span("2026-02-16", "2026-02-17", 2)]
    #[case::first_day_only("2026-02-16", "2026-02-16", 1)]
    #[case::last_day_only("2026-02-17", "2026-02-17", 1)]
    #[case::disjoint("2026-02-20", "2026-02-25", 0)]
    fn retains_only_days_inside_the_inclusive_range(
        #[case] start: &str,
        #[case] end: &str,
        #[case] expected: usize,
    ) {
        let days = aggregate_daily(&two_day_samples(), &range(start, end));
        assert_eq!(days.len(), expected);
    }

    #[test]
    fn days_are_ordered_ascending_even_from_unordered_samples() {
        let mut samples = two_day_samples();
        samples.reverse();
        let days = aggregate_daily(&samples, &range("2026-02-16", "2026-02-17"));
        assert_eq!(days[0].day, date("2026-02-16"));
        assert_eq!(days[1].day, date("2026-02-17"));
        // Reversed input changes which sample is "first" for each day.
        assert_eq!(days[0].icon.as_deref(), Some("01d"));
    }

    #[test]
    fn unrepresentable_timestamps_are_skipped() {
        let samples = vec![
            sample(i64::MAX, Some(3.0), "01d", "clear sky"),
            sample(at("2026-02-16", 0), Some(6.0), "02d", "few clouds"),
        ];
        let days = aggregate_daily(&samples, &range("2026-02-16", "2026-02-16"));
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].max, Some(6.0));
    }

    #[test]
    fn day_serialises_as_plain_date_string() {
        let days = aggregate_daily(&two_day_samples(), &range("2026-02-16", "2026-02-16"));
        let json = serde_json::to_value(&days).expect("days serialise");
        assert_eq!(json[0]["day"], serde_json::json!("2026-02-16"));
    }
}
