//! Shared validation helpers for inbound HTTP adapters.
//!
//! All helpers fail with [`Error::invalid_request`] so validation problems
//! are reported before any port is called.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::domain::Error;

/// Newtype wrapper for wire-level field names to keep messages consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Require a present, non-blank text field and return it trimmed.
pub(crate) fn require_text(value: Option<&str>, field: FieldName) -> Result<&str, Error> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| Error::invalid_request(format!("{} is required", field.as_str())))
}

/// Parse a `YYYY-MM-DD` date-only value.
pub(crate) fn parse_date(value: &str, field: FieldName) -> Result<NaiveDate, Error> {
    value.trim().parse().map_err(|_| {
        Error::invalid_request(format!("{} must be a YYYY-MM-DD date", field.as_str()))
    })
}

/// Deserialiser distinguishing an absent field from an explicit `null`.
///
/// Mark the field `#[serde(default, deserialize_with = "double_option")]`:
/// absent stays `None`, `null` becomes `Some(None)`, a value becomes
/// `Some(Some(value))`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn require_text_trims_and_accepts_content() {
        let text = require_text(Some("  Tokyo "), FieldName::new("location")).expect("accepted");
        assert_eq!(text, "Tokyo");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn require_text_rejects_missing_or_blank(#[case] value: Option<&str>) {
        let err = require_text(value, FieldName::new("location")).expect_err("rejected");
        assert_eq!(err.message(), "location is required");
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date("2026-02-16", FieldName::new("startDate")).expect("parsed");
        assert_eq!(date.to_string(), "2026-02-16");
    }

    #[rstest]
    #[case("yesterday")]
    #[case("2026-13-01")]
    #[case("16/02/2026")]
    fn parse_date_rejects_other_shapes(#[case] value: &str) {
        let err = parse_date(value, FieldName::new("startDate")).expect_err("rejected");
        assert_eq!(err.message(), "startDate must be a YYYY-MM-DD date");
    }

    #[test]
    fn double_option_distinguishes_null_from_absent() {
        #[derive(Debug, Deserialize)]
        struct Body {
            #[serde(default, deserialize_with = "double_option")]
            advice: Option<Option<String>>,
        }

        let absent: Body = serde_json::from_str("{}").expect("parses");
        assert_eq!(absent.advice, None);

        let null: Body = serde_json::from_str(r#"{"advice": null}"#).expect("parses");
        assert_eq!(null.advice, Some(None));

        let set: Body = serde_json::from_str(r#"{"advice": "pack"}"#).expect("parses");
        assert_eq!(set.advice, Some(Some("pack".to_owned())));
    }
}
