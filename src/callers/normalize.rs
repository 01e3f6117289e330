//! Reshaping of wire records into store records.
//!
//! `normalize` is pure: it performs no I/O and touches no state, so a failure
//! here can abort a fetch before anything is committed.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

use super::raw::RawCaller;
use super::record::RecentCaller;

/// Separator used when joining result tokens.
const RESULTS_SEPARATOR: &str = ", ";

/// Long-form calendar date, e.g. `Mon May 01 2023`.
const CALENDAR_DATE_FORMAT: &str = "%a %b %d %Y";

/// Timestamps carrying an explicit offset that RFC 3339 parsing rejects,
/// such as `2023-05-01T10:00:00.000000+0000`.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Timestamps without an offset. Interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Errors raised while reshaping a single caller record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("unparseable date '{value}'")]
    InvalidDate { value: String },
}

/// Convert a wire record into a store record.
///
/// - `results` is reversed and joined with `", "`
/// - `date` is parsed and reformatted at day precision (UTC)
/// - `caller_id` becomes `callerId` on the way out
/// - every other field is passed through unchanged
///
/// `caller_id`, `date` and `results` are required; `contactId` and `input`
/// default to empty strings when absent.
pub fn normalize(raw: RawCaller) -> Result<RecentCaller, NormalizeError> {
    let caller_id = raw
        .caller_id
        .ok_or(NormalizeError::MissingField { field: "caller_id" })?;
    let date = raw.date.ok_or(NormalizeError::MissingField { field: "date" })?;
    let mut results = raw
        .results
        .ok_or(NormalizeError::MissingField { field: "results" })?;

    let parsed = parse_date(&date).ok_or(NormalizeError::InvalidDate { value: date })?;
    results.reverse();

    Ok(RecentCaller {
        caller_id,
        contact_id: raw.contact_id.unwrap_or_default(),
        date: format_calendar_date(&parsed),
        input: raw.input.unwrap_or_default(),
        results: results.join(RESULTS_SEPARATOR),
        extra: raw.extra,
    })
}

/// Parse a date/time string the way a browser's `Date` constructor would
/// accept it, normalized to UTC.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Render a timestamp as a calendar date, discarding the time of day.
pub fn format_calendar_date(dt: &DateTime<Utc>) -> String {
    dt.format(CALENDAR_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    fn raw(date: &str, results: &[&str]) -> RawCaller {
        RawCaller {
            caller_id: Some("+15551234567".into()),
            contact_id: Some("c-1".into()),
            date: Some(date.into()),
            input: Some("18005551234".into()),
            results: Some(results.iter().map(|s| s.to_string()).collect()),
            extra: Map::new(),
        }
    }

    #[test]
    fn results_are_reversed_and_joined() {
        let caller = normalize(raw("2023-05-01T10:00:00Z", &["a", "b", "c"])).unwrap();
        assert_eq!(caller.results, "c, b, a");
    }

    #[test]
    fn empty_results_join_to_empty_string() {
        let caller = normalize(raw("2023-05-01T10:00:00Z", &[])).unwrap();
        assert_eq!(caller.results, "");
    }

    #[test]
    fn date_keeps_day_precision_only() {
        let caller = normalize(raw("2023-05-01T10:00:00Z", &["a"])).unwrap();
        assert_eq!(caller.date, "Mon May 01 2023");
    }

    #[test]
    fn backend_timestamp_with_compact_offset_parses() {
        let dt = parse_date("2023-05-01T23:30:00.123456+0000").unwrap();
        assert_eq!(format_calendar_date(&dt), "Mon May 01 2023");
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        let dt = parse_date("2023-05-01T22:00:00-05:00").unwrap();
        assert_eq!(format_calendar_date(&dt), "Tue May 02 2023");
    }

    #[test]
    fn naive_and_date_only_values_parse() {
        assert!(parse_date("2023-05-01 10:00:00").is_some());
        assert!(parse_date("2023-05-01T10:00").is_some());
        assert_eq!(
            format_calendar_date(&parse_date("2023-05-01").unwrap()),
            "Mon May 01 2023"
        );
        assert!(parse_date("Mon, 01 May 2023 10:00:00 +0000").is_some());
    }

    #[test]
    fn garbage_date_is_rejected() {
        let err = normalize(raw("yesterday", &["a"])).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::InvalidDate {
                value: "yesterday".into()
            }
        );
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let mut no_date = raw("2023-05-01", &["a"]);
        no_date.date = None;
        assert_eq!(
            normalize(no_date).unwrap_err(),
            NormalizeError::MissingField { field: "date" }
        );

        let mut no_caller = raw("2023-05-01", &["a"]);
        no_caller.caller_id = None;
        assert_eq!(
            normalize(no_caller).unwrap_err(),
            NormalizeError::MissingField { field: "caller_id" }
        );
    }

    #[test]
    fn optional_fields_default_and_extras_pass_through() {
        let mut r = raw("2023-05-01", &["a"]);
        r.contact_id = None;
        r.input = None;
        r.extra.insert("region".into(), Value::from("us-east-1"));

        let caller = normalize(r).unwrap();
        assert_eq!(caller.contact_id, "");
        assert_eq!(caller.input, "");
        assert_eq!(caller.extra.get("region"), Some(&Value::from("us-east-1")));
    }
}
