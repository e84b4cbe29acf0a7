//! Wire codec for Trakt timestamps.
//!
//! # Design
//! Trakt emits ISO 8601 date-times with milliseconds, rooted in UTC, for most
//! fields (`"2013-08-01T10:00:00.000+0000"`, with `Z` and `+00:00` as
//! alternate offset spellings), but bare calendar dates for a few (movie
//! release dates, birthdays). Callers cannot know which form a given field
//! uses, so [`parse_timestamp`] tries the full pattern first and falls back
//! to the bare date. [`format_timestamp`] always produces the full pattern in
//! UTC with exactly three fractional digits, which is the only form the API
//! accepts on writes.
//!
//! A parse failure is a [`DecodeError`], never a silent `None`: swallowing a
//! malformed date would hide contract drift on the remote side until some
//! much later null check.
//!
//! Everything here is a pure function over its arguments. There is no shared
//! formatter instance, so concurrent decodes of independent response bodies
//! need no synchronization.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Full date-time pattern: `2013-08-01T10:00:00.000+0000`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Bare-date pattern: `2014-06-15`. Decodes to midnight UTC.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A wire value did not match the pattern or token table for its field.
///
/// Carries the identity of what was being decoded (`"timestamp"`,
/// `"privacy"`, `"status"`, `"rating"`) and the offending raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub what: &'static str,
    pub raw: String,
}

impl DecodeError {
    pub fn new(what: &'static str, raw: impl Into<String>) -> Self {
        Self {
            what,
            raw: raw.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: unrecognized wire value {:?}", self.what, self.raw)
    }
}

impl std::error::Error for DecodeError {}

/// Decode a Trakt timestamp from its wire string.
///
/// Accepts the full date-time form in any of its observed offset spellings
/// (`+0000`, `+00:00`, `Z`), or a bare `YYYY-MM-DD` date, which decodes to
/// midnight UTC. Anything else is a [`DecodeError`] carrying the raw input.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DecodeError> {
    // RFC 3339 covers the `Z` and colon-offset spellings; the explicit
    // pattern covers the RFC 822 `+0000` offset the API historically emits.
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(DecodeError::new("timestamp", raw))
}

/// Encode a timestamp in the only form the API accepts on writes:
/// `2013-08-01T10:00:00.000+0000` — UTC, exactly three fractional digits,
/// RFC 822 offset.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Field adapters for `#[serde(with = "crate::codec::timestamps")]`.
///
/// The serde equivalent of registering a type adapter once: every timestamp
/// field in the entity graph names this module (or `timestamps::option`), so
/// the same two parse rules and the single format rule apply uniformly to
/// every request and response body.
pub mod timestamps {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{format_timestamp, parse_timestamp};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(de::Error::custom)
    }

    /// Adapters for `Option<DateTime<Utc>>` fields. Pair with
    /// `#[serde(default)]` so an absent field decodes as `None`.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        use crate::codec::{format_timestamp, parse_timestamp};

        pub fn serialize<S>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(value) => serializer.serialize_some(&format_timestamp(value)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => parse_timestamp(&raw).map(Some).map_err(de::Error::custom),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .unwrap()
            + chrono::Duration::milliseconds(i64::from(milli))
    }

    #[test]
    fn parses_full_timestamp_with_rfc822_offset() {
        let parsed = parse_timestamp("2013-08-01T10:00:00.000+0000").unwrap();
        assert_eq!(parsed, instant(2013, 8, 1, 10, 0, 0, 0));
    }

    #[test]
    fn parses_full_timestamp_with_millis() {
        let parsed = parse_timestamp("2014-06-15T12:30:00.123+0000").unwrap();
        assert_eq!(parsed, instant(2014, 6, 15, 12, 30, 0, 123));
    }

    #[test]
    fn parses_zulu_and_colon_offset_spellings() {
        let zulu = parse_timestamp("2014-09-01T09:10:11.000Z").unwrap();
        let colon = parse_timestamp("2014-09-01T09:10:11.000+00:00").unwrap();
        assert_eq!(zulu, instant(2014, 9, 1, 9, 10, 11, 0));
        assert_eq!(colon, zulu);
    }

    #[test]
    fn non_utc_offset_normalizes_to_the_same_instant() {
        let parsed = parse_timestamp("2014-06-15T04:00:00.000-0800").unwrap();
        assert_eq!(parsed, instant(2014, 6, 15, 12, 0, 0, 0));
    }

    #[test]
    fn bare_date_decodes_to_midnight_utc() {
        let parsed = parse_timestamp("2014-06-15").unwrap();
        assert_eq!(parsed, instant(2014, 6, 15, 0, 0, 0, 0));
    }

    #[test]
    fn garbage_is_an_error_not_a_default() {
        let err = parse_timestamp("not-a-date").unwrap_err();
        assert_eq!(err.what, "timestamp");
        assert_eq!(err.raw, "not-a-date");
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn out_of_range_date_is_rejected() {
        assert!(parse_timestamp("2014-13-40").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn formats_in_utc_with_exactly_three_fractional_digits() {
        let value = instant(2013, 8, 1, 10, 0, 0, 0);
        assert_eq!(format_timestamp(&value), "2013-08-01T10:00:00.000+0000");

        let with_millis = instant(2014, 6, 15, 12, 30, 0, 123);
        assert_eq!(
            format_timestamp(&with_millis),
            "2014-06-15T12:30:00.123+0000"
        );
    }

    #[test]
    fn round_trips_at_millisecond_precision() {
        let values = [
            instant(1970, 1, 1, 0, 0, 0, 0),
            instant(2013, 8, 1, 10, 0, 0, 1),
            instant(2014, 6, 15, 12, 30, 0, 123),
            instant(2038, 1, 19, 3, 14, 7, 999),
        ];
        for value in values {
            let encoded = format_timestamp(&value);
            let decoded = parse_timestamp(&encoded).unwrap();
            assert_eq!(decoded, value, "round trip of {encoded}");
        }
    }

    #[test]
    fn date_only_input_loses_time_of_day_but_reencodes_stably() {
        let decoded = parse_timestamp("2014-06-15").unwrap();
        let encoded = format_timestamp(&decoded);
        assert_eq!(encoded, "2014-06-15T00:00:00.000+0000");
        assert_eq!(parse_timestamp(&encoded).unwrap(), decoded);
    }

    #[test]
    fn concurrent_decodes_match_sequential_decodes() {
        let payloads: Vec<String> = (0..64)
            .map(|i| {
                format!(
                    "2014-09-{:02}T{:02}:{:02}:{:02}.{:03}+0000",
                    (i % 28) + 1,
                    i % 24,
                    i % 60,
                    (i * 7) % 60,
                    i * 13 % 1000
                )
            })
            .collect();

        let sequential: Vec<DateTime<Utc>> = payloads
            .iter()
            .map(|raw| parse_timestamp(raw).unwrap())
            .collect();

        let handles: Vec<_> = payloads
            .iter()
            .map(|raw| {
                let raw = raw.clone();
                std::thread::spawn(move || parse_timestamp(&raw).unwrap())
            })
            .collect();
        let concurrent: Vec<DateTime<Utc>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(concurrent, sequential);
    }

    #[test]
    fn nested_collection_body_decodes_through_the_field_adapters() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct Entry {
            #[serde(with = "crate::codec::timestamps")]
            collected_at: DateTime<Utc>,
        }

        #[derive(Deserialize)]
        struct Body {
            username: String,
            collection: Vec<Entry>,
        }

        let body: Body = serde_json::from_str(
            r#"{"username":"sean","collection":[{"collected_at":"2013-08-01T10:00:00.000+0000"}]}"#,
        )
        .unwrap();

        assert_eq!(body.username, "sean");
        assert_eq!(body.collection.len(), 1);
        assert_eq!(body.collection[0].collected_at, instant(2013, 8, 1, 10, 0, 0, 0));
    }

    #[test]
    fn malformed_date_fails_the_whole_body_decode() {
        use serde::Deserialize;

        #[derive(Debug, Deserialize)]
        struct Entry {
            #[serde(default, with = "crate::codec::timestamps::option")]
            collected_at: Option<DateTime<Utc>>,
        }

        let err = serde_json::from_str::<Entry>(r#"{"collected_at":"not-a-date"}"#).unwrap_err();
        assert!(err.to_string().contains("not-a-date"));

        // Absent and null are fine; only a malformed value is an error.
        let absent: Entry = serde_json::from_str("{}").unwrap();
        assert!(absent.collected_at.is_none());
        let null: Entry = serde_json::from_str(r#"{"collected_at":null}"#).unwrap();
        assert!(null.collected_at.is_none());
    }
}
