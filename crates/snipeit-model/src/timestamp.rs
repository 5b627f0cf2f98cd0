//! Snipe-IT timestamp codec.
//!
//! The API never sends a bare date-time string. Every timestamp field is an
//! object holding a machine-readable value and a display string:
//!
//! ```json
//! {"datetime": "2019-05-21 21:37:40", "formatted": "2019-05-21 21:37"}
//! ```
//!
//! Only `datetime` is parsed. It uses the fixed layout `YYYY-MM-DD HH:MM:SS`
//! with no offset and is interpreted as UTC. An empty `datetime` (or a JSON
//! `null` in place of the object) decodes to an unset [`Timestamp`].

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Layout of the `datetime` field.
const LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// A date-time decoded from the API's nested timestamp shape.
///
/// The default value is unset, which is what the API reports for dates that
/// do not apply (e.g. `deleted_at` on an asset that was never deleted).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    /// The decoded date-time, or `None` when unset.
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Whether the server reported no value for this field.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    /// Parse the `datetime` member of the wire object.
    pub(crate) fn parse(raw: &str) -> Result<Self, TimestampError> {
        if raw.is_empty() {
            return Ok(Self(None));
        }

        let format_error = |reason: String| TimestampError::Format {
            raw: raw.to_string(),
            reason,
        };

        check_shape(raw).map_err(|reason| format_error(reason.to_string()))?;
        NaiveDateTime::parse_from_str(raw, LAYOUT)
            .map(|naive| Self(Some(naive.and_utc())))
            .map_err(|e| format_error(e.to_string()))
    }

    /// Decode the full `{datetime, formatted}` wire object.
    pub(crate) fn from_value(value: Value) -> Result<Self, TimestampError> {
        let wire = WireTimestamp::deserialize(value)
            .map_err(|e| TimestampError::Malformed(e.to_string()))?;
        Self::parse(&wire.datetime)
    }
}

/// Check `raw` against the exact `YYYY-MM-DD HH:MM:SS` shape.
///
/// chrono alone accepts single-digit fields, missing or repeated separators,
/// a signed year and leap second `60`; none of these are valid here.
fn check_shape(raw: &str) -> Result<(), &'static str> {
    let bytes = raw.as_bytes();
    if bytes.len() != 19 {
        return Err("expected 19 characters");
    }
    for (i, &b) in bytes.iter().enumerate() {
        let ok = match i {
            4 | 7 => b == b'-',
            10 => b == b' ',
            13 | 16 => b == b':',
            _ => b.is_ascii_digit(),
        };
        if !ok {
            return Err("does not match YYYY-MM-DD HH:MM:SS");
        }
    }
    if bytes[17] > b'5' {
        return Err("second out of range");
    }
    Ok(())
}

impl From<Timestamp> for Option<DateTime<Utc>> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.format(LAYOUT)),
            None => Ok(()),
        }
    }
}

/// The literal JSON object exchanged with the API.
#[derive(Deserialize)]
struct WireTimestamp {
    datetime: String,
    // Display-only, never parsed.
    #[serde(rename = "formatted")]
    _formatted: String,
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None => Ok(Self::default()),
            Some(value) => Self::from_value(value).map_err(de::Error::custom),
        }
    }
}

/// Errors that can occur while decoding a timestamp.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TimestampError {
    /// `datetime` is present but does not follow `YYYY-MM-DD HH:MM:SS`
    #[error("invalid timestamp {raw:?}: {reason}")]
    Format {
        /// The offending `datetime` string
        raw: String,
        /// What did not match
        reason: String,
    },
    /// The value is not an object with string `datetime` and `formatted` fields
    #[error("malformed timestamp: {0}")]
    Malformed(String),
}
