//! Optional event timestamps
//!
//! Bandsintown sends event times as local wall-clock strings without an
//! offset (`2016-04-05T19:00:00`) and uses `null` for times that have not
//! been announced yet. [`Timestamp`] keeps that distinction explicit so an
//! unannounced on-sale date can never be mistaken for a real one.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Wire format used by the API; fractional seconds are optional
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A point in time that may be unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timestamp {
    /// No time was provided (`null`, missing, or empty)
    #[default]
    Unset,
    /// A concrete instant, interpreted as UTC
    At(DateTime<Utc>),
}

impl Timestamp {
    /// The canonical zero value
    pub const UNSET: Timestamp = Timestamp::Unset;

    /// Parse a timestamp as sent by the API
    ///
    /// Accepts offset-less `YYYY-MM-DDTHH:MM:SS[.fraction]` (read as UTC) and
    /// RFC 3339 strings with an explicit offset. Blank input yields
    /// [`Timestamp::Unset`].
    pub fn parse(input: &str) -> Result<Self, chrono::ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Timestamp::Unset);
        }

        if let Ok(with_offset) = DateTime::parse_from_rfc3339(input) {
            return Ok(Timestamp::At(with_offset.with_timezone(&Utc)));
        }

        let naive = NaiveDateTime::parse_from_str(input, WIRE_FORMAT)?;
        Ok(Timestamp::At(Utc.from_utc_datetime(&naive)))
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Timestamp::At(_))
    }

    pub fn is_unset(&self) -> bool {
        !self.is_set()
    }

    /// The instant, if one was provided
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::At(dt) => Some(*dt),
            Timestamp::Unset => None,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::At(dt)
    }
}

impl From<Option<DateTime<Utc>>> for Timestamp {
    fn from(dt: Option<DateTime<Utc>>) -> Self {
        dt.map_or(Timestamp::Unset, Timestamp::At)
    }
}

impl From<Timestamp> for Option<DateTime<Utc>> {
    fn from(ts: Timestamp) -> Self {
        ts.as_datetime()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::At(dt) => write!(f, "{}", dt.format(WIRE_FORMAT)),
            Timestamp::Unset => write!(f, "unset"),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Timestamp::At(dt) => serializer.serialize_str(&dt.format(WIRE_FORMAT).to_string()),
            Timestamp::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => Timestamp::parse(&raw)
                .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e))),
            None => Ok(Timestamp::Unset),
        }
    }
}
