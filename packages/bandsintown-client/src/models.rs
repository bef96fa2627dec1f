//! Bandsintown API response models

use serde::{Deserialize, Deserializer, Serialize};

use crate::timestamp::Timestamp;

/// An artist as returned inside artist info and event payloads
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artist {
    /// Artist name (also the lookup key for name-based queries)
    pub name: String,
    /// URL to the Bandsintown artist page
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// MusicBrainz ID, empty when Bandsintown has none
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mbid: String,
}

impl Artist {
    /// Whether a MusicBrainz ID is known for this artist
    pub fn has_mbid(&self) -> bool {
        !self.mbid.is_empty()
    }
}

/// Artist details plus the number of announced upcoming events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistInfo {
    /// Artist fields sit at the top level of the payload
    #[serde(flatten)]
    pub artist: Artist,
    /// Number of upcoming events
    pub upcoming_events_count: u32,
}

/// A venue hosting an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Venue {
    /// `(latitude, longitude)` pair
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// A scheduled event at a venue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    /// URL to the Bandsintown event page
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// Start time
    #[serde(default)]
    pub datetime: Timestamp,
    /// Ticket purchase URL
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ticket_url: String,
    /// Performing artists, in billing order
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub venue: Venue,
    /// Free-form availability, e.g. "available"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ticket_status: String,
    /// When tickets go on sale; unset until announced
    #[serde(default)]
    pub on_sale_datetime: Timestamp,
}

impl Event {
    /// Whether an on-sale date has been announced
    pub fn has_on_sale_date(&self) -> bool {
        self.on_sale_datetime.is_set()
    }

    /// Whether the given artist (by exact name) is on the bill
    pub fn features(&self, artist_name: &str) -> bool {
        self.artists.iter().any(|a| a.name == artist_name)
    }
}

/// Treat `null` strings the same as missing ones
///
/// Every string field except an artist's name goes through this.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
