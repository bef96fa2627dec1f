//! JSON fixtures shaped like Bandsintown API payloads

use serde_json::json;

/// Fixture for artist objects (top level of artist info, or inside events)
#[derive(Debug, Clone)]
pub struct ArtistFixture {
    pub name: String,
    pub url: String,
    pub mbid: Option<String>,
}

impl ArtistFixture {
    /// Artist without a MusicBrainz ID
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            url: format!("http://www.bandsintown.com/{}", name),
            mbid: None,
        }
    }

    pub fn with_mbid(name: &str, mbid: &str) -> Self {
        let mut artist = Self::new(name);
        artist.mbid = Some(mbid.to_string());
        artist
    }

    pub fn sixty_five_days() -> Self {
        Self::with_mbid("65daysofstatic", "0cd12ab3-9628-45ef-a97b-ff18624f14a0")
    }

    pub fn weezer() -> Self {
        Self::with_mbid("Weezer", "6fe07aa5-fec0-4eca-a456-f29bff451b04")
    }

    /// Convert to JSON value; a missing mbid is sent as `null`
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "name": self.name,
            "url": self.url,
            "mbid": self.mbid,
        })
    }
}

/// Artist info payload: artist fields plus `upcoming_events_count`
pub fn artist_info_json(artist: &ArtistFixture, upcoming_events_count: u32) -> serde_json::Value {
    let mut value = artist.to_json();
    value["upcoming_events_count"] = json!(upcoming_events_count);
    value
}

/// Fixture for venue objects
#[derive(Debug, Clone)]
pub struct VenueFixture {
    pub id: u64,
    pub name: String,
    pub city: String,
    pub region: Option<String>,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl VenueFixture {
    pub fn new(id: u64, name: &str, city: &str, country: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            city: city.to_string(),
            region: None,
            country: country.to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    pub fn brixton_academy() -> Self {
        Self {
            id: 1015552,
            name: "O2 BRIXTON ACADEMY".to_string(),
            city: "Brixton".to_string(),
            region: Some("London".to_string()),
            country: "United Kingdom".to_string(),
            latitude: 51.4620184,
            longitude: -0.1152248,
        }
    }

    pub fn url(&self) -> String {
        format!("http://www.bandsintown.com/venue/{}", self.id)
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "url": self.url(),
            "name": self.name,
            "city": self.city,
            "region": self.region,
            "country": self.country,
            "latitude": self.latitude,
            "longitude": self.longitude,
        })
    }
}

/// Fixture for event objects in venue event listings
#[derive(Debug, Clone)]
pub struct EventFixture {
    pub id: u64,
    pub datetime: Option<String>,
    pub artists: Vec<ArtistFixture>,
    pub venue: VenueFixture,
    pub ticket_status: String,
    pub on_sale_datetime: Option<String>,
    pub app_id: String,
}

impl EventFixture {
    /// Event with tickets available and no announced on-sale date
    pub fn new(id: u64, datetime: &str, venue: VenueFixture) -> Self {
        Self {
            id,
            datetime: Some(datetime.to_string()),
            artists: Vec::new(),
            venue,
            ticket_status: "available".to_string(),
            on_sale_datetime: None,
            app_id: "myappId".to_string(),
        }
    }

    /// Weezer at Brixton Academy, 2016-04-05 19:00
    pub fn weezer_at_brixton() -> Self {
        Self::new(11224258, "2016-04-05T19:00:00", VenueFixture::brixton_academy())
            .with_artist(ArtistFixture::weezer())
    }

    pub fn with_artist(mut self, artist: ArtistFixture) -> Self {
        self.artists.push(artist);
        self
    }

    pub fn on_sale(mut self, on_sale_datetime: &str) -> Self {
        self.on_sale_datetime = Some(on_sale_datetime.to_string());
        self
    }

    pub fn with_ticket_status(mut self, status: &str) -> Self {
        self.ticket_status = status.to_string();
        self
    }

    pub fn url(&self) -> String {
        format!(
            "http://www.bandsintown.com/event/{}?app_id={}",
            self.id, self.app_id
        )
    }

    pub fn ticket_url(&self) -> String {
        format!(
            "http://www.bandsintown.com/event/{}/buy_tickets?app_id={}&came_from=233",
            self.id, self.app_id
        )
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "url": self.url(),
            "datetime": self.datetime,
            "ticket_url": self.ticket_url(),
            "artists": self.artists.iter().map(|a| a.to_json()).collect::<Vec<_>>(),
            "venue": self.venue.to_json(),
            "ticket_status": self.ticket_status,
            "on_sale_datetime": self.on_sale_datetime,
        })
    }
}
