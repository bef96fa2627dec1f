//! Mock Bandsintown server for testing the API client
//!
//! Provides a [`MockBandsintownServer`] that simulates the artist info and
//! venue events endpoints, plus common failure modes.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use crate::fixtures::{artist_info_json, ArtistFixture, EventFixture};

/// Any endpoint the client knows about
const ANY_ENDPOINT: &str = r"^/(artists|venues)/";

/// Mock Bandsintown server
///
/// This struct wraps a [`wiremock::MockServer`]. Success mocks only match
/// GET requests carrying the expected `app_id` query parameter, so a client
/// that drops or mangles it gets wiremock's default 404.
///
/// # Example
///
/// ```rust,ignore
/// use bandsintown_test_utils::{EventFixture, MockBandsintownServer};
///
/// #[tokio::test]
/// async fn test_venue_events() {
///     let server = MockBandsintownServer::start().await;
///     server
///         .mock_venue_events(1043, vec![EventFixture::weezer_at_brixton()])
///         .await;
///
///     // Configure your client with server.url() and server.app_id()
/// }
/// ```
pub struct MockBandsintownServer {
    server: MockServer,
    app_id: String,
}

impl MockBandsintownServer {
    /// Start a new mock server expecting the default app id
    pub async fn start() -> Self {
        Self::start_with_app_id("test-app-id").await
    }

    /// Start a new mock server expecting a custom app id
    pub async fn start_with_app_id(app_id: &str) -> Self {
        let server = MockServer::start().await;
        Self {
            server,
            app_id: app_id.to_string(),
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get the expected app id
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// All requests received so far
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Mount a mock for `/artists/{name}.json`
    pub async fn mock_artist_info(&self, artist: &ArtistFixture, upcoming_events_count: u32) {
        self.mount_json(
            &format!("/artists/{}.json", artist.name),
            artist_info_json(artist, upcoming_events_count),
        )
        .await;
    }

    /// Mount a mock for `/artists/mbid_{mbid}.json`
    ///
    /// # Panics
    /// Panics if the fixture has no mbid.
    pub async fn mock_artist_info_by_mbid(&self, artist: &ArtistFixture, upcoming_events_count: u32) {
        let mbid = artist
            .mbid
            .as_deref()
            .expect("artist fixture needs an mbid for mbid lookups");
        self.mount_json(
            &format!("/artists/mbid_{}.json", mbid),
            artist_info_json(artist, upcoming_events_count),
        )
        .await;
    }

    /// Mount a mock for `/venues/{venue_id}/events.json`
    pub async fn mock_venue_events(&self, venue_id: u64, events: Vec<EventFixture>) {
        let events_json: Vec<serde_json::Value> = events.iter().map(|e| e.to_json()).collect();
        self.mount_json(
            &format!("/venues/{}/events.json", venue_id),
            json!(events_json),
        )
        .await;
    }

    /// Mount a mock returning a literal body for `/venues/{venue_id}/events.json`
    pub async fn mock_venue_events_raw(&self, venue_id: u64, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/venues/{}/events.json", venue_id)))
            .and(query_param("app_id", self.app_id.as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Content-Type", "application/json")
                    .set_body_string(body),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a mock answering every endpoint with the given status
    pub async fn mock_status(&self, status_code: u16, error_message: &str) {
        Mock::given(method("GET"))
            .and(path_regex(ANY_ENDPOINT))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "errors": [error_message]
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock answering every endpoint with a 200 and a non-JSON body
    pub async fn mock_malformed(&self) {
        Mock::given(method("GET"))
            .and(path_regex(ANY_ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock that answers every endpoint after a delay
    pub async fn mock_slow(&self, delay: Duration) {
        Mock::given(method("GET"))
            .and(path_regex(ANY_ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    async fn mount_json(&self, endpoint: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("app_id", self.app_id.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}
