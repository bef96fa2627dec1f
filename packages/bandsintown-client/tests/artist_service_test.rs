//! Integration tests for artist info lookups
//!
//! Requests go through the real reqwest transport to a wiremock-backed
//! Bandsintown mock.

mod common;

use assert_matches::assert_matches;
use bandsintown_client::{Artist, ArtistInfo, BandsintownError, ErrorKind};
use common::{direct_client, redirected_client, ArtistFixture, MockBandsintownServer};

const SIXTY_FIVE_DAYS_JSON: &str = r#"{"name":"65daysofstatic","url":"http://www.bandsintown.com/65daysofstatic","mbid":"0cd12ab3-9628-45ef-a97b-ff18624f14a0","upcoming_events_count":5}"#;

fn sixty_five_days_info() -> ArtistInfo {
    ArtistInfo {
        artist: Artist {
            name: "65daysofstatic".to_string(),
            url: "http://www.bandsintown.com/65daysofstatic".to_string(),
            mbid: "0cd12ab3-9628-45ef-a97b-ff18624f14a0".to_string(),
        },
        upcoming_events_count: 5,
    }
}

// ============================================================================
// Request construction
// ============================================================================

#[test_log::test(tokio::test)]
async fn test_info_by_name_provides_correct_query() {
    let server = MockBandsintownServer::start_with_app_id("appid").await;
    server
        .mock_artist_info(&ArtistFixture::sixty_five_days(), 5)
        .await;
    let (client, transport) = redirected_client(&server);

    client
        .artists()
        .info_by_name("65daysofstatic")
        .await
        .expect("request should succeed");

    let url = transport.last_request();
    assert_eq!(url.host_str(), Some("example.com"));
    assert_eq!(url.path(), "/artists/65daysofstatic.json");
    assert_eq!(url.query(), Some("app_id=appid"));

    let received = server.received_requests().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].method.to_string(), "GET");
    assert_eq!(received[0].url.path(), "/artists/65daysofstatic.json");
    assert_eq!(received[0].url.query(), Some("app_id=appid"));
}

#[test_log::test(tokio::test)]
async fn test_info_by_mbid_provides_correct_query() {
    let server = MockBandsintownServer::start_with_app_id("appid").await;
    server
        .mock_artist_info_by_mbid(&ArtistFixture::sixty_five_days(), 5)
        .await;
    let (client, transport) = redirected_client(&server);

    client
        .artists()
        .info_by_mbid("0cd12ab3-9628-45ef-a97b-ff18624f14a0")
        .await
        .expect("request should succeed");

    let url = transport.last_request();
    assert_eq!(url.host_str(), Some("example.com"));
    assert_eq!(
        url.path(),
        "/artists/mbid_0cd12ab3-9628-45ef-a97b-ff18624f14a0.json"
    );
    assert_eq!(url.query(), Some("app_id=appid"));

    let received = server.received_requests().await;
    assert_eq!(received[0].method.to_string(), "GET");
}

// ============================================================================
// Response decoding
// ============================================================================

#[tokio::test]
async fn test_info_by_name_can_receive_response() {
    let server = MockBandsintownServer::start_with_app_id("appid").await;
    server
        .mock_artist_info(&ArtistFixture::sixty_five_days(), 5)
        .await;
    let client = direct_client(&server);

    let response = client
        .artists()
        .info_by_name("65daysofstatic")
        .await
        .expect("request should succeed");

    assert!(response.status().is_success());
    assert_eq!(response.data, sixty_five_days_info());
    assert_eq!(
        serde_json::to_string(&response.data).unwrap(),
        SIXTY_FIVE_DAYS_JSON
    );
}

#[tokio::test]
async fn test_info_by_mbid_can_receive_response() {
    let server = MockBandsintownServer::start().await;
    server
        .mock_artist_info_by_mbid(&ArtistFixture::sixty_five_days(), 5)
        .await;
    let client = direct_client(&server);

    let info = client
        .artists()
        .info_by_mbid("0cd12ab3-9628-45ef-a97b-ff18624f14a0")
        .await
        .expect("request should succeed")
        .into_data();

    assert_eq!(info, sixty_five_days_info());
}

#[tokio::test]
async fn test_artist_without_mbid() {
    let server = MockBandsintownServer::start().await;
    server
        .mock_artist_info(&ArtistFixture::new("TinyLocalBand"), 0)
        .await;
    let client = direct_client(&server);

    let info = client
        .artists()
        .info_by_name("TinyLocalBand")
        .await
        .expect("request should succeed")
        .into_data();

    assert_eq!(info.artist.mbid, "");
    assert!(!info.artist.has_mbid());
    assert_eq!(info.upcoming_events_count, 0);
}

#[tokio::test]
async fn test_artist_info_round_trip() {
    let server = MockBandsintownServer::start().await;
    server
        .mock_artist_info(&ArtistFixture::sixty_five_days(), 5)
        .await;
    let client = direct_client(&server);

    let info = client
        .artists()
        .info_by_name("65daysofstatic")
        .await
        .unwrap()
        .into_data();

    let encoded = serde_json::to_string(&info).unwrap();
    let decoded: ArtistInfo = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, info);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_not_found_is_transport_error() {
    let server = MockBandsintownServer::start().await;
    server.mock_status(404, "Unknown Artist").await;
    let client = direct_client(&server);

    let err = client
        .artists()
        .info_by_name("nobody")
        .await
        .expect_err("404 should fail");

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_matches!(err, BandsintownError::Status { status, ref body } => {
        assert_eq!(status.as_u16(), 404);
        assert!(body.contains("Unknown Artist"));
    });
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockBandsintownServer::start().await;
    server.mock_malformed().await;
    let client = direct_client(&server);

    let err = client
        .artists()
        .info_by_name("65daysofstatic")
        .await
        .expect_err("malformed JSON should fail");

    assert!(err.is_decode());
    assert_matches!(err, BandsintownError::Decode(_));
}

#[tokio::test]
async fn test_wrong_app_id_is_rejected_by_mock() {
    let server = MockBandsintownServer::start_with_app_id("expected").await;
    server
        .mock_artist_info(&ArtistFixture::sixty_five_days(), 5)
        .await;
    let client = bandsintown_client::BandsintownClient::with_transport(
        reqwest::Client::new(),
        server.url(),
        "someone-else",
    );

    let err = client
        .artists()
        .info_by_name("65daysofstatic")
        .await
        .expect_err("unmatched request should 404");

    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = bandsintown_client::BandsintownClient::with_transport(
        reqwest::Client::new(),
        "http://127.0.0.1:1",
        "appid",
    );

    let err = client
        .artists()
        .info_by_name("65daysofstatic")
        .await
        .expect_err("nothing listens on port 1");

    assert!(err.is_transport());
    assert_matches!(err, BandsintownError::Http(_));
}
