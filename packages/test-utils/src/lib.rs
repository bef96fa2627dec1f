//! Shared test utilities for the Bandsintown client
//!
//! This crate provides a mock Bandsintown API and JSON fixtures so client
//! tests run without network access.
//!
//! # Mock Services
//!
//! - [`MockBandsintownServer`] - Mock Bandsintown REST API built on wiremock
//!
//! # Example
//!
//! ```rust,ignore
//! use bandsintown_test_utils::{ArtistFixture, MockBandsintownServer};
//!
//! #[tokio::test]
//! async fn test_with_mock() {
//!     let server = MockBandsintownServer::start().await;
//!     server.mock_artist_info(&ArtistFixture::sixty_five_days(), 5).await;
//!
//!     // Point your client at server.url() with server.app_id()
//! }
//! ```

mod bandsintown;
mod fixtures;

pub use bandsintown::MockBandsintownServer;
pub use fixtures::{artist_info_json, ArtistFixture, EventFixture, VenueFixture};
