//! Bandsintown API client
//!
//! This crate provides a client for the Bandsintown API, covering:
//! - Artist info lookup by name or MusicBrainz ID
//! - Upcoming events at a venue
//!
//! Every call performs exactly one GET and returns the decoded value together
//! with the raw response. There is no retry, caching or pagination; callers
//! own their resilience policy (see [`BandsintownError::is_retryable`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use bandsintown_client::BandsintownClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BandsintownClient::new("your_app_id")?;
//!
//! let info = client.artists().info_by_name("65daysofstatic").await?;
//! println!("{} has {} upcoming events", info.data.artist.name, info.data.upcoming_events_count);
//!
//! let events = client.venues().events(1015552).await?.into_data();
//! for event in events {
//!     println!("{} at {}", event.datetime, event.venue.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Custom transports
//!
//! Anything implementing [`HttpTransport`] can carry the requests, which is
//! how tests run without network access:
//!
//! ```rust,no_run
//! use bandsintown_client::BandsintownClient;
//!
//! let client = BandsintownClient::with_transport(
//!     reqwest::Client::new(),
//!     "http://127.0.0.1:8080",
//!     "test-app",
//! );
//! ```
//!
//! # Environment Variables
//!
//! - `BANDSINTOWN_APP_ID`: application id (required for `from_env`)
//! - `BANDSINTOWN_BASE_URL`: API base URL (default `https://rest.bandsintown.com`)
//! - `BANDSINTOWN_TIMEOUT`: request timeout in seconds (default 10)
//! - `BANDSINTOWN_CONNECT_TIMEOUT`: connect timeout in seconds (default 5)

mod client;
mod error;
mod models;
mod services;
mod timestamp;
mod transport;

pub use client::{ApiResponse, BandsintownClient};
pub use error::{BandsintownError, BandsintownResult, ErrorKind};
pub use models::{Artist, ArtistInfo, Event, Venue};
pub use services::{ArtistService, VenueService};
pub use timestamp::Timestamp;
pub use transport::{HttpTransport, RawResponse};

pub use bandsintown_shared_config::BandsintownConfig;
