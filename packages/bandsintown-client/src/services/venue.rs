//! Venue event listings

use tracing::{debug, instrument};

use crate::client::{ApiResponse, BandsintownClient};
use crate::error::BandsintownResult;
use crate::models::Event;

/// Venue endpoints (`/venues/...`)
#[derive(Debug, Clone, Copy)]
pub struct VenueService<'a> {
    client: &'a BandsintownClient,
}

impl<'a> VenueService<'a> {
    pub(crate) fn new(client: &'a BandsintownClient) -> Self {
        Self { client }
    }

    /// Get upcoming events at a venue
    ///
    /// Requests `/venues/{venue_id}/events.json`. Events are returned in the
    /// order the server sent them; an empty list is a valid answer.
    ///
    /// # Errors
    /// - `BandsintownError::Http` / `Status` / `InvalidUrl` - transport failures
    /// - `BandsintownError::Decode` - the body is not an array of events
    #[instrument(skip(self))]
    pub async fn events(&self, venue_id: u64) -> BandsintownResult<ApiResponse<Vec<Event>>> {
        debug!(venue_id, "Fetching venue events from Bandsintown");

        let venue_id = venue_id.to_string();
        let response: ApiResponse<Vec<Event>> = self
            .client
            .get_json(&["venues", &venue_id, "events.json"])
            .await?;

        debug!(
            venue_id = %venue_id,
            event_count = response.data.len(),
            "Found venue events"
        );

        Ok(response)
    }
}
