//! Artist info lookups

use tracing::{debug, instrument};

use crate::client::{ApiResponse, BandsintownClient};
use crate::error::BandsintownResult;
use crate::models::ArtistInfo;

/// Artist endpoints (`/artists/...`)
#[derive(Debug, Clone, Copy)]
pub struct ArtistService<'a> {
    client: &'a BandsintownClient,
}

impl<'a> ArtistService<'a> {
    pub(crate) fn new(client: &'a BandsintownClient) -> Self {
        Self { client }
    }

    /// Get artist info by name
    ///
    /// Requests `/artists/{name}.json`. The name is percent-encoded as a
    /// single path segment and otherwise sent as given.
    ///
    /// # Errors
    /// - `BandsintownError::Http` / `Status` / `InvalidUrl` - transport failures
    /// - `BandsintownError::Decode` - the body is not an artist info object
    #[instrument(skip(self))]
    pub async fn info_by_name(&self, name: &str) -> BandsintownResult<ApiResponse<ArtistInfo>> {
        debug!(artist = %name, "Fetching artist info from Bandsintown");

        let file = format!("{}.json", name);
        let response: ApiResponse<ArtistInfo> =
            self.client.get_json(&["artists", &file]).await?;

        debug!(
            artist = %response.data.artist.name,
            upcoming_events = response.data.upcoming_events_count,
            "Found artist info"
        );

        Ok(response)
    }

    /// Get artist info by MusicBrainz ID
    ///
    /// Requests `/artists/mbid_{mbid}.json`.
    ///
    /// # Errors
    /// Same as [`ArtistService::info_by_name`].
    #[instrument(skip(self))]
    pub async fn info_by_mbid(&self, mbid: &str) -> BandsintownResult<ApiResponse<ArtistInfo>> {
        debug!(mbid = %mbid, "Fetching artist info by MusicBrainz ID from Bandsintown");

        let file = format!("mbid_{}.json", mbid);
        let response: ApiResponse<ArtistInfo> =
            self.client.get_json(&["artists", &file]).await?;

        debug!(
            artist = %response.data.artist.name,
            upcoming_events = response.data.upcoming_events_count,
            "Found artist info"
        );

        Ok(response)
    }
}
