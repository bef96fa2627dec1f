//! Bandsintown API client implementation

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bandsintown_shared_config::BandsintownConfig;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{BandsintownError, BandsintownResult};
use crate::services::{ArtistService, VenueService};
use crate::transport::{HttpTransport, RawResponse};

/// Maximum error body size kept on status errors
const MAX_ERROR_BODY_SIZE: usize = 1000;

const USER_AGENT: &str = concat!("bandsintown-client/", env!("CARGO_PKG_VERSION"));

/// Bandsintown API client
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct BandsintownClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    app_id: String,
}

/// A decoded value together with the response it came from
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Decoded body
    pub data: T,
    /// Raw response (status, headers, body)
    pub raw: RawResponse,
}

impl<T> ApiResponse<T> {
    pub fn status(&self) -> StatusCode {
        self.raw.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.raw.headers
    }

    /// Drop the response metadata and keep the decoded value
    pub fn into_data(self) -> T {
        self.data
    }

    /// Transform the decoded value, keeping the response metadata
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            raw: self.raw,
        }
    }
}

impl fmt::Debug for BandsintownClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BandsintownClient")
            .field("base_url", &self.base_url)
            .field("app_id", &"[REDACTED]")
            .finish()
    }
}

impl BandsintownClient {
    /// Create a client for the public API with the given app id
    ///
    /// # Errors
    /// Returns `BandsintownError::Http` if the HTTP client cannot be built
    pub fn new(app_id: impl Into<String>) -> BandsintownResult<Self> {
        Self::from_config(&BandsintownConfig::with_app_id(app_id))
    }

    /// Create a client backed by a pooled `reqwest::Client`
    ///
    /// # Errors
    /// Returns `BandsintownError::Http` if the HTTP client cannot be built
    pub fn from_config(config: &BandsintownConfig) -> BandsintownResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self::with_transport(
            http_client,
            config.base_url.clone(),
            config.app_id.clone(),
        ))
    }

    /// Create a client from environment variables
    ///
    /// See [`BandsintownConfig::from_env`] for the variables read.
    ///
    /// # Errors
    /// - `BandsintownError::Config` if required variables are missing or invalid
    /// - `BandsintownError::Http` if the HTTP client cannot be built
    pub fn from_env() -> BandsintownResult<Self> {
        let config = BandsintownConfig::from_env()?;
        Self::from_config(&config)
    }

    /// Create a client with a caller-supplied transport
    ///
    /// Performs no I/O. The base URL is only parsed when a request is made.
    pub fn with_transport<T>(
        transport: T,
        base_url: impl Into<String>,
        app_id: impl Into<String>,
    ) -> Self
    where
        T: HttpTransport + 'static,
    {
        Self {
            transport: Arc::new(transport),
            base_url: base_url.into(),
            app_id: app_id.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Artist lookups
    pub fn artists(&self) -> ArtistService<'_> {
        ArtistService::new(self)
    }

    /// Venue lookups
    pub fn venues(&self) -> VenueService<'_> {
        VenueService::new(self)
    }

    /// Build the request URL for the given path segments
    ///
    /// Each segment is percent-encoded individually, any query or fragment
    /// on the base URL is replaced, and `app_id` becomes the only query
    /// parameter.
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> BandsintownResult<Url> {
        let invalid = |reason: String| BandsintownError::InvalidUrl {
            url: self.base_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot be used as a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.set_fragment(None);
        url.set_query(None);
        url.query_pairs_mut().append_pair("app_id", &self.app_id);

        Ok(url)
    }

    /// GET the endpoint and decode its JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> BandsintownResult<ApiResponse<T>> {
        let url = self.endpoint_url(segments)?;
        // The query carries the app id, so only the path is logged
        let path = url.path().to_string();

        debug!(path = %path, "Sending Bandsintown request");

        let raw = self.transport.get(url).await?;

        if !raw.status.is_success() {
            warn!(path = %path, status = %raw.status, "Bandsintown API returned an error status");
            return Err(BandsintownError::Status {
                status: raw.status,
                body: truncate_error_body(raw.text()),
            });
        }

        let data = serde_json::from_slice(&raw.body).map_err(|e| {
            warn!(path = %path, error = %e, "Failed to decode Bandsintown response");
            BandsintownError::Decode(e)
        })?;

        Ok(ApiResponse { data, raw })
    }
}

/// Truncate error body to keep error values small
/// Safely handles UTF-8 boundaries to avoid panics on multi-byte characters
fn truncate_error_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY_SIZE {
        return body;
    }

    let truncate_at = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= MAX_ERROR_BODY_SIZE)
        .last()
        .unwrap_or(0);

    format!("{}... (truncated)", &body[..truncate_at])
}
