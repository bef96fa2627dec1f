//! Common test utilities for client integration tests
//!
//! Requests are addressed to `http://example.com` and forwarded to a local
//! mock server, so tests can check the exact URL the client built while
//! still exercising the real reqwest transport.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bandsintown_client::{
    BandsintownClient, BandsintownError, BandsintownResult, HttpTransport, RawResponse,
};
use url::Url;

pub use bandsintown_test_utils::{
    artist_info_json, ArtistFixture, EventFixture, MockBandsintownServer, VenueFixture,
};

pub const PUBLIC_BASE_URL: &str = "http://example.com";

/// Records each requested URL, then sends it to `target` instead
pub struct RedirectingTransport {
    target: Url,
    inner: reqwest::Client,
    requests: Mutex<Vec<Url>>,
}

impl RedirectingTransport {
    pub fn new(target: &str) -> Self {
        Self {
            target: Url::parse(target).expect("mock server URL should parse"),
            inner: reqwest::Client::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// URLs as built by the client, before redirection
    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Url {
        self.requests().pop().expect("no request was made")
    }

    fn redirect(&self, url: &Url) -> BandsintownResult<Url> {
        let fail = || BandsintownError::Transport(format!("cannot redirect {}", url));

        let mut forwarded = url.clone();
        forwarded
            .set_scheme(self.target.scheme())
            .map_err(|_| fail())?;
        forwarded
            .set_host(self.target.host_str())
            .map_err(|_| fail())?;
        forwarded.set_port(self.target.port()).map_err(|_| fail())?;
        Ok(forwarded)
    }
}

#[async_trait]
impl HttpTransport for RedirectingTransport {
    async fn get(&self, url: Url) -> BandsintownResult<RawResponse> {
        self.requests.lock().unwrap().push(url.clone());
        let forwarded = self.redirect(&url)?;
        HttpTransport::get(&self.inner, forwarded).await
    }
}

/// Client addressed at example.com whose requests land on `server`
pub fn redirected_client(
    server: &MockBandsintownServer,
) -> (BandsintownClient, Arc<RedirectingTransport>) {
    let transport = Arc::new(RedirectingTransport::new(&server.url()));
    let client =
        BandsintownClient::with_transport(transport.clone(), PUBLIC_BASE_URL, server.app_id());
    (client, transport)
}

/// Client talking to `server` directly through a plain reqwest client
pub fn direct_client(server: &MockBandsintownServer) -> BandsintownClient {
    BandsintownClient::with_transport(reqwest::Client::new(), server.url(), server.app_id())
}
