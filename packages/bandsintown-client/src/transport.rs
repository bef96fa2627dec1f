//! HTTP transport abstraction
//!
//! The client only ever needs "GET this URL and hand back the response".
//! [`HttpTransport`] captures that so tests and embedding applications can
//! supply their own implementation; `reqwest::Client` is the production one.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use url::Url;

use crate::error::BandsintownResult;

/// Raw response returned by a transport
///
/// Handed back to callers alongside decoded data for status and header
/// inspection.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Final URL (after any redirects the transport followed)
    pub url: Url,
    /// Undecoded response body
    pub body: Bytes,
}

impl RawResponse {
    /// Build a 200 response with a JSON body (useful for custom transports)
    pub fn ok_json(url: Url, body: impl Into<Bytes>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        Self {
            status: StatusCode::OK,
            headers,
            url,
            body: body.into(),
        }
    }

    /// Body as UTF-8 text, replacing invalid sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Capability to perform a single HTTP GET
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform a GET against `url`
    ///
    /// Implementations return any HTTP status as a response; status checks
    /// are done by the client. Errors are reserved for failures that produced
    /// no response at all.
    async fn get(&self, url: Url) -> BandsintownResult<RawResponse>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn get(&self, url: Url) -> BandsintownResult<RawResponse> {
        let response = reqwest::Client::get(self, url).send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response.bytes().await?;

        Ok(RawResponse {
            status,
            headers,
            url,
            body,
        })
    }
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn get(&self, url: Url) -> BandsintownResult<RawResponse> {
        (**self).get(url).await
    }
}
