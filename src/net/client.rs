//! Credential-enriching HTTP client for the Job Connect API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outbound API call goes through `ApiClient::send`, which attaches the
//! current bearer credential from the `SessionStore` right before dispatch.
//! Call sites never set `Authorization` themselves.
//!
//! DESIGN
//! ======
//! Requests are described by a plain `PreparedRequest` so the enrichment step
//! is a pure transformation that can be tested without a browser. Only the
//! final dispatch touches `gloo-net`, and only in the `hydrate` build. The
//! credential is read from the store on every send and never cached.
//!
//! ERROR HANDLING
//! ==============
//! Construction and transport failures come back as `ApiError` unchanged.
//! Responses are passed through as-is; status codes are not interpreted here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ClientConfig;
use crate::state::session_store::SessionStore;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// An outbound request, fully described before it is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl PreparedRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None }
    }

    /// Set a header, replacing any existing value (names compare case-insensitively).
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Build` if `body` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let raw = serde_json::to_string(body).map_err(|e| ApiError::Build(e.to_string()))?;
        self.body = Some(raw);
        Ok(self.header(CONTENT_TYPE, "application/json"))
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Raw response: status plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// API client bound to a base address and the shared session store.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    timeout: Duration,
    store: SessionStore,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, store: SessionStore) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').into(),
            timeout: config.request_timeout,
            store,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Absolute URL for an API path. Already-absolute URLs pass through.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    pub fn request(&self, method: Method, path: &str) -> PreparedRequest {
        PreparedRequest::new(method, self.url(path))
    }

    pub fn get(&self, path: &str) -> PreparedRequest {
        self.request(Method::Get, path)
    }

    pub fn post(&self, path: &str) -> PreparedRequest {
        self.request(Method::Post, path)
    }

    /// Attach `Authorization: Bearer <credential>` when the store holds a
    /// credential; otherwise return the request untouched.
    pub fn enrich(&self, request: PreparedRequest) -> PreparedRequest {
        match self.store.credential_untracked() {
            Some(credential) => request.header(AUTHORIZATION, credential.bearer()),
            None => request,
        }
    }

    /// Enrich and dispatch `request`, racing it against the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request cannot be built, the transport fails,
    /// the timeout elapses, or the call is made outside the browser build.
    pub async fn send(&self, request: PreparedRequest) -> Result<ApiResponse, ApiError> {
        let request = self.enrich(request);
        log::debug!("{} {}", request.method.as_str(), request.url);

        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let pending = std::pin::pin!(to_gloo_request(&request)?.send());
            let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(timeout_millis(self.timeout)));
            match select(pending, timer).await {
                Either::Left((result, _)) => {
                    let resp = result.map_err(|e| ApiError::Network(e.to_string()))?;
                    let status = resp.status();
                    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
                    Ok(ApiResponse { status, body })
                }
                Either::Right(((), _)) => Err(ApiError::Timeout(self.timeout)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, self.timeout);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn timeout_millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(feature = "hydrate")]
fn to_gloo_request(request: &PreparedRequest) -> Result<gloo_net::http::Request, ApiError> {
    use gloo_net::http::{Method as GlooMethod, RequestBuilder};

    let method = match request.method {
        Method::Get => GlooMethod::GET,
        Method::Post => GlooMethod::POST,
        Method::Put => GlooMethod::PUT,
        Method::Patch => GlooMethod::PATCH,
        Method::Delete => GlooMethod::DELETE,
    };
    let builder = request
        .headers
        .iter()
        .fold(RequestBuilder::new(&request.url).method(method), |b, (name, value)| {
            b.header(name, value)
        });
    match &request.body {
        Some(body) => builder.body(body.clone()),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Build(e.to_string()))
}
