//! HTTP plumbing shared by every API module.
//!
//! `ApiClient` attaches the stored bearer token, enforces the request
//! timeout, and turns transport and HTTP failures into [`ApiError`].
//! A 401/403 clears the session and sends the browser to the login page.

use std::cell::Cell;
use std::rc::Rc;

use contracts::common::ErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::AppConfig;
use crate::system::auth::storage;

/// Where the browser goes when the API rejects the session.
pub const SESSION_EXPIRED_URL: &str = "/auth/login?error=session_expired";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("session expired")]
    Unauthorized,
    #[error("server responded with {status}")]
    Http { status: u16, message: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            _ => ApiError::Http { status, message },
        }
    }

    /// Message supplied by the backend in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Join the API origin, a path and an optional encoded query string.
pub fn build_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{}/{}?{}", base, path, query),
        None => format!("{}/{}", base, path),
    }
}

/// Percent-encode a single path segment such as an entity id.
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn url(&self, path: &str, query: Option<&str>) -> String {
        build_url(&self.config.api_url, path, query)
    }

    /// `GET path?query` and decode the JSON body.
    pub async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let query = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
        let url = self.url(path, Some(&query));
        let (response, deadline) = self.send(Request::get(&url), None::<&()>).await?;
        // the deadline stays armed while the body streams in
        let body = response.json::<T>().await;
        body.map_err(|e| decode_error(deadline.expired(), e.to_string()))
    }

    /// `DELETE path`; the response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path, None);
        self.send(Request::delete(&url), None::<&()>).await?;
        Ok(())
    }

    /// `PATCH path` with a JSON body; the updated entity in the response is ignored.
    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.url(path, None);
        self.send(Request::patch(&url), Some(body)).await?;
        Ok(())
    }

    async fn send<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: Option<&B>,
    ) -> Result<(Response, Deadline), ApiError> {
        let abort = web_sys::AbortController::new()
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        let signal = abort.signal();

        let mut builder = builder
            .header("Content-Type", "application/json")
            .abort_signal(Some(&signal));
        if let Some(token) = storage::get_access_token() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let deadline = Deadline::start(self.config.request_timeout_ms, abort);

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(deadline.expired(), e.to_string()))?;

        if response.ok() {
            return Ok((response, deadline));
        }

        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        let error = ApiError::from_status(status, message);
        if error == ApiError::Unauthorized {
            end_session();
        }
        Err(error)
    }
}

/// Abort timer covering a request and the read of its body. Dropping it
/// cancels the timer.
struct Deadline {
    timed_out: Rc<Cell<bool>>,
    _timer: Timeout,
}

impl Deadline {
    fn start(timeout_ms: u32, abort: web_sys::AbortController) -> Self {
        let timed_out = Rc::new(Cell::new(false));
        let timer = {
            let timed_out = Rc::clone(&timed_out);
            Timeout::new(timeout_ms, move || {
                timed_out.set(true);
                abort.abort();
            })
        };
        Self {
            timed_out,
            _timer: timer,
        }
    }

    fn expired(&self) -> bool {
        self.timed_out.get()
    }
}

/// A failed send after the deadline fired is the abort, not the network.
fn transport_error(expired: bool, message: String) -> ApiError {
    if expired {
        ApiError::Timeout
    } else {
        ApiError::Network(message)
    }
}

/// A body read cut off by the abort surfaces as a timeout.
fn decode_error(expired: bool, message: String) -> ApiError {
    if expired {
        ApiError::Timeout
    } else {
        ApiError::Decode(message)
    }
}

fn end_session() {
    log::warn!("API rejected the session, signing out");
    storage::clear_tokens();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(SESSION_EXPIRED_URL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        assert_eq!(
            build_url("http://localhost:3000/", "/listings", Some("page=1&limit=20")),
            "http://localhost:3000/listings?page=1&limit=20"
        );
        assert_eq!(
            build_url("http://localhost:3000", "admin-listings/42", Some("")),
            "http://localhost:3000/admin-listings/42"
        );
    }

    #[test]
    fn test_path_segment_is_encoded() {
        assert_eq!(path_segment("a b/c"), "a%20b%2Fc");
    }

    #[test]
    fn test_auth_statuses_end_session() {
        assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(403, Some("Forbidden".into())),
            ApiError::Unauthorized
        );
    }

    #[test]
    fn test_server_message() {
        let err = ApiError::from_status(409, Some("Cannot delete: referenced elsewhere".into()));
        assert_eq!(err.server_message(), Some("Cannot delete: referenced elsewhere"));

        assert_eq!(ApiError::from_status(500, Some("  ".into())).server_message(), None);
        assert_eq!(ApiError::Timeout.server_message(), None);
    }

    #[test]
    fn test_aborted_reads_surface_as_timeout() {
        assert_eq!(transport_error(true, "aborted".into()), ApiError::Timeout);
        assert_eq!(
            transport_error(false, "offline".into()),
            ApiError::Network("offline".into())
        );
        assert_eq!(decode_error(true, "body aborted".into()), ApiError::Timeout);
        assert_eq!(
            decode_error(false, "expected value".into()),
            ApiError::Decode("expected value".into())
        );
    }
}
