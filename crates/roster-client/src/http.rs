//! Reqwest-backed transport.
//!
//! Owns request serialisation and status mapping only. Callers get
//! `Ok(None)` for bodiless successes and a [`RequestError`] for everything
//! else that is not a 2xx with JSON.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode, Url};
use serde_json::Value;

use crate::error::{Error, RequestError, Result};

pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Client without a transport timeout; failures surface only when the
    /// connection itself gives up.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// # Errors
    ///
    /// Returns an error when `base_url` is not an absolute http(s) URL or the
    /// reqwest client cannot be constructed.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let parsed = Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidBaseUrl(format!(
                "unsupported scheme '{}' in {}",
                parsed.scheme(),
                base_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request against `base_url + path`.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> std::result::Result<Option<Value>, RequestError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, has_body = body.is_some(), "sending request");

        let mut request = self
            .client
            .request(method.clone(), url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            tracing::debug!(%method, %url, status = status.as_u16(), "request rejected");
            return Err(map_status_error(status, text));
        }

        if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|err| RequestError::Parse(format!("{} {}: {}", method, path, err)))
    }
}

fn map_transport_error(err: reqwest::Error) -> RequestError {
    RequestError::Transport(err.to_string())
}

fn map_status_error(status: StatusCode, text: String) -> RequestError {
    let message = if text.is_empty() {
        format!("Request failed: {}", status.as_u16())
    } else {
        text
    };
    RequestError::Rejected {
        status: status.as_u16(),
        message,
    }
}
