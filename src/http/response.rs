// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use async_trait::async_trait;
use futures::stream;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use url::Url;

use super::body::BodyStream;
use crate::error::{Error, Result};

/// Capability every transport response provides
///
/// The body is a single-consumption stream: implementations hand it out
/// once and fail with [`Error::BodyConsumed`] afterwards unless they buffer
/// it, as [`BufferedResponse`](super::BufferedResponse) does.
#[async_trait]
pub trait ClientResponse: Send {
    /// Response status code
    fn status(&self) -> StatusCode;

    /// Reason phrase for the status
    ///
    /// Defaults to the canonical reason for the code, empty for codes
    /// without one.
    fn status_text(&self) -> &str {
        self.status().canonical_reason().unwrap_or("")
    }

    /// Response headers
    fn headers(&self) -> &HeaderMap;

    /// Take the body stream
    async fn body(&mut self) -> Result<BodyStream>;

    /// Release the underlying connection
    fn close(&mut self);
}

/// Response produced by [`HttpClient`](super::HttpClient)
///
/// Status and headers are available immediately; the body stays on the
/// connection until it is taken with [`ClientResponse::body`]. The status
/// text is the canonical reason for the code; reason phrases sent by the
/// server are not kept.
#[derive(Debug)]
pub struct Response {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Final URL (after redirects)
    pub url: Url,
    /// Time to response headers in milliseconds
    pub response_time_ms: u64,
    inner: Option<reqwest::Response>,
}

impl Response {
    /// Wrap a reqwest response, keeping its body unread
    pub fn from_reqwest(response: reqwest::Response, response_time_ms: u64) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            url: response.url().clone(),
            response_time_ms,
            inner: Some(response),
        }
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Whether the body is still unread
    pub fn has_body(&self) -> bool {
        self.inner.is_some()
    }
}

#[async_trait]
impl ClientResponse for Response {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    async fn body(&mut self) -> Result<BodyStream> {
        let inner = self.inner.take().ok_or(Error::BodyConsumed)?;
        let chunks = stream::try_unfold(inner, |mut resp| async move {
            match resp.chunk().await {
                Ok(Some(chunk)) => Ok(Some((chunk, resp))),
                Ok(None) => Ok(None),
                Err(e) => Err(Error::body_read(e.to_string())),
            }
        });
        Ok(Box::pin(chunks))
    }

    fn close(&mut self) {
        self.inner = None;
    }
}
