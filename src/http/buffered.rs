// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Re-readable response wrapper

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use super::body::{self, BodyStream};
use super::response::ClientResponse;
use crate::error::Result;

/// Wraps a response and keeps its body in memory after the first read
///
/// The first body access drains the inner stream into an owned buffer.
/// Every later access gets a fresh stream over that buffer, so a logger and
/// the real caller can both read the payload.
#[derive(Debug)]
pub struct BufferedResponse<R> {
    inner: R,
    body: Option<Bytes>,
}

impl<R: ClientResponse> BufferedResponse<R> {
    /// Wrap a response without reading it
    pub fn new(inner: R) -> Self {
        Self { inner, body: None }
    }

    /// Buffered body bytes, draining the inner stream on first use
    pub async fn bytes(&mut self) -> Result<Bytes> {
        if let Some(ref body) = self.body {
            return Ok(body.clone());
        }

        let stream = self.inner.body().await?;
        let body = body::collect(stream).await?;
        self.body = Some(body.clone());
        Ok(body)
    }

    /// Whether the body has been captured already
    pub fn is_buffered(&self) -> bool {
        self.body.is_some()
    }

    /// Get the wrapped response
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap, dropping any buffered body
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[async_trait]
impl<R: ClientResponse> ClientResponse for BufferedResponse<R> {
    fn status(&self) -> StatusCode {
        self.inner.status()
    }

    fn status_text(&self) -> &str {
        self.inner.status_text()
    }

    fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    async fn body(&mut self) -> Result<BodyStream> {
        let bytes = self.bytes().await?;
        Ok(body::once(bytes))
    }

    fn close(&mut self) {
        self.inner.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::StubResponse;

    #[tokio::test]
    async fn test_body_read_twice() {
        let mut resp = BufferedResponse::new(StubResponse::ok(r#"{"ok":true}"#));

        let first = body::collect(resp.body().await.unwrap()).await.unwrap();
        let second = body::collect(resp.body().await.unwrap()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(&first[..], br#"{"ok":true}"#);
        assert_eq!(resp.get_ref().body_calls(), 1);
    }

    #[tokio::test]
    async fn test_lazy_buffering() {
        let mut resp = BufferedResponse::new(StubResponse::ok("abc"));
        assert!(!resp.is_buffered());
        assert_eq!(resp.get_ref().body_calls(), 0);

        assert_eq!(&resp.bytes().await.unwrap()[..], b"abc");
        assert!(resp.is_buffered());
    }

    #[tokio::test]
    async fn test_chunks_joined() {
        let inner = StubResponse::with_chunks(vec![
            Ok(Bytes::from_static(b"hello, ")),
            Ok(Bytes::from_static(b"world")),
        ]);
        let mut resp = BufferedResponse::new(inner);
        assert_eq!(&resp.bytes().await.unwrap()[..], b"hello, world");
    }

    #[test]
    fn test_passes_status_and_headers() {
        let inner = StubResponse::ok("")
            .with_status(StatusCode::NOT_FOUND)
            .header("content-type", "text/plain");
        let resp = BufferedResponse::new(inner);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.status_text(), "Not Found");
        assert_eq!(resp.headers().get("content-type").unwrap(), "text/plain");
    }

    #[tokio::test]
    async fn test_close_delegates() {
        let inner = StubResponse::ok("abc");
        let closed = inner.closed.clone();
        let mut resp = BufferedResponse::new(inner);

        resp.bytes().await.unwrap();
        resp.close();

        assert!(closed.load(std::sync::atomic::Ordering::SeqCst));
        // buffer outlives the inner stream
        assert_eq!(&resp.bytes().await.unwrap()[..], b"abc");
    }

    #[tokio::test]
    async fn test_read_error_not_cached() {
        let inner = StubResponse::with_chunks(vec![Err(Error::body_read("reset"))]);
        let mut resp = BufferedResponse::new(inner);

        assert!(matches!(resp.bytes().await, Err(Error::BodyRead(_))));
        assert!(!resp.is_buffered());
        assert!(matches!(resp.bytes().await, Err(Error::BodyConsumed)));
    }
}
