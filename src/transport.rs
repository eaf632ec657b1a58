// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport contract
//!
//! Anything that can turn a request and its body into a response. The
//! logging interceptor is itself a transport, so it can sit in front of
//! [`HttpClient`](crate::http::HttpClient) or any other implementation.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;
use crate::http::{ClientResponse, Request};

/// Executes one request
///
/// # Example
///
/// ```rust,no_run
/// use masklog::{Request, Transport, HttpClient};
/// use bytes::Bytes;
///
/// # async fn run() -> masklog::Result<()> {
/// let client = HttpClient::new()?;
/// let response = client.execute(Request::get("https://example.com")?, Bytes::new()).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Response type produced by this transport
    type Response: ClientResponse + 'static;

    /// Send `request` with `body` and return the response
    async fn execute(&self, request: Request, body: Bytes) -> Result<Self::Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    type Response = T::Response;

    async fn execute(&self, request: Request, body: Bytes) -> Result<Self::Response> {
        (**self).execute(request, body).await
    }
}
