// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP types for masklog
//!
//! Request and response abstractions shared by every transport, the
//! re-readable [`BufferedResponse`] decorator, and a reqwest-backed
//! [`HttpClient`] transport.

pub mod body;
mod buffered;
mod client;
mod request;
mod response;

pub use body::BodyStream;
pub use buffered::BufferedResponse;
pub use client::{HttpClient, HttpClientConfig};
pub use request::{Request, RequestBuilder};
pub use response::{ClientResponse, Response};

pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
pub use reqwest::{Method, StatusCode};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("masklog/", env!("CARGO_PKG_VERSION"));
