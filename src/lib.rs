// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # masklog - HTTP client logging with header masking
//!
//! A logging interceptor that sits in front of any HTTP transport. Every
//! request and response is written to a log sink with sensitive header
//! values masked, and response payloads are buffered only when payload
//! logging is switched on.
//!
//! ## Features
//!
//! - Case-insensitive masking rules that keep a few characters at each end
//! - Re-readable response bodies when payloads are logged
//! - Untouched streaming responses when they are not
//! - reqwest-backed transport included, any other via [`Transport`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use masklog::{HttpClient, LoggingConfig, LoggingInterceptor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LoggingConfig::new()
//!         .include_payload(true)
//!         .mask("authorization", 3);
//!     let client = LoggingInterceptor::new(HttpClient::new()?, config);
//!
//!     let mut response = client.get("https://example.com").await?;
//!     println!("{}", response.text().await?);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod masking;
pub mod sink;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience

// Configuration
pub use config::LoggingConfig;

// Errors
pub use error::{Error, ErrorContext, Result};

// HTTP
pub use http::{
    BodyStream, BufferedResponse, ClientResponse, HttpClient, HttpClientConfig, Request,
    RequestBuilder, Response,
};

// Interceptor
pub use interceptor::{InterceptedResponse, LoggingInterceptor, BODY_READ_FAILURE, OMITTED_BODY};

// Masking
pub use masking::{MaskedHeaders, MaskingPolicy, MaskingRule, MASK_TOKEN};

// Sinks
pub use sink::{LogEntry, LogLevel, LogSink, MemorySink, TracingSink};

// Transport
pub use transport::Transport;

/// masklog version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
