// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! reqwest-backed transport

use std::time::{Duration, Instant};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::redirect::Policy;
use reqwest::Client;

use super::request::Request;
use super::response::Response;
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};
use crate::transport::Transport;

/// HTTP client configuration
///
/// reqwest adds `user_agent` and `default_headers` when the request is
/// sent, after any interceptor has logged it. Pass requests through
/// [`HttpClient::prepare`] first to have them appear in the log.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Default timeout
    pub timeout: Duration,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Accept invalid certificates (dangerous!)
    pub accept_invalid_certs: bool,
    /// Default headers
    pub default_headers: HeaderMap,
    /// Proxy URL
    pub proxy: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("accept", HeaderValue::from_static("*/*"));

        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            accept_invalid_certs: false,
            default_headers,
            proxy: None,
        }
    }
}

/// Plain HTTP transport
///
/// Sends the request as given and hands back the response with its body
/// still on the wire. Retries, if wanted, belong in a transport wrapped
/// around this one.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(config.default_headers.clone());

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Copy the user agent and default headers into `request`
    ///
    /// Headers already set on the request win, as they do on the wire.
    pub fn prepare(&self, mut request: Request) -> Request {
        if !request.headers.contains_key(USER_AGENT) {
            if let Ok(value) = HeaderValue::from_str(&self.config.user_agent) {
                request.headers.insert(USER_AGENT, value);
            }
        }
        for name in self.config.default_headers.keys() {
            if request.headers.contains_key(name) {
                continue;
            }
            for value in self.config.default_headers.get_all(name) {
                request.headers.append(name.clone(), value.clone());
            }
        }
        request
    }
}

#[async_trait]
impl Transport for HttpClient {
    type Response = Response;

    async fn execute(&self, request: Request, body: Bytes) -> Result<Response> {
        let start = Instant::now();

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if !body.is_empty() {
            builder = builder.body(body);
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let response_time = start.elapsed().as_millis() as u64;

        Ok(Response::from_reqwest(response, response_time))
    }
}
