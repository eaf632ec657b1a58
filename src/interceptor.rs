// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request/response logging interceptor
//!
//! Logs each outgoing request with masked headers, executes it through the
//! wrapped transport, and logs the response. Response bodies are only read
//! when payload logging is enabled; otherwise the response is returned
//! exactly as the transport produced it.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::config::LoggingConfig;
use crate::error::Result;
use crate::http::{body, BodyStream, BufferedResponse, ClientResponse, Request};
use crate::masking::MaskingPolicy;
use crate::sink::{LogSink, TracingSink};
use crate::transport::Transport;

/// Body text logged when payload logging is off
pub const OMITTED_BODY: &str = "omitted response body";

/// Error message logged when the response body cannot be read
pub const BODY_READ_FAILURE: &str = "Something went wrong during reading response body";

/// Response returned by [`LoggingInterceptor`]
///
/// `Passthrough` is the transport's response untouched; `Buffered` holds
/// the response together with the body read for logging.
#[derive(Debug)]
pub enum InterceptedResponse<R> {
    Passthrough(R),
    Buffered(BufferedResponse<R>),
}

impl<R: ClientResponse> InterceptedResponse<R> {
    /// Whether the body was buffered for logging
    pub fn is_buffered(&self) -> bool {
        matches!(self, InterceptedResponse::Buffered(_))
    }

    /// Recover the transport's response, dropping any buffer
    pub fn into_inner(self) -> R {
        match self {
            InterceptedResponse::Passthrough(r) => r,
            InterceptedResponse::Buffered(b) => b.into_inner(),
        }
    }

    /// Read the whole body
    pub async fn bytes(&mut self) -> Result<Bytes> {
        match self {
            InterceptedResponse::Passthrough(r) => body::collect(r.body().await?).await,
            InterceptedResponse::Buffered(b) => b.bytes().await,
        }
    }

    /// Read the whole body as text, replacing invalid UTF-8
    pub async fn text(&mut self) -> Result<String> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait]
impl<R: ClientResponse> ClientResponse for InterceptedResponse<R> {
    fn status(&self) -> StatusCode {
        match self {
            InterceptedResponse::Passthrough(r) => r.status(),
            InterceptedResponse::Buffered(b) => b.status(),
        }
    }

    fn status_text(&self) -> &str {
        match self {
            InterceptedResponse::Passthrough(r) => r.status_text(),
            InterceptedResponse::Buffered(b) => b.status_text(),
        }
    }

    fn headers(&self) -> &HeaderMap {
        match self {
            InterceptedResponse::Passthrough(r) => r.headers(),
            InterceptedResponse::Buffered(b) => b.headers(),
        }
    }

    async fn body(&mut self) -> Result<BodyStream> {
        match self {
            InterceptedResponse::Passthrough(r) => r.body().await,
            InterceptedResponse::Buffered(b) => b.body().await,
        }
    }

    fn close(&mut self) {
        match self {
            InterceptedResponse::Passthrough(r) => r.close(),
            InterceptedResponse::Buffered(b) => b.close(),
        }
    }
}

/// Logging interceptor around a transport
///
/// # Example
///
/// ```rust,no_run
/// use masklog::{HttpClient, LoggingConfig, LoggingInterceptor};
///
/// # async fn run() -> masklog::Result<()> {
/// let config = LoggingConfig::new()
///     .include_payload(true)
///     .mask("authorization", 3);
/// let client = LoggingInterceptor::new(HttpClient::new()?, config);
///
/// let mut response = client.get("https://example.com").await?;
/// println!("{}", response.text().await?);
/// # Ok(())
/// # }
/// ```
pub struct LoggingInterceptor<T> {
    transport: T,
    config: Arc<LoggingConfig>,
    policy: Arc<MaskingPolicy>,
    sink: Arc<dyn LogSink>,
}

impl<T: Transport> LoggingInterceptor<T> {
    /// Wrap `transport`, logging through `tracing`
    pub fn new(transport: T, config: LoggingConfig) -> Self {
        let policy = config.masking_policy();
        Self {
            transport,
            config: Arc::new(config),
            policy: Arc::new(policy),
            sink: Arc::new(TracingSink),
        }
    }

    /// Send records to a different sink
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    pub fn policy(&self) -> &MaskingPolicy {
        &self.policy
    }

    /// Get the wrapped transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Log, execute and log one request
    pub async fn intercept(
        &self,
        request: Request,
        body: Bytes,
    ) -> Result<InterceptedResponse<T::Response>> {
        self.log_request(&request, &body);

        let response = self.transport.execute(request, body).await?;

        if self.config.include_payload {
            let mut buffered = BufferedResponse::new(response);
            let payload = match buffered.bytes().await {
                Ok(payload) => payload,
                Err(err) => {
                    self.sink.error(BODY_READ_FAILURE, &err);
                    return Err(err);
                }
            };
            let text = self.decode_for_log(&payload, "response");
            self.log_response(&buffered, &text);
            Ok(InterceptedResponse::Buffered(buffered))
        } else {
            self.log_response(&response, OMITTED_BODY);
            Ok(InterceptedResponse::Passthrough(response))
        }
    }

    /// Intercept a GET request with an empty body
    pub async fn get(&self, url: impl AsRef<str>) -> Result<InterceptedResponse<T::Response>> {
        self.intercept(Request::get(url)?, Bytes::new()).await
    }

    fn log_request(&self, request: &Request, body: &[u8]) {
        let headers = self.policy.mask_headers(&request.headers);
        let text = self.decode_for_log(body, "request");
        self.sink.info(&format!(
            "[API:Request] Request=[{}:{}], Headers=[{}], Body=[{}]",
            request.method, request.url, headers, text
        ));
    }

    fn log_response<R: ClientResponse>(&self, response: &R, body: &str) {
        let headers = self.policy.mask_headers(response.headers());
        self.sink.info(&format!(
            "[API:Response] Status=[{}:{}], Headers=[{}], Body=[{}]",
            response.status().as_u16(),
            response.status_text(),
            headers,
            body
        ));
    }

    fn decode_for_log(&self, bytes: &[u8], what: &str) -> String {
        match body::decode_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(err) => {
                self.sink.warn(&format!(
                    "{} body is not valid UTF-8, logging lossy text: {}",
                    what, err
                ));
                String::from_utf8_lossy(bytes).into_owned()
            }
        }
    }
}

impl<T: Clone> Clone for LoggingInterceptor<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            config: self.config.clone(),
            policy: self.policy.clone(),
            sink: self.sink.clone(),
        }
    }
}

#[async_trait]
impl<T: Transport> Transport for LoggingInterceptor<T> {
    type Response = InterceptedResponse<T::Response>;

    async fn execute(&self, request: Request, body: Bytes) -> Result<Self::Response> {
        self.intercept(request, body).await
    }
}
