// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! In-memory response and transport stubs for unit tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;

use crate::error::{Error, Result};
use crate::http::{BodyStream, ClientResponse, Request};
use crate::transport::Transport;

/// Response whose body can be taken once
#[derive(Debug)]
pub(crate) struct StubResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    chunks: Option<Vec<Result<Bytes>>>,
    pub body_calls: Arc<AtomicUsize>,
    pub closed: Arc<AtomicBool>,
}

impl StubResponse {
    pub fn ok(body: &'static str) -> Self {
        Self::with_chunks(vec![Ok(Bytes::from_static(body.as_bytes()))])
    }

    pub fn with_chunks(chunks: Vec<Result<Bytes>>) -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            chunks: Some(chunks),
            body_calls: Arc::new(AtomicUsize::new(0)),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.append(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
        self
    }

    pub fn body_calls(&self) -> usize {
        self.body_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClientResponse for StubResponse {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    async fn body(&mut self) -> Result<BodyStream> {
        self.body_calls.fetch_add(1, Ordering::SeqCst);
        let chunks = self.chunks.take().ok_or(Error::BodyConsumed)?;
        Ok(Box::pin(stream::iter(chunks)))
    }

    fn close(&mut self) {
        self.chunks = None;
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Transport that returns one canned outcome and records what it was sent
pub(crate) struct StubTransport {
    outcome: Mutex<Option<Result<StubResponse>>>,
    pub sent: Mutex<Vec<(Request, Bytes)>>,
}

impl StubTransport {
    pub fn responding(response: StubResponse) -> Self {
        Self {
            outcome: Mutex::new(Some(Ok(response))),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: Error) -> Self {
        Self {
            outcome: Mutex::new(Some(Err(err))),
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for StubTransport {
    type Response = StubResponse;

    async fn execute(&self, request: Request, body: Bytes) -> Result<StubResponse> {
        self.sent.lock().push((request, body));
        self.outcome
            .lock()
            .take()
            .unwrap_or_else(|| Err(Error::transport("no stubbed response left")))
    }
}
