// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response body streams

use bytes::{Bytes, BytesMut};
use futures::stream::{self, BoxStream, TryStreamExt};

use crate::error::Result;

/// Single-consumption stream of body chunks
pub type BodyStream = BoxStream<'static, Result<Bytes>>;

/// Stream that yields `bytes` as one chunk
pub fn once(bytes: Bytes) -> BodyStream {
    Box::pin(stream::once(async move { Ok(bytes) }))
}

/// Stream with no chunks
pub fn empty() -> BodyStream {
    Box::pin(stream::empty())
}

/// Drain a stream into one contiguous buffer
pub async fn collect(mut stream: BodyStream) -> Result<Bytes> {
    let mut buf = BytesMut::new();
    while let Some(chunk) = stream.try_next().await? {
        buf.extend_from_slice(&chunk);
    }
    Ok(buf.freeze())
}

/// Strict UTF-8 view of body bytes
pub fn decode_utf8(bytes: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(bytes)?)
}
