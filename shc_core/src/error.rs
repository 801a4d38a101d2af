// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Failures from the codec primitives: base64url, raw DEFLATE, and the
/// SMART Health Cards numeric transcoding.
///
/// This is the innermost error type in the workspace; every other crate's
/// error type wraps it rather than re-stringifying its message.
#[derive(Debug, Error)]
pub enum CodecError {
  #[error("invalid base64url data: {0}")]
  InvalidBase64(String),

  #[error("invalid raw DEFLATE stream: {0}")]
  InvalidDeflate(String),

  #[error("DEFLATE compression failed: {0}")]
  CompressionFailed(String),

  #[error("invalid numeric-encoded QR payload: {0}")]
  InvalidNumeric(String),

  #[error("input is not valid UTF-8: {0}")]
  InvalidUtf8(String),
}

impl CodecError {
  /// Stable machine-readable error code, shared by every variant: codec
  /// failures always surface to callers as `QR_CODE_ERROR` or
  /// `JWS_ERROR` depending on which processor invoked them, so the code
  /// itself is assigned by the wrapping crate, not here.
  pub fn message(&self) -> String {
    self.to_string()
  }
}
