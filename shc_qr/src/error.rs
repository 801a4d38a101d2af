// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// QR-layer failures: numeric transcode, content-shape, and size-overflow
/// errors, all under the single stable code `QR_CODE_ERROR`.
#[derive(Debug, Error)]
pub enum QrCodeError {
  #[error("JWS length {length} exceeds maxSingleQrSize {max} and chunking is disabled")]
  Overflow { length: usize, max: usize },

  #[error("no QR contents given")]
  EmptyInput,

  #[error("QR content is missing the \"shc:/\" prefix")]
  MissingPrefix,

  #[error("malformed chunk header: {0}")]
  MalformedChunkHeader(String),

  #[error("QR numeric segment contains non-digit data")]
  NonDigitData,

  #[error("chunked QR contents disagree on their total chunk count")]
  InconsistentChunkTotal,

  #[error("missing chunk(s): {0}")]
  MissingChunks(String),

  #[error("numeric transcoding failed: {0}")]
  NumericTranscode(#[from] shc_core::CodecError),

  #[error("QR symbol encoding failed: {0}")]
  Encoding(String),
}

impl QrCodeError {
  pub fn code(&self) -> &'static str {
    "QR_CODE_ERROR"
  }
}
