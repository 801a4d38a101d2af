// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// JWS-layer failures: payload shape, key import, compression, signing,
/// verification, and format errors. All variants share the single stable
/// code `JWS_ERROR` (`spec.md` §7); the variant and message distinguish
/// the cause, the way `identity_jose`'s `Error` enum distinguishes JOSE
/// failure causes under one error type.
#[derive(Debug, Error)]
pub enum JwsError {
  #[error("invalid payload: {reason}")]
  InvalidPayload { reason: String },

  #[error("could not import key: {0}")]
  KeyImport(String),

  #[error("compression failed: {0}")]
  Compression(String),

  #[error("decompression failed: {0}")]
  Decompression(String),

  #[error("signing failed: {0}")]
  Signing(String),

  #[error("signature verification failed: {0}")]
  Verification(String),

  #[error("malformed JWS: {0}")]
  Format(String),

  #[error("unsupported algorithm {found:?}, expected \"ES256\"")]
  AlgorithmMismatch { found: String },
}

impl JwsError {
  pub fn code(&self) -> &'static str {
    "JWS_ERROR"
  }
}
