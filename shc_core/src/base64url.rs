// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

//! RFC 4648 §5 base64url, matching the flexibility `identity_jose`'s `jwu`
//! helpers give callers: no padding on output, but padding and the
//! standard `+/` alphabet both accepted on input.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::engine::Engine;

use crate::error::CodecError;

/// Encodes `bytes` as unpadded base64url text.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
  URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes base64url (or, leniently, standard base64) text, with or
/// without padding, into raw bytes.
pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, CodecError> {
  let input = input.as_ref();

  for engine in [&URL_SAFE_NO_PAD, &URL_SAFE, &STANDARD_NO_PAD, &STANDARD] {
    if let Ok(decoded) = engine.decode(input) {
      return Ok(decoded);
    }
  }

  Err(CodecError::InvalidBase64(format!(
    "could not decode {} base64(url) characters",
    input.len()
  )))
}
