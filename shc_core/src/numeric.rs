// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

//! The SMART Health Cards numeric QR encoding: each base64url character of
//! a compact JWS maps to the two-digit zero-padded decimal `ord(c) − 45`,
//! so QR readers can store the JWS in "numeric mode" (denser than byte
//! mode for this alphabet).

use crate::error::CodecError;

const OFFSET: u32 = 45;
const MAX_PAIR: u32 = 77;

/// Encodes every character of `jws` (a compact-serialization JWS string,
/// restricted to the base64url alphabet plus `.`) into a two-digit decimal
/// pair.
pub fn encode_jws_to_numeric(jws: &str) -> Result<String, CodecError> {
  let mut out = String::with_capacity(jws.len() * 2);
  for c in jws.chars() {
    let code = c as u32;
    let pair = code
      .checked_sub(OFFSET)
      .filter(|&p| p <= MAX_PAIR)
      .ok_or_else(|| CodecError::InvalidNumeric(format!("character '{c}' is outside the encodable range")))?;
    out.push_str(&format!("{pair:02}"));
  }
  Ok(out)
}

/// Inverse of [`encode_jws_to_numeric`].
pub fn decode_numeric_to_jws(numeric: &str) -> Result<String, CodecError> {
  if numeric.len() % 2 != 0 {
    return Err(CodecError::InvalidNumeric(format!(
      "numeric payload has odd length {}",
      numeric.len()
    )));
  }
  if !numeric.bytes().all(|b| b.is_ascii_digit()) {
    return Err(CodecError::InvalidNumeric("numeric payload contains non-digit characters".to_owned()));
  }

  let bytes = numeric.as_bytes();
  let mut out = String::with_capacity(numeric.len() / 2);
  for pair in bytes.chunks_exact(2) {
    // Safety of the unwrap: both bytes were just checked to be ASCII digits.
    let pair_str = std::str::from_utf8(pair).unwrap();
    let value: u32 = pair_str.parse().unwrap();
    if value > MAX_PAIR {
      return Err(CodecError::InvalidNumeric(format!("digit pair '{pair_str}' exceeds {MAX_PAIR}")));
    }
    let code = value + OFFSET;
    let c = char::from_u32(code)
      .ok_or_else(|| CodecError::InvalidNumeric(format!("digit pair '{pair_str}' decodes to an invalid character")))?;
    out.push(c);
  }
  Ok(out)
}
