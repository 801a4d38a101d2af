// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use qrcode::bits::Bits;
use qrcode::types::{EcLevel, Version};
use qrcode::QrCode;

use crate::error::QrCodeError;

/// The QR payload prefix for a single, unchunked card.
pub const SINGLE_PREFIX: &str = "shc:/";

/// Splits `jws` into the `shc:/` (or `shc:/i/N/`) prefixes and numeric
/// bodies for one or more QR codes, per `spec.md` §4.5.
///
/// Returns one `(prefix, numeric_digits)` pair when the JWS fits within
/// `max_single_qr_size`, or `N` pairs when chunking is required. `Err`
/// only when the JWS overflows `max_single_qr_size` and chunking is
/// disabled.
pub fn build_segments(jws: &str, max_single_qr_size: usize, enable_chunking: bool) -> Result<Vec<(String, String)>, QrCodeError> {
  if jws.len() > max_single_qr_size && !enable_chunking {
    return Err(QrCodeError::Overflow {
      length: jws.len(),
      max: max_single_qr_size,
    });
  }

  let numeric = shc_core::numeric::encode_jws_to_numeric(jws)?;

  if jws.len() <= max_single_qr_size {
    return Ok(vec![(SINGLE_PREFIX.to_owned(), numeric)]);
  }

  let chunk_size = max_single_qr_size.saturating_sub(20).max(1);
  let chunks: Vec<&str> = chunk_str(&numeric, chunk_size);
  let total = chunks.len();

  Ok(
    chunks
      .into_iter()
      .enumerate()
      .map(|(zero_based, chunk)| (format!("shc:/{}/{}/", zero_based + 1, total), chunk.to_owned()))
      .collect(),
  )
}

fn chunk_str(s: &str, chunk_size: usize) -> Vec<&str> {
  let bytes = s.as_bytes();
  let chunk_count = (bytes.len() + chunk_size - 1) / chunk_size;
  let mut out = Vec::with_capacity(chunk_count);
  let mut start = 0;
  while start < bytes.len() {
    let end = (start + chunk_size).min(bytes.len());
    out.push(&s[start..end]);
    start = end;
  }
  out
}

/// Builds the two-segment (byte `prefix` + numeric `digits`) QR symbol,
/// trying increasing QR versions until the content fits — the `qrcode`
/// crate's `Bits` builder requires a fixed version upfront, so there is
/// no single "auto" entry point for multi-segment data.
pub fn build_qr_code(prefix: &str, digits: &str, ec_level: EcLevel) -> Result<QrCode, QrCodeError> {
  for version_number in 1..=40 {
    let version = Version::Normal(version_number);
    let mut bits = Bits::new(version);
    let fits = bits.push_byte_data(prefix.as_bytes()).is_ok()
      && bits.push_numeric_data(digits.as_bytes()).is_ok()
      && bits.push_terminator(ec_level).is_ok();
    if fits {
      return QrCode::with_bits(bits, ec_level).map_err(|e| QrCodeError::Encoding(e.to_string()));
    }
  }
  Err(QrCodeError::Encoding(format!(
    "content ({} prefix bytes + {} numeric digits) does not fit in any QR version",
    prefix.len(),
    digits.len()
  )))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fits_in_single_qr_below_threshold() {
    let segments = build_segments("a".repeat(100).as_str(), 1195, false).unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].0, "shc:/");
  }

  #[test]
  fn exactly_at_threshold_is_single() {
    let jws = "a".repeat(1195);
    let segments = build_segments(&jws, 1195, false).unwrap();
    assert_eq!(segments.len(), 1);
  }

  #[test]
  fn one_over_threshold_without_chunking_fails() {
    let jws = "a".repeat(1196);
    assert!(build_segments(&jws, 1195, false).is_err());
  }

  #[test]
  fn one_over_threshold_with_chunking_succeeds_and_numbers_chunks() {
    let jws = "a".repeat(1196);
    let segments = build_segments(&jws, 1195, true).unwrap();
    assert!(segments.len() >= 2);
    assert_eq!(segments[0].0, format!("shc:/1/{}/", segments.len()));
  }

  #[test]
  fn chunk_count_matches_ceil_division() {
    let jws = "a".repeat(1195 * 3 + 1);
    let segments = build_segments(&jws, 1195, true).unwrap();
    let numeric_len = jws.len() * 2;
    let chunk_size = 1195 - 20;
    let expected = (numeric_len + chunk_size - 1) / chunk_size;
    assert_eq!(segments.len(), expected);
  }
}
