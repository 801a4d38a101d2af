// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use crate::config::QrConfig;
use crate::error::QrCodeError;
use crate::rasterizer::QrRasterizer;
use crate::symbol::{self, SINGLE_PREFIX};

/// Numeric-encodes, segments/chunks, and rasterizes a JWS into one or
/// more QR codes; reassembles scanned QR content back into a JWS
/// (`spec.md` §4.5). Stateless aside from the `QrConfig` it's given.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrGenerator;

impl QrGenerator {
  pub fn generate_qr(&self, jws: &str, config: &QrConfig, rasterizer: &dyn QrRasterizer) -> Result<Vec<String>, QrCodeError> {
    let segments = symbol::build_segments(jws, config.max_single_qr_size, config.enable_chunking)?;
    segments
      .iter()
      .map(|(prefix, digits)| {
        let code = symbol::build_qr_code(prefix, digits, config.encode_options.error_correction)?;
        rasterizer.rasterize(&code, &config.encode_options)
      })
      .collect()
  }

  /// Returns the raw `shc:/...` QR content strings `generate_qr` would
  /// rasterize, without rasterizing them — useful for callers with their
  /// own rasterization pipeline, and for exercising the chunking law
  /// without a rasterizer.
  pub fn qr_contents(&self, jws: &str, config: &QrConfig) -> Result<Vec<String>, QrCodeError> {
    let segments = symbol::build_segments(jws, config.max_single_qr_size, config.enable_chunking)?;
    Ok(segments.into_iter().map(|(prefix, digits)| format!("{prefix}{digits}")).collect())
  }

  pub fn scan_qr(&self, contents: &[String]) -> Result<String, QrCodeError> {
    match contents {
      [] => Err(QrCodeError::EmptyInput),
      [single] if !is_chunk_format(single) => scan_single(single),
      many => scan_chunked(many),
    }
  }
}

/// Distinguishes `shc:/<digits>` from `shc:/<index>/<total>/<digits>`: a
/// lone QR whose content is itself chunk-formatted is one chunk of a
/// larger, incompletely-scanned set, not a complete single-symbol card.
fn is_chunk_format(content: &str) -> bool {
  content.strip_prefix(SINGLE_PREFIX).map(|rest| rest.contains('/')).unwrap_or(false)
}

fn scan_single(content: &str) -> Result<String, QrCodeError> {
  let digits = content.strip_prefix(SINGLE_PREFIX).ok_or(QrCodeError::MissingPrefix)?;
  if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
    return Err(QrCodeError::NonDigitData);
  }
  Ok(shc_core::numeric::decode_numeric_to_jws(digits)?)
}

struct Chunk {
  index: usize,
  total: usize,
  digits: String,
}

fn parse_chunk(content: &str) -> Result<Chunk, QrCodeError> {
  let rest = content.strip_prefix(SINGLE_PREFIX).ok_or(QrCodeError::MissingPrefix)?;
  let mut parts = rest.splitn(3, '/');
  let malformed = || QrCodeError::MalformedChunkHeader(content.to_owned());

  let index: usize = parts.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
  let total: usize = parts.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
  let digits = parts.next().ok_or_else(malformed)?;

  if index < 1 || index > total {
    return Err(malformed());
  }
  if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
    return Err(QrCodeError::NonDigitData);
  }

  Ok(Chunk {
    index,
    total,
    digits: digits.to_owned(),
  })
}

fn scan_chunked(contents: &[String]) -> Result<String, QrCodeError> {
  let mut chunks: Vec<Chunk> = contents.iter().map(|c| parse_chunk(c)).collect::<Result<_, _>>()?;

  let total = chunks[0].total;
  if !chunks.iter().all(|c| c.total == total) {
    return Err(QrCodeError::InconsistentChunkTotal);
  }

  let present: HashSet<usize> = chunks.iter().map(|c| c.index).collect();
  if present.len() != total {
    let missing: Vec<String> = (1..=total).filter(|i| !present.contains(i)).map(|i| i.to_string()).collect();
    return Err(QrCodeError::MissingChunks(missing.join(",")));
  }

  chunks.sort_by_key(|c| c.index);
  let numeric: String = chunks.into_iter().map(|c| c.digits).collect();
  Ok(shc_core::numeric::decode_numeric_to_jws(&numeric)?)
}
