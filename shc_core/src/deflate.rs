// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

//! Raw RFC 1951 DEFLATE, with neither a zlib header/adler32 trailer nor a
//! gzip wrapper — the `zip:"DEF"` format SMART Health Cards requires.
//!
//! `flate2`'s `Deflate*` types (as opposed to `Zlib*`/`Gz*`) are already
//! exactly this: no header, no trailer. This mirrors the raw-deflate use
//! `identity_credential`/`identity_document`/`identity_did` make of
//! `flate2` for their revocation bitmaps.

use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::error::CodecError;

/// Compresses `bytes` into a raw DEFLATE stream.
pub fn compress(bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
  let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
  encoder
    .write_all(bytes)
    .map_err(|err| CodecError::CompressionFailed(err.to_string()))?;
  encoder.finish().map_err(|err| CodecError::CompressionFailed(err.to_string()))
}

/// Inflates a raw DEFLATE stream produced by [`compress`] (or by any other
/// conforming encoder).
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
  let mut decoder = DeflateDecoder::new(bytes);
  let mut out = Vec::new();
  decoder
    .read_to_end(&mut out)
    .map_err(|err| CodecError::InvalidDeflate(err.to_string()))?;
  Ok(out)
}
