// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use shc_credential::JwtPayload;
use shc_core::{base64url, deflate};

use crate::error::JwsError;
use crate::header::JwsHeader;
use crate::signer::{JwsSigner, JwsVerifier};

/// Builds and verifies compact JWS over ES256 with pre-signature raw
/// DEFLATE of the payload (`spec.md` §4.4). Stateless: every call is
/// self-contained given the key material the caller supplies.
#[derive(Debug, Default, Clone, Copy)]
pub struct JwsProcessor;

impl JwsProcessor {
  /// Serializes `payload`, optionally DEFLATEs it, then signs
  /// `base64url(header) + "." + base64url(payload)` with `signer`.
  pub fn sign(
    &self,
    payload: &JwtPayload,
    signer: &dyn JwsSigner,
    kid: &str,
    enable_compression: bool,
  ) -> Result<String, JwsError> {
    validate_payload(payload)?;

    let payload_json = serde_json::to_vec(payload).map_err(|e| JwsError::InvalidPayload { reason: e.to_string() })?;

    let payload_bytes = if enable_compression {
      deflate::compress(&payload_json).map_err(|e| JwsError::Compression(e.to_string()))?
    } else {
      payload_json
    };

    let header = JwsHeader::new(kid).with_compression(enable_compression);
    let header_json = serde_json::to_vec(&header).map_err(|e| JwsError::Format(e.to_string()))?;

    let b64h = base64url::encode(header_json);
    let b64p = base64url::encode(payload_bytes);
    let signing_input = format!("{b64h}.{b64p}");

    let signature = signer.sign(signing_input.as_bytes())?;
    let b64sig = base64url::encode(signature);

    Ok(format!("{signing_input}.{b64sig}"))
  }

  /// Verifies the signature over the authenticated `header.payload`
  /// bytes before ever looking at the (possibly compressed) payload
  /// content — signature verification happens strictly before
  /// decompression (`spec.md` §5).
  pub fn verify(&self, jws: &str, verifier: &dyn JwsVerifier) -> Result<JwtPayload, JwsError> {
    let (header, b64h, b64p, b64sig) = split_and_parse_header(jws)?;

    let signing_input = format!("{b64h}.{b64p}");
    let signature = base64url::decode(b64sig).map_err(|e| JwsError::Format(e.to_string()))?;
    verifier.verify(signing_input.as_bytes(), &signature)?;

    let payload_bytes = base64url::decode(b64p).map_err(|e| JwsError::Format(e.to_string()))?;
    decode_payload(&header, &payload_bytes)
  }

  /// Unauthenticated parse of header and payload, for diagnostics. Uses
  /// the same decompression rule as [`Self::verify`] and still rejects a
  /// payload that fails structural validation.
  pub fn decode(&self, jws: &str) -> Result<JwtPayload, JwsError> {
    let (header, _b64h, b64p, _b64sig) = split_and_parse_header(jws)?;
    let payload_bytes = base64url::decode(b64p).map_err(|e| JwsError::Format(e.to_string()))?;
    decode_payload(&header, &payload_bytes)
  }
}

fn split_and_parse_header(jws: &str) -> Result<(JwsHeader, &str, &str, &str), JwsError> {
  let parts: Vec<&str> = jws.split('.').collect();
  if parts.len() != 3 {
    return Err(JwsError::Format(format!(
      "expected 3 dot-separated parts, found {}",
      parts.len()
    )));
  }
  let (b64h, b64p, b64sig) = (parts[0], parts[1], parts[2]);
  if b64h.is_empty() || b64p.is_empty() || b64sig.is_empty() {
    return Err(JwsError::Format("JWS parts must be non-empty".to_owned()));
  }

  let header_bytes = base64url::decode(b64h).map_err(|e| JwsError::Format(e.to_string()))?;
  let header: JwsHeader =
    serde_json::from_slice(&header_bytes).map_err(|e| JwsError::Format(format!("invalid header JSON: {e}")))?;

  if header.alg != "ES256" {
    return Err(JwsError::AlgorithmMismatch { found: header.alg.clone() });
  }

  Ok((header, b64h, b64p, b64sig))
}

fn decode_payload(header: &JwsHeader, payload_bytes: &[u8]) -> Result<JwtPayload, JwsError> {
  let plain = if header.is_deflated() {
    deflate::decompress(payload_bytes).map_err(|e| JwsError::Decompression(e.to_string()))?
  } else {
    payload_bytes.to_vec()
  };

  let payload: JwtPayload =
    serde_json::from_slice(&plain).map_err(|e| JwsError::Format(format!("invalid payload JSON: {e}")))?;
  validate_payload(&payload)?;
  Ok(payload)
}

fn validate_payload(payload: &JwtPayload) -> Result<(), JwsError> {
  if payload.iss.is_empty() {
    return Err(JwsError::InvalidPayload {
      reason: "iss must be non-empty".to_owned(),
    });
  }
  // nbf is modeled as i64 seconds, so it is always finite by construction.
  if let Some(exp) = payload.exp {
    if exp <= payload.nbf {
      return Err(JwsError::InvalidPayload {
        reason: format!("exp ({exp}) must be greater than nbf ({})", payload.nbf),
      });
    }
  }
  Ok(())
}
