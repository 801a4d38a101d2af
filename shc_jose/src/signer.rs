// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::pkcs8::{DecodePrivateKey, DecodePublicKey};
use signature::{Signer as _, Verifier as _};

use crate::error::JwsError;

/// An ES256 signer, supplied by the host environment (`spec.md` §2's
/// "external collaborator" for signing). The core only depends on this
/// trait, not on any particular key-management scheme.
pub trait JwsSigner {
  /// Produces a fixed 64-byte P1363 (r‖s) signature over `signing_input`.
  fn sign(&self, signing_input: &[u8]) -> Result<Vec<u8>, JwsError>;
}

/// An ES256 verifier counterpart to [`JwsSigner`].
pub trait JwsVerifier {
  /// Accepts only a fixed 64-byte P1363 signature; low-s is not required
  /// (`spec.md` §4.4 step 4).
  fn verify(&self, signing_input: &[u8], signature: &[u8]) -> Result<(), JwsError>;
}

/// A concrete ES256 signer backed by a P-256 [`SigningKey`].
pub struct P256Signer(SigningKey);

impl P256Signer {
  pub fn from_pkcs8_pem(pem: &str) -> Result<Self, JwsError> {
    SigningKey::from_pkcs8_pem(pem).map(Self).map_err(|e| JwsError::KeyImport(e.to_string()))
  }

  pub fn from_pkcs8_der(der: &[u8]) -> Result<Self, JwsError> {
    SigningKey::from_pkcs8_der(der).map(Self).map_err(|e| JwsError::KeyImport(e.to_string()))
  }

  pub fn from_signing_key(key: SigningKey) -> Self {
    Self(key)
  }
}

impl JwsSigner for P256Signer {
  fn sign(&self, signing_input: &[u8]) -> Result<Vec<u8>, JwsError> {
    let signature: Signature = self.0.try_sign(signing_input).map_err(|e| JwsError::Signing(e.to_string()))?;
    Ok(signature.to_bytes().to_vec())
  }
}

/// A concrete ES256 verifier backed by a P-256 [`VerifyingKey`].
pub struct P256Verifier(VerifyingKey);

impl P256Verifier {
  pub fn from_public_key_pem(pem: &str) -> Result<Self, JwsError> {
    VerifyingKey::from_public_key_pem(pem).map(Self).map_err(|e| JwsError::KeyImport(e.to_string()))
  }

  pub fn from_public_key_der(der: &[u8]) -> Result<Self, JwsError> {
    VerifyingKey::from_public_key_der(der).map(Self).map_err(|e| JwsError::KeyImport(e.to_string()))
  }

  pub fn from_verifying_key(key: VerifyingKey) -> Self {
    Self(key)
  }

  pub fn from_signer(signer: &P256Signer) -> Self {
    Self(VerifyingKey::from(&signer.0))
  }
}

impl JwsVerifier for P256Verifier {
  fn verify(&self, signing_input: &[u8], signature: &[u8]) -> Result<(), JwsError> {
    let signature = Signature::from_slice(signature).map_err(|e| JwsError::Verification(e.to_string()))?;
    self
      .0
      .verify(signing_input, &signature)
      .map_err(|e| JwsError::Verification(e.to_string()))
  }
}
