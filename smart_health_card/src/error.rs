// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use shc_fhir::FhirValidationError;
use shc_jose::JwsError;
use shc_qr::QrCodeError;
use thiserror::Error;

/// Facade-level error, composing the processor-layer error types
/// (`spec.md` §7) and adding the facade's own preconditions. Typed
/// errors bubble unchanged through `#[from]`; nothing here wraps a
/// stack trace, only the underlying message.
#[derive(Debug, Error)]
pub enum SmartHealthCardError {
  #[error(transparent)]
  Fhir(#[from] FhirValidationError),

  #[error(transparent)]
  Jws(#[from] JwsError),

  #[error(transparent)]
  Qr(#[from] QrCodeError),

  #[error("no public key configured for verification")]
  MissingPublicKey,

  #[error("no private key configured for signing")]
  MissingPrivateKey,

  #[error("malformed .smart-health-card file: {0}")]
  FileFormat(String),
}

impl SmartHealthCardError {
  pub fn code(&self) -> &'static str {
    match self {
      Self::Fhir(_) => "FHIR_VALIDATION_ERROR",
      Self::Jws(_) => "JWS_ERROR",
      Self::Qr(_) => "QR_CODE_ERROR",
      Self::MissingPublicKey => "VERIFICATION_ERROR",
      Self::MissingPrivateKey => "CREATION_ERROR",
      Self::FileFormat(_) => "FILE_FORMAT_ERROR",
    }
  }
}
