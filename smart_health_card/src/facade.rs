// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;
use shc_credential::{JwtPayload, Vc, VcOptions, VerifiableCredentialProcessor};
use shc_fhir::{Bundle, FhirBundleProcessor};
use shc_jose::JwsProcessor;

use crate::config::SmartHealthCardConfig;
use crate::error::SmartHealthCardError;
use crate::file::{FileBlob, FILE_MIME_TYPE};

/// Orchestrates the full create/verify pipeline (`spec.md` §4.6). Every
/// operation is one-shot and side-effect free beyond the entropy
/// consumed by signing; the processors it drives are all stateless.
pub struct SmartHealthCard {
  config: SmartHealthCardConfig,
}

impl SmartHealthCard {
  pub fn new(config: SmartHealthCardConfig) -> Self {
    Self { config }
  }

  /// Normalizes (and, if configured, QR-optimizes) `bundle`, wraps it in
  /// a VC, builds the JWT payload, and signs it. Ordering is strictly
  /// normalize → VC wrap → compress → sign (`spec.md` §5).
  #[tracing::instrument(name = "smart_health_card_create", skip_all, err)]
  pub fn create(&self, bundle: Bundle, vc_options: VcOptions) -> Result<String, SmartHealthCardError> {
    let signer = self.config.private_key.as_deref().ok_or(SmartHealthCardError::MissingPrivateKey)?;

    let processor = FhirBundleProcessor;
    let processed = if self.config.enable_qr_optimization {
      processor.process_for_qr(&bundle)?
    } else {
      processor.process(&bundle)?
    };

    let vc = VerifiableCredentialProcessor.create(processed, vc_options);

    let nbf = now_unix_seconds();
    let exp = self.config.expiration_seconds.map(|seconds| nbf + seconds);
    let payload = JwtPayload {
      iss: self.config.issuer.clone(),
      nbf,
      exp,
      vc,
    };

    let jws = JwsProcessor.sign(&payload, signer, &self.config.kid, self.config.enable_compression)?;
    Ok(jws)
  }

  /// Verifies `jws`'s signature before ever decompressing the payload,
  /// then re-validates the VC envelope.
  #[tracing::instrument(name = "smart_health_card_verify", skip_all, err)]
  pub fn verify(&self, jws: &str) -> Result<Vc, SmartHealthCardError> {
    let verifier = self.config.public_key.as_deref().ok_or(SmartHealthCardError::MissingPublicKey)?;
    let payload = JwsProcessor.verify(jws, verifier)?;
    VerifiableCredentialProcessor.validate(&payload.vc)?;
    Ok(payload.vc)
  }

  /// Convenience: `verify(jws).credentialSubject.fhirBundle`.
  pub fn get_bundle(&self, jws: &str) -> Result<Bundle, SmartHealthCardError> {
    Ok(self.verify(jws)?.credential_subject.fhir_bundle)
  }

  /// `{"verifiableCredential":[<jws>]}` as a JSON string.
  pub fn create_file(&self, bundle: Bundle, vc_options: VcOptions) -> Result<String, SmartHealthCardError> {
    let jws = self.create(bundle, vc_options)?;
    Ok(serde_json::json!({"verifiableCredential": [jws]}).to_string())
  }

  /// Same content as [`Self::create_file`], paired with the
  /// `application/smart-health-card` MIME type.
  pub fn create_file_blob(&self, bundle: Bundle, vc_options: VcOptions) -> Result<FileBlob, SmartHealthCardError> {
    let contents = self.create_file(bundle, vc_options)?;
    Ok(FileBlob {
      contents,
      mime_type: FILE_MIME_TYPE,
    })
  }

  /// Parses a `.smart-health-card` file and verifies its first entry.
  #[tracing::instrument(name = "smart_health_card_verify_file", skip_all, err)]
  pub fn verify_file(&self, contents: &str) -> Result<Vc, SmartHealthCardError> {
    let document: Value = serde_json::from_str(contents).map_err(|e| SmartHealthCardError::FileFormat(e.to_string()))?;

    let entries = document
      .get("verifiableCredential")
      .and_then(Value::as_array)
      .ok_or_else(|| SmartHealthCardError::FileFormat("missing \"verifiableCredential\" array".to_owned()))?;

    let first = entries
      .first()
      .and_then(Value::as_str)
      .ok_or_else(|| SmartHealthCardError::FileFormat("\"verifiableCredential\" array is empty".to_owned()))?;

    self.verify(first)
  }
}

fn now_unix_seconds() -> i64 {
  time::OffsetDateTime::now_utc().unix_timestamp()
}
