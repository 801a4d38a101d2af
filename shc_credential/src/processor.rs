// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use shc_fhir::{Bundle, FhirBundleProcessor, FhirValidationError};

use crate::vc::{CredentialSubject, Vc, DEFAULT_FHIR_VERSION, HEALTH_CARD_TYPE};

/// Optional knobs for [`VerifiableCredentialProcessor::create`].
#[derive(Debug, Default, Clone)]
pub struct VcOptions {
  pub fhir_version: Option<String>,
  pub additional_types: Vec<String>,
}

/// Builds and validates the `vc` envelope (`spec.md` §4.3).
#[derive(Debug, Default, Clone, Copy)]
pub struct VerifiableCredentialProcessor;

impl VerifiableCredentialProcessor {
  /// `type` is `[HEALTH_CARD_TYPE, ...options.additional_types]`;
  /// `fhirVersion` defaults to `"4.0.1"`. Does not itself validate the
  /// bundle or the resulting envelope — callers that need that
  /// guarantee should follow with [`Self::validate`].
  pub fn create(&self, bundle: Bundle, options: VcOptions) -> Vc {
    let mut types = vec![HEALTH_CARD_TYPE.to_owned()];
    types.extend(options.additional_types);

    Vc {
      types,
      credential_subject: CredentialSubject {
        fhir_version: options.fhir_version.unwrap_or_else(|| DEFAULT_FHIR_VERSION.to_owned()),
        fhir_bundle: bundle,
      },
    }
  }

  /// Enforces the VC invariants from `spec.md` §3: `type` contains the
  /// health-card URI, `fhirVersion` matches `^\d+\.\d+\.\d+$`, and
  /// `fhirBundle` is a structurally valid Bundle.
  pub fn validate(&self, vc: &Vc) -> Result<(), FhirValidationError> {
    if !vc.types.iter().any(|t| t == HEALTH_CARD_TYPE) {
      return Err(FhirValidationError::InvalidField {
        field: "vc.type".to_owned(),
        reason: format!("must contain {HEALTH_CARD_TYPE:?}"),
      });
    }

    if !is_semver_like(&vc.credential_subject.fhir_version) {
      return Err(FhirValidationError::InvalidField {
        field: "vc.credentialSubject.fhirVersion".to_owned(),
        reason: format!(
          "{:?} does not match ^\\d+\\.\\d+\\.\\d+$",
          vc.credential_subject.fhir_version
        ),
      });
    }

    FhirBundleProcessor.validate(&vc.credential_subject.fhir_bundle)?;

    Ok(())
  }
}

fn is_semver_like(value: &str) -> bool {
  let parts: Vec<&str> = value.split('.').collect();
  parts.len() == 3 && parts.iter().all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}
