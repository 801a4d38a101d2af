// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Violations of the FHIR Bundle / Verifiable Credential structural
/// invariants (`spec.md` §3, §4.2, §4.3). Each variant names the first
/// offending field, the way `identity_credential`'s validator returns a
/// specific named error per violated invariant rather than one generic
/// "invalid" case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FhirValidationError {
  #[error("expected resourceType \"Bundle\", found {found:?}")]
  NotABundle { found: Option<String> },

  #[error("Bundle.type must be \"collection\", found {found:?}")]
  WrongBundleType { found: String },

  #[error("Bundle.entry must be an ordered array")]
  EntryNotSequence,

  #[error("Bundle.entry[{index}] is missing a typed resource")]
  EntryMissingResource { index: usize },

  #[error("{field} is invalid: {reason}")]
  InvalidField { field: String, reason: String },
}

impl FhirValidationError {
  pub fn code(&self) -> &'static str {
    "FHIR_VALIDATION_ERROR"
  }
}
