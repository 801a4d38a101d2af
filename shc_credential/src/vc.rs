// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use shc_fhir::Bundle;

/// The health-card type URI every `type` array MUST contain
/// (`spec.md` §3).
pub const HEALTH_CARD_TYPE: &str = "https://smarthealth.cards#health-card";

/// Default `fhirVersion` when the caller doesn't supply one.
pub const DEFAULT_FHIR_VERSION: &str = "4.0.1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialSubject {
  #[serde(rename = "fhirVersion")]
  pub fhir_version: String,
  #[serde(rename = "fhirBundle")]
  pub fhir_bundle: Bundle,
}

/// The `vc` claim: `{ type, credentialSubject }`. Deliberately omits the
/// legacy `@context` and `"VerifiableCredential"` type entry that older
/// SMART Health Cards validators emitted (`spec.md` §9 Open Question) —
/// this implementation follows the current v1.4 wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vc {
  #[serde(rename = "type")]
  pub types: Vec<String>,
  #[serde(rename = "credentialSubject")]
  pub credential_subject: CredentialSubject,
}

/// The JWT payload signed by `shc_jose`: `{ iss, nbf, exp?, vc }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtPayload {
  pub iss: String,
  pub nbf: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub exp: Option<i64>,
  pub vc: Vc,
}
