// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use proptest::prelude::*;
use serde_json::json;
use shc_credential::{VcOptions, VerifiableCredentialProcessor};
use shc_fhir::Bundle;

fn valid_bundle() -> Bundle {
  Bundle::new(json!({"resourceType": "Bundle", "type": "collection", "entry": []}))
}

proptest! {
  #[test]
  fn any_three_part_numeric_version_is_accepted(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
    let processor = VerifiableCredentialProcessor;
    let options = VcOptions { fhir_version: Some(format!("{a}.{b}.{c}")), additional_types: vec![] };
    let vc = processor.create(valid_bundle(), options);
    prop_assert!(processor.validate(&vc).is_ok());
  }
}

#[test]
fn vc_serializes_without_legacy_context_or_verifiable_credential_type() {
  let processor = VerifiableCredentialProcessor;
  let vc = processor.create(valid_bundle(), VcOptions::default());
  let rendered = serde_json::to_value(&vc).unwrap();
  assert!(rendered.get("@context").is_none());
  assert!(!rendered["type"].as_array().unwrap().iter().any(|t| t == "VerifiableCredential"));
}
