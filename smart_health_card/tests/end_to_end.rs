// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use p256::ecdsa::SigningKey;
use serde_json::json;
use shc_core::{base64url, numeric};
use shc_fhir::Bundle;
use shc_jose::{P256Signer, P256Verifier};
use shc_qr::{QrConfig, QrGenerator};
use smart_health_card::{SmartHealthCard, SmartHealthCardConfig, VcOptions};

fn b1() -> Bundle {
  Bundle::new(json!({
    "resourceType": "Bundle",
    "type": "collection",
    "entry": [
      {
        "fullUrl": "Patient/123",
        "resource": {
          "resourceType": "Patient",
          "id": "123",
          "name": [{"family": "Doe", "given": ["John"]}],
          "birthDate": "1990-01-01"
        }
      },
      {
        "fullUrl": "Immunization/456",
        "resource": {
          "resourceType": "Immunization",
          "id": "456",
          "status": "completed",
          "vaccineCode": {
            "coding": [{"system": "http://hl7.org/fhir/sid/cvx", "code": "207", "display": "COVID-19 vaccine"}]
          },
          "patient": {"reference": "Patient/123"},
          "occurrenceDateTime": "2023-01-15"
        }
      }
    ]
  }))
}

fn card() -> SmartHealthCard {
  let signing_key = SigningKey::from_bytes(p256::FieldBytes::from_slice(&[3u8; 32])).unwrap();
  let signer = Arc::new(P256Signer::from_signing_key(signing_key));
  let verifier = Arc::new(P256Verifier::from_signer(&signer));

  let config = SmartHealthCardConfig::new("https://issuer.example.org", "test-key-1")
    .with_private_key(signer)
    .with_public_key(verifier);

  SmartHealthCard::new(config)
}

#[test]
fn create_then_verify_returns_the_optimized_bundle() {
  let card = card();
  let jws = card.create(b1(), VcOptions::default()).unwrap();
  assert_eq!(jws.split('.').count(), 3);

  let vc = card.verify(&jws).unwrap();
  let bundle = vc.credential_subject.fhir_bundle;
  let entries = bundle.entries().unwrap();

  // Optimization rewrite: resource-scheme fullUrls.
  assert_eq!(entries[0]["fullUrl"], "resource:0");
  assert_eq!(entries[1]["fullUrl"], "resource:1");

  // No Patient.id / Immunization.id survive the rewrite.
  assert!(entries[0]["resource"].get("id").is_none());
  assert!(entries[1]["resource"].get("id").is_none());

  // coding[].display is dropped.
  assert!(entries[1]["resource"]["vaccineCode"]["coding"][0].get("display").is_none());

  // Immunization.patient.reference is rewritten to the Patient's short URI.
  assert_eq!(entries[1]["resource"]["patient"]["reference"], "resource:0");

  // Clinically essential data survives.
  assert_eq!(entries[0]["resource"]["name"][0]["family"], "Doe");
  assert_eq!(entries[1]["resource"]["vaccineCode"]["coding"][0]["code"], "207");
}

#[test]
fn numeric_encoding_matches_spec_worked_examples() {
  assert_eq!(numeric::encode_jws_to_numeric("-").unwrap(), "00");
  assert_eq!(numeric::encode_jws_to_numeric("A").unwrap(), "20");
  assert_eq!(numeric::encode_jws_to_numeric("a").unwrap(), "52");
  assert_eq!(numeric::encode_jws_to_numeric("z").unwrap(), "77");
  assert_eq!(numeric::encode_jws_to_numeric("0").unwrap(), "03");
  assert_eq!(numeric::encode_jws_to_numeric("9").unwrap(), "12");
}

#[test]
fn chunking_reassembles_to_the_original_jws() {
  let card = card();
  let jws = card.create(b1(), VcOptions::default()).unwrap();

  let config = QrConfig {
    max_single_qr_size: 100,
    enable_chunking: true,
    ..QrConfig::default()
  };
  let generator = QrGenerator;
  let contents = generator.qr_contents(&jws, &config).unwrap();

  let numeric_len = numeric::encode_jws_to_numeric(&jws).unwrap().len();
  let expected_chunks = (numeric_len + (100 - 20) - 1) / (100 - 20);
  assert_eq!(contents.len(), expected_chunks);

  let recovered = generator.scan_qr(&contents).unwrap();
  assert_eq!(recovered, jws);
}

#[test]
fn file_wrapper_round_trips() {
  let card = card();
  let file_contents = card.create_file(b1(), VcOptions::default()).unwrap();

  let parsed: serde_json::Value = serde_json::from_str(&file_contents).unwrap();
  let jws_array = parsed["verifiableCredential"].as_array().unwrap();
  assert_eq!(jws_array.len(), 1);

  let vc_from_file = card.verify_file(&file_contents).unwrap();
  let jws = jws_array[0].as_str().unwrap();
  let vc_from_direct_verify = card.verify(jws).unwrap();
  assert_eq!(vc_from_file, vc_from_direct_verify);
}

#[test]
fn verify_file_rejects_wrapper_missing_the_array() {
  let card = card();
  assert!(card.verify_file("{}").is_err());
  assert!(card.verify_file(r#"{"verifiableCredential":[]}"#).is_err());
}

#[test]
fn tampering_with_the_signature_fails_verification() {
  let card = card();
  let jws = card.create(b1(), VcOptions::default()).unwrap();

  let mut parts: Vec<&str> = jws.split('.').collect();
  let mut sig_bytes = base64url::decode(parts[2]).unwrap();
  sig_bytes[0] ^= 0xFF;
  let tampered_sig = base64url::encode(sig_bytes);
  parts[2] = &tampered_sig;
  let tampered = parts.join(".");

  assert!(card.verify(&tampered).is_err());
}

#[test]
fn verify_without_a_configured_public_key_fails() {
  let signing_key = SigningKey::from_bytes(p256::FieldBytes::from_slice(&[5u8; 32])).unwrap();
  let signer = Arc::new(P256Signer::from_signing_key(signing_key));
  let config = SmartHealthCardConfig::new("https://issuer.example.org", "test-key-2").with_private_key(signer);
  let card = SmartHealthCard::new(config);

  let jws = card.create(b1(), VcOptions::default()).unwrap();
  assert!(card.verify(&jws).is_err());
}
