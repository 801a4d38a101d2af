// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;

use crate::bundle::Bundle;
use crate::error::FhirValidationError;
use crate::optimize;

/// Normalizes, validates, and optionally QR-optimizes FHIR Bundles.
/// Stateless: every method takes its Bundle by value or reference and
/// returns a fresh deep copy, matching `identity_document`'s treatment
/// of documents as immutable values.
#[derive(Debug, Default, Clone, Copy)]
pub struct FhirBundleProcessor;

impl FhirBundleProcessor {
  /// Deep-copies `bundle`, defaulting `type` to `"collection"` when
  /// absent. Fails only if `resourceType` is not `"Bundle"`.
  pub fn process(&self, bundle: &Bundle) -> Result<Bundle, FhirValidationError> {
    let mut copy = bundle.clone();

    match copy.resource_type() {
      Some("Bundle") => {}
      other => {
        return Err(FhirValidationError::NotABundle {
          found: other.map(str::to_owned),
        })
      }
    }

    if copy.bundle_type().is_none() {
      copy.set_type("collection");
    }

    Ok(copy)
  }

  /// Enforces invariants B1/B2 from `spec.md` §3: resourceType, bundle
  /// type, and that every entry carries a typed resource.
  pub fn validate(&self, bundle: &Bundle) -> Result<(), FhirValidationError> {
    match bundle.resource_type() {
      Some("Bundle") => {}
      other => {
        return Err(FhirValidationError::NotABundle {
          found: other.map(str::to_owned),
        })
      }
    }

    match bundle.bundle_type() {
      Some("collection") | None => {}
      Some(other) => {
        return Err(FhirValidationError::WrongBundleType {
          found: other.to_owned(),
        })
      }
    }

    match bundle.as_value().get("entry") {
      None => {}
      Some(Value::Array(entries)) => {
        for (index, entry) in entries.iter().enumerate() {
          let has_typed_resource = entry
            .get("resource")
            .and_then(Value::as_object)
            .is_some_and(|resource| resource.contains_key("resourceType"));
          if !has_typed_resource {
            return Err(FhirValidationError::EntryMissingResource { index });
          }
        }
      }
      Some(_) => return Err(FhirValidationError::EntryNotSequence),
    }

    Ok(())
  }

  /// Runs [`Self::process`], validates the result, then applies the
  /// QR-optimization rewrite (`spec.md` §4.2).
  pub fn process_for_qr(&self, bundle: &Bundle) -> Result<Bundle, FhirValidationError> {
    let processed = self.process(bundle)?;
    self.validate(&processed)?;
    let mut optimized = processed;
    optimize::optimize(&mut optimized);
    Ok(optimized)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

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

  #[test]
  fn process_rejects_non_bundle() {
    let processor = FhirBundleProcessor;
    let not_a_bundle = Bundle::new(json!({"resourceType": "Patient"}));
    let err = processor.process(&not_a_bundle).unwrap_err();
    assert_eq!(err.code(), "FHIR_VALIDATION_ERROR");
  }

  #[test]
  fn process_defaults_missing_type_to_collection() {
    let processor = FhirBundleProcessor;
    let bundle = Bundle::new(json!({"resourceType": "Bundle", "entry": []}));
    let processed = processor.process(&bundle).unwrap();
    assert_eq!(processed.bundle_type(), Some("collection"));
  }

  #[test]
  fn process_leaves_input_untouched() {
    let processor = FhirBundleProcessor;
    let original = b1();
    let before = original.clone();
    let _ = processor.process(&original).unwrap();
    assert_eq!(original, before);
  }

  #[test]
  fn process_is_idempotent() {
    let processor = FhirBundleProcessor;
    let once = processor.process(&b1()).unwrap();
    let twice = processor.process(&once).unwrap();
    assert_eq!(once, twice);
  }

  #[test]
  fn validate_rejects_non_collection_type() {
    let processor = FhirBundleProcessor;
    let batch = Bundle::new(json!({"resourceType": "Bundle", "type": "batch", "entry": []}));
    let err = processor.validate(&batch).unwrap_err();
    assert!(matches!(err, FhirValidationError::WrongBundleType { .. }));
  }

  #[test]
  fn validate_rejects_entry_without_typed_resource() {
    let processor = FhirBundleProcessor;
    let bundle = Bundle::new(json!({
      "resourceType": "Bundle",
      "type": "collection",
      "entry": [{"fullUrl": "Patient/1"}]
    }));
    let err = processor.validate(&bundle).unwrap_err();
    assert_eq!(err, FhirValidationError::EntryMissingResource { index: 0 });
  }

  #[test]
  fn validate_rejects_entry_that_is_not_a_sequence() {
    let processor = FhirBundleProcessor;
    let bundle = Bundle::new(json!({"resourceType": "Bundle", "type": "collection", "entry": {}}));
    let err = processor.validate(&bundle).unwrap_err();
    assert_eq!(err, FhirValidationError::EntryNotSequence);
  }

  #[test]
  fn process_for_qr_rewrites_b1_per_spec() {
    let processor = FhirBundleProcessor;
    let optimized = processor.process_for_qr(&b1()).unwrap();
    let entries = optimized.entries().unwrap();

    assert_eq!(entries[0]["fullUrl"], "resource:0");
    assert_eq!(entries[1]["fullUrl"], "resource:1");
    assert!(entries[0]["resource"].get("id").is_none());
    assert!(entries[1]["resource"].get("id").is_none());
    assert_eq!(entries[1]["resource"]["patient"]["reference"], "resource:0");
    assert!(entries[1]["resource"]["vaccineCode"]["coding"][0].get("display").is_none());
  }

  #[test]
  fn process_for_qr_is_a_fixed_point() {
    let processor = FhirBundleProcessor;
    let once = processor.process_for_qr(&b1()).unwrap();
    let twice = processor.process_for_qr(&once).unwrap();
    assert_eq!(once, twice);
  }

  #[test]
  fn meta_with_security_keeps_only_security() {
    let processor = FhirBundleProcessor;
    let bundle = Bundle::new(json!({
      "resourceType": "Bundle",
      "type": "collection",
      "entry": [{
        "fullUrl": "Patient/1",
        "resource": {
          "resourceType": "Patient",
          "meta": {"versionId": "1", "security": [{"system": "x", "code": "R"}]}
        }
      }]
    }));
    let optimized = processor.process_for_qr(&bundle).unwrap();
    let meta = &optimized.entries().unwrap()[0]["resource"]["meta"];
    assert!(meta.get("versionId").is_none());
    assert!(meta.get("security").is_some());
  }
}
