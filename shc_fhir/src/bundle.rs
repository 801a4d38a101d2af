// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A FHIR R4 Bundle, represented as generic order-preserving JSON rather
/// than a typed resource model: FHIR resources are open-ended and this
/// library only ever inspects the handful of keys `spec.md` names
/// (`resourceType`, `type`, `entry`, `fullUrl`, `resource`, `id`, `meta`,
/// `security`, `text`, `contained`, `extension`, `modifierExtension`,
/// `coding`, `display`, `reference`). Field order is preserved via
/// `serde_json`'s `preserve_order` feature, the same role `indexmap` plays
/// for `identity_core::common::Object`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle(pub Value);

impl Bundle {
  /// Wraps an already-parsed JSON document without validating it; use
  /// [`crate::FhirBundleProcessor::validate`] to check invariants.
  pub fn new(value: Value) -> Self {
    Self(value)
  }

  pub fn as_value(&self) -> &Value {
    &self.0
  }

  pub fn into_value(self) -> Value {
    self.0
  }

  pub fn resource_type(&self) -> Option<&str> {
    self.0.get("resourceType").and_then(Value::as_str)
  }

  pub fn bundle_type(&self) -> Option<&str> {
    self.0.get("type").and_then(Value::as_str)
  }

  pub fn entries(&self) -> Option<&Vec<Value>> {
    self.0.get("entry").and_then(Value::as_array)
  }

  pub fn set_type(&mut self, bundle_type: &str) {
    if let Value::Object(map) = &mut self.0 {
      map.insert("type".to_owned(), Value::String(bundle_type.to_owned()));
    }
  }
}

impl From<Value> for Bundle {
  fn from(value: Value) -> Self {
    Self(value)
  }
}

impl From<Bundle> for Value {
  fn from(bundle: Bundle) -> Self {
    bundle.0
  }
}
