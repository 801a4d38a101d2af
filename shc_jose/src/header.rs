// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// The raw-DEFLATE marker; the only permitted non-absent `zip` value
/// (`spec.md` §6).
pub const DEFLATE_ZIP: &str = "DEF";

/// The protected JWS header: `{ alg: "ES256", kid, typ: "JWT", zip? }`.
/// The sole authority for whether the payload bytes need INFLATE
/// (`spec.md` §3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwsHeader {
  pub alg: String,
  pub kid: String,
  pub typ: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub zip: Option<String>,
}

impl JwsHeader {
  pub fn new(kid: impl Into<String>) -> Self {
    Self {
      alg: "ES256".to_owned(),
      kid: kid.into(),
      typ: "JWT".to_owned(),
      zip: None,
    }
  }

  pub fn with_compression(mut self, enabled: bool) -> Self {
    self.zip = enabled.then(|| DEFLATE_ZIP.to_owned());
    self
  }

  pub fn is_deflated(&self) -> bool {
    self.zip.as_deref() == Some(DEFLATE_ZIP)
  }
}
