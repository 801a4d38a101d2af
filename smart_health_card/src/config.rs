// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use shc_jose::{JwsSigner, JwsVerifier};
use shc_qr::QrConfig;

/// Per-instance, immutable facade configuration (`spec.md` §3, §4.6).
/// Held for the lifetime of a [`crate::SmartHealthCard`]; never mutated
/// after construction, so a facade is safe to share across threads for
/// the read-only operations (`spec.md` §5).
#[derive(Clone)]
pub struct SmartHealthCardConfig {
  pub issuer: String,
  pub kid: String,
  pub private_key: Option<Arc<dyn JwsSigner + Send + Sync>>,
  pub public_key: Option<Arc<dyn JwsVerifier + Send + Sync>>,
  pub expiration_seconds: Option<i64>,
  pub enable_qr_optimization: bool,
  pub enable_compression: bool,
  pub qr: QrConfig,
}

impl SmartHealthCardConfig {
  pub fn new(issuer: impl Into<String>, kid: impl Into<String>) -> Self {
    Self {
      issuer: issuer.into(),
      kid: kid.into(),
      private_key: None,
      public_key: None,
      expiration_seconds: None,
      enable_qr_optimization: true,
      enable_compression: true,
      qr: QrConfig::default(),
    }
  }

  pub fn with_private_key(mut self, signer: Arc<dyn JwsSigner + Send + Sync>) -> Self {
    self.private_key = Some(signer);
    self
  }

  pub fn with_public_key(mut self, verifier: Arc<dyn JwsVerifier + Send + Sync>) -> Self {
    self.public_key = Some(verifier);
    self
  }

  pub fn with_expiration_seconds(mut self, seconds: i64) -> Self {
    self.expiration_seconds = Some(seconds);
    self
  }
}
