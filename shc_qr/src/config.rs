// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use qrcode::types::EcLevel;

/// Rasterization knobs passed through to the [`crate::QrRasterizer`]
/// (`spec.md` §4.5): error-correction level, module scale, and
/// quiet-zone margin. `version` is left unset (auto-selected) per spec.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
  pub error_correction: EcLevel,
  pub scale: u32,
  pub margin: u32,
}

impl Default for EncodeOptions {
  fn default() -> Self {
    Self {
      error_correction: EcLevel::L,
      scale: 4,
      margin: 1,
    }
  }
}

/// Configuration for [`crate::QrGenerator`]: `maxSingleQrSize` (default
/// 1195 JWS characters), whether chunking is permitted, and the
/// rasterization options.
#[derive(Debug, Clone)]
pub struct QrConfig {
  pub max_single_qr_size: usize,
  pub enable_chunking: bool,
  pub encode_options: EncodeOptions,
}

impl Default for QrConfig {
  fn default() -> Self {
    Self {
      max_single_qr_size: 1195,
      enable_chunking: false,
      encode_options: EncodeOptions::default(),
    }
  }
}
