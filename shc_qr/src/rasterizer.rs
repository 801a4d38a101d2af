// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

use base64::engine::general_purpose::STANDARD;
use base64::engine::Engine;
use image::Luma;
use qrcode::QrCode;

use crate::config::EncodeOptions;
use crate::error::QrCodeError;

/// Turns an already-built QR symbol matrix into a raster output. This is
/// the host-supplied collaborator named in `spec.md` §2: the two-segment
/// byte/numeric symbol construction (`crate::symbol::build_qr_code`) is
/// this crate's own responsibility; only the matrix-to-image step is
/// pluggable.
pub trait QrRasterizer {
  fn rasterize(&self, code: &QrCode, options: &EncodeOptions) -> Result<String, QrCodeError>;
}

/// Renders to a grayscale PNG and returns a `data:image/png;base64,...`
/// URL, the same shape `generate_emergency_qr`/`generate_qr_code`
/// produce for their callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngDataUrlRasterizer;

impl QrRasterizer for PngDataUrlRasterizer {
  fn rasterize(&self, code: &QrCode, options: &EncodeOptions) -> Result<String, QrCodeError> {
    let image = code
      .render::<Luma<u8>>()
      .quiet_zone(options.margin > 0)
      .module_dimensions(options.scale, options.scale)
      .build();

    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image::DynamicImage::ImageLuma8(image)
      .write_to(&mut cursor, image::ImageFormat::Png)
      .map_err(|e| QrCodeError::Encoding(e.to_string()))?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(buffer)))
  }
}
