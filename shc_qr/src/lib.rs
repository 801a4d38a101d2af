// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

//! Numeric QR encoding, chunked segmenting, and rasterization for SMART
//! Health Cards.

pub mod config;
pub mod error;
pub mod generator;
pub mod rasterizer;
mod symbol;

pub use config::{EncodeOptions, QrConfig};
pub use error::QrCodeError;
pub use generator::QrGenerator;
pub use rasterizer::{PngDataUrlRasterizer, QrRasterizer};
