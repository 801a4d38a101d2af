// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

//! The `SmartHealthCard` facade: FHIR Bundle in, signed compact JWS (or
//! `.smart-health-card` file) out, and back.
//!
//! Re-exports the processor crates' public types so most callers only
//! need this one crate: [`shc_fhir`], [`shc_credential`], [`shc_jose`],
//! and [`shc_qr`] remain usable directly for callers who want the
//! individual processors (`spec.md` §6).

pub mod config;
pub mod error;
mod facade;
mod file;

pub use config::SmartHealthCardConfig;
pub use error::SmartHealthCardError;
pub use facade::SmartHealthCard;
pub use file::{FileBlob, FILE_MIME_TYPE};

pub use shc_credential::VcOptions;
pub use shc_fhir::Bundle;
