// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

//! FHIR R4 Bundle normalization, structural validation, and the
//! QR-size-optimization rewrite used by SMART Health Cards.

pub mod bundle;
pub mod error;
mod optimize;
pub mod processor;

pub use bundle::Bundle;
pub use error::FhirValidationError;
pub use processor::FhirBundleProcessor;
