// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

//! Compact JWS construction and verification over ES256, with
//! pre-signature raw DEFLATE of the payload, for SMART Health Cards.

pub mod error;
pub mod header;
pub mod processor;
pub mod signer;

pub use error::JwsError;
pub use header::{JwsHeader, DEFLATE_ZIP};
pub use processor::JwsProcessor;
pub use signer::{JwsSigner, JwsVerifier, P256Signer, P256Verifier};
