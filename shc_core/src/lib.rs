// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

//! Codec primitives shared by every SMART Health Cards processor crate:
//! base64url, raw DEFLATE/INFLATE, and the numeric↔base64url transcoding
//! used for QR payloads.
//!
//! Nothing in this crate knows about FHIR, Verifiable Credentials, JWS, or
//! QR segmenting — it is the bit-twiddling layer the rest of the workspace
//! builds on, the same role `identity_core` plays for the teacher
//! lineage.

pub mod base64url;
pub mod deflate;
pub mod error;
pub mod numeric;

pub use error::CodecError;
