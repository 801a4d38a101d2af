// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

//! The W3C Verifiable Credential envelope and JWT payload shape used by
//! SMART Health Cards, built on top of [`shc_fhir::Bundle`].

pub mod processor;
pub mod vc;

pub use processor::{VcOptions, VerifiableCredentialProcessor};
pub use vc::{CredentialSubject, JwtPayload, Vc, DEFAULT_FHIR_VERSION, HEALTH_CARD_TYPE};
