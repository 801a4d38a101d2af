// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

/// The `.smart-health-card` file MIME type (`spec.md` §3, §6).
pub const FILE_MIME_TYPE: &str = "application/smart-health-card";

/// File content paired with its MIME type, the shape
/// [`crate::SmartHealthCard::create_file_blob`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlob {
  pub contents: String,
  pub mime_type: &'static str,
}
