//! Upload previewing: policy-driven validation of candidate files plus a
//! human-readable size formatter.
//!
//! Nothing here touches the filesystem. Callers describe a candidate with
//! [`FileMeta`] and the [`Uploader`] decides whether it may be selected and
//! later uploaded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by the uploader
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The file's MIME type is not on the allow list
    #[error("unsupported file type: {found}")]
    UnsupportedType {
        /// The rejected MIME type
        found: String,
    },

    /// The file exceeds the policy's size cap
    #[error("file too large: {} exceeds the {} limit", format_size(*.size), format_size(*.max))]
    FileTooLarge {
        /// The rejected file's size in bytes
        size: u64,
        /// The policy cap in bytes
        max: u64,
    },

    /// Upload was requested with nothing selected
    #[error("no file selected")]
    NothingSelected,
}

/// What the uploader accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Size cap in bytes
    pub max_bytes: u64,
    /// Accepted MIME types, compared case-insensitively
    pub allowed_types: Vec<String>,
    /// File extensions matching the MIME list; picker and prompt text only,
    /// validation goes by MIME type
    pub allowed_extensions: Vec<String>,
}

impl UploadPolicy {
    /// Default size cap: 5 MiB
    pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
    /// Default MIME allow list
    pub const DEFAULT_ALLOWED_TYPES: [&'static str; 4] =
        ["image/jpeg", "image/png", "image/gif", "image/webp"];
    /// Extensions matching the default MIME allow list
    pub const DEFAULT_ALLOWED_EXTENSIONS: [&'static str; 5] =
        [".jpg", ".jpeg", ".png", ".gif", ".webp"];

    /// True when the MIME type is on the allow list
    #[must_use]
    pub fn allows_type(&self, mime: &str) -> bool {
        self.allowed_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(mime))
    }

    /// The extension list as picker-ready text, e.g. `".jpg, .jpeg, .png"`
    #[must_use]
    pub fn accept_list(&self) -> String {
        self.allowed_extensions.join(", ")
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: Self::DEFAULT_MAX_BYTES,
            allowed_types: Self::DEFAULT_ALLOWED_TYPES
                .iter()
                .map(ToString::to_string)
                .collect(),
            allowed_extensions: Self::DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// A candidate file, described rather than read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// File name as presented to the user
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type
    pub mime: String,
}

impl FileMeta {
    /// Describes a candidate file
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }
}

/// Proof that an upload completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Name of the uploaded file
    pub file_name: String,
    /// Size in bytes
    pub size: u64,
    /// When the upload happened (Unix epoch millis)
    pub uploaded_at: u64,
}

/// The upload state machine: at most one validated selection at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uploader {
    policy: UploadPolicy,
    selected: Option<FileMeta>,
}

impl Uploader {
    /// Creates an uploader with the default policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an uploader with a custom policy
    #[must_use]
    pub fn with_policy(policy: UploadPolicy) -> Self {
        Self {
            policy,
            selected: None,
        }
    }

    /// The active policy
    #[must_use]
    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Validates a candidate and makes it the selection.
    ///
    /// Type is checked before size. A rejection clears any previous
    /// selection, so a failed pick never leaves a stale file behind.
    pub fn select(&mut self, file: FileMeta) -> Result<&FileMeta, UploadError> {
        if !self.policy.allows_type(&file.mime) {
            self.selected = None;
            return Err(UploadError::UnsupportedType { found: file.mime });
        }
        if file.size > self.policy.max_bytes {
            self.selected = None;
            return Err(UploadError::FileTooLarge {
                size: file.size,
                max: self.policy.max_bytes,
            });
        }
        Ok(self.selected.insert(file))
    }

    /// The current selection, if any
    #[must_use]
    pub fn selection(&self) -> Option<&FileMeta> {
        self.selected.as_ref()
    }

    /// Drops the current selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Uploads the current selection, which stays selected afterwards
    pub fn upload(&self) -> Result<UploadReceipt, UploadError> {
        let file = self.selected.as_ref().ok_or(UploadError::NothingSelected)?;
        tracing::info!(name = %file.name, size = file.size, "file uploaded");
        Ok(UploadReceipt {
            file_name: file.name.clone(),
            size: file.size,
            uploaded_at: current_timestamp(),
        })
    }
}

/// Formats a byte count the way file pickers do: powers of 1024, two decimal
/// places with trailing zeros dropped, capped at GB.
///
/// # Examples
///
/// ```
/// use tablero::upload::format_size;
///
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(5 * 1024 * 1024), "5 MB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[exponent])
}

/// Returns the current timestamp in milliseconds
fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
