#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the slug crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! The slug pipeline itself is total and never produces an [`Error`]. Errors
//! only arise while selecting a locale or loading settings, both of which are
//! configuration concerns that must fail fast.

use std::path::{Path, PathBuf};

/// Unified error type returned by locale resolution and settings loading.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Returned when a locale identifier does not name a known bundle.
    #[error("unknown locale '{identifier}'")]
    UnknownLocale {
        /// Identifier supplied by the caller.
        identifier: String
    },
    /// Wraps I/O errors that occur while reading settings files.
    #[error("failed to read slug settings from {path:?}: {source}")]
    Io {
        /// Location of the settings file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse slug settings: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when the settings violate invariants.
    #[error("invalid slug settings: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    }
}

impl Error {
    /// Constructs an unknown-locale error for the provided identifier.
    pub fn unknown_locale<I>(identifier: I) -> Self
    where
        I: Into<String>
    {
        Self::UnknownLocale {
            identifier: identifier.into()
        }
    }

    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the settings file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}
