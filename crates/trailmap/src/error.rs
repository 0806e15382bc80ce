//! Error types for Trailmap operations.
//!
//! This module provides the main error type [`TrailmapError`] which wraps
//! the error conditions that can occur while building a dashboard.

use std::io;

use thiserror::Error;

use trailmap_core::encoding::EncodeError;

use crate::{profile::ProfileError, roadmap::GeneratorError};

/// The main error type for Trailmap operations.
///
/// # Diagnostic Variants
///
/// The `Profile` variant keeps the profile source text next to the
/// [`ProfileError`], so the span it carries can be shown in context.
#[derive(Debug, Error)]
pub enum TrailmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Profile { err: ProfileError, src: String },

    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Roadmap generation error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrailmapError {
    /// Create a new `Profile` error with the associated source text.
    pub fn new_profile_error(err: ProfileError, src: impl Into<String>) -> Self {
        Self::Profile {
            err,
            src: src.into(),
        }
    }
}
