// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use thiserror::Error;

/// A [`MenuConfig`](crate::MenuConfig) value the engine cannot work with.
///
/// These are the only errors the engine reports. Problems with the item data
/// itself (empty labels, duplicate values, no items) fall back to a safe display
/// state instead.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Row height must be finite and greater than zero.
    #[error("virtual list item height must be finite and positive, got {0}")]
    InvalidItemHeight(f64),

    /// Viewport height must be finite and non-negative.
    #[error("viewport height must be finite and non-negative, got {0}")]
    InvalidViewportHeight(f64),

    /// Pagination threshold must be finite and non-negative.
    #[error("end-reached threshold must be finite and non-negative, got {0}")]
    InvalidEndReachedThreshold(f64),
}

/// Result type for configuration changes.
pub type ConfigResult<T> = Result<T, ConfigError>;
