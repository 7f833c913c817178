//! Error types for the navigation menu
//!
//! This module provides error handling types that follow the project's
//! zero-unwrap and functional programming patterns.

use thiserror::Error;

/// Errors that can occur while binding, driving, or configuring the menu
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// No `window` object (not running in a browser context)
    #[error("No window object available")]
    NoWindow,
    /// No `document` object on the window
    #[error("No document object available")]
    NoDocument,
    /// A required element is missing from the page markup
    #[error("Missing {role} element '#{id}'")]
    MissingElement { role: &'static str, id: String },
    /// Configuration is structurally invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Factory received a tag it does not know
    #[error("Unknown menu variant: {0}")]
    UnknownVariant(String),
    /// The browser rejected a DOM mutation or listener registration
    #[error("DOM operation failed: {0}")]
    Dom(String),
    /// An observer failed to handle a state notification
    #[error("Observer '{observer}' failed: {reason}")]
    ObserverFailed { observer: String, reason: String },
}

/// Result type alias for menu operations
pub type Result<T> = std::result::Result<T, NavError>;
