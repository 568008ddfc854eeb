/*!
 * Error types for the htranslate application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with the HTML document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Error when the target container element cannot be located
    #[error("Container element not found: {0}")]
    ContainerNotFound(String),

    /// Error when the document has no root <html> element
    #[error("Root <html> element not found; the document might be a fragment")]
    RootElementMissing,

    /// Error when serializing the document back to a string
    #[error("Failed to serialize document: {0}")]
    SerializeError(String),
}

/// Errors that can occur while substituting text nodes
#[derive(Error, Debug)]
pub enum SubstitutionError {
    /// Error when a node in the substitution sequence is not a text node
    #[error("Node {index} is not a text node and cannot be replaced")]
    NotATextNode {
        /// Position of the node in document order
        index: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the HTML document
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from the substitution pass
    #[error("Substitution error: {0}")]
    Substitution(#[from] SubstitutionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
