//! # Error Types
//!
//! The vector operations know a single failure: an invalid argument. It is
//! raised before anything is written into a `result` value or a buffer, so a
//! failed call never leaves partial output behind.
//!
//! ## Error Policy
//!
//! - NO silent default substitution for required arguments
//! - Out-of-bounds buffer offsets fail instead of reading past the end
//! - Errors carry the operation name for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during vector operations.
///
/// ## Example
///
/// ```rust
/// use cartesian::{Cartesian2, CartesianError};
///
/// match Cartesian2::from_array_at(&[0.0, 0.0], 1) {
///     Ok(value) => println!("read {value}"),
///     Err(CartesianError::InvalidArgument { operation, message }) => {
///         eprintln!("{operation}: {message}")
///     }
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartesianError {
    /// A required input was unusable, e.g. a buffer offset out of bounds.
    #[error("Invalid argument to '{operation}': {message}")]
    InvalidArgument {
        /// Name of the operation that rejected the argument
        operation: &'static str,
        /// What was wrong with it
        message: String,
    },
}

impl CartesianError {
    /// Creates an invalid-argument error for a buffer too short to hold
    /// `width` slots starting at `starting_index`.
    pub fn out_of_bounds(
        operation: &'static str,
        starting_index: usize,
        width: usize,
        len: usize,
    ) -> Self {
        tracing::debug!(
            target: "cartesian::error",
            operation,
            starting_index,
            width,
            len,
            "rejecting out-of-bounds buffer access"
        );
        Self::InvalidArgument {
            operation,
            message: format!(
                "starting index {starting_index} needs {width} slots but buffer has length {len}"
            ),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for vector operations.
pub type CartesianResult<T> = Result<T, CartesianError>;

// =============================================================================
// TESTS
// =============================================================================
