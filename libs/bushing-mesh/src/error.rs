//! # Mesh Errors
//!
//! Error types for part generation.

use thiserror::Error;

/// Errors that can occur while generating a part.
///
/// `InvalidParameter` and `DegenerateGeometry` are raised before any geometry
/// is built. `TopologyMismatch` means the builder itself is wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A parameter violates its invariant
    #[error("Invalid parameter `{field}`: {message}")]
    InvalidParameter { field: &'static str, message: String },

    /// Derived geometry collapses (non-positive radius, inverted wall, bad scale)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Ring sizes disagree or the finished solid is not closed
    #[error("Topology mismatch: {message}")]
    TopologyMismatch { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a topology mismatch error.
    pub fn topology(message: impl Into<String>) -> Self {
        Self::TopologyMismatch {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by user input rather than a builder defect.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::DegenerateGeometry { .. }
        )
    }
}
