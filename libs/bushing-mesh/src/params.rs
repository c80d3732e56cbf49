//! # Part Parameters
//!
//! User-facing dimensions shared by the nut and the bolt, and the boundary
//! validation that runs before any geometry is derived.

use config::constants::{
    DEFAULT_CLEARANCE, DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_SEGMENTS, DEFAULT_THICKNESS,
    DEFAULT_THREAD_PITCH, DEFAULT_THREAD_SIZE, DEFAULT_WASHER_HEIGHT, DEFAULT_WASHER_RADIUS,
    MIN_SEGMENTS,
};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Which of the two mating parts to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    /// Internally threaded bushing
    Nut,
    /// Externally threaded part that fits inside the nut
    Bolt,
}

impl PartKind {
    /// Returns true for [`PartKind::Bolt`].
    #[inline]
    pub fn is_bolt(self) -> bool {
        matches!(self, PartKind::Bolt)
    }

    /// The nut carries an internal thread, the bolt an external one.
    #[inline]
    pub fn has_internal_thread(self) -> bool {
        !self.is_bolt()
    }
}

/// Dimensions of a part.
///
/// Missing fields take the panel defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use bushing_mesh::PartParameters;
///
/// let params = PartParameters {
///     segments: 32,
///     ..Default::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartParameters {
    /// Overall diameter proxy; the nut's outer radius is half of this
    pub radius: f64,
    /// Body height above the washer
    pub height: f64,
    /// Wall thickness
    pub thickness: f64,
    /// Radial depth of the thread tooth
    pub thread_size: f64,
    /// Axial distance between thread turns
    pub thread_pitch: f64,
    /// Radial gap between the nut's inner wall and the bolt's thread peak
    pub clearance: f64,
    /// Washer overhang past the body's outer wall
    pub washer_radius: f64,
    /// Washer thickness
    pub washer_height: f64,
    /// Ring tessellation count
    pub segments: u32,
}

impl Default for PartParameters {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            thickness: DEFAULT_THICKNESS,
            thread_size: DEFAULT_THREAD_SIZE,
            thread_pitch: DEFAULT_THREAD_PITCH,
            clearance: DEFAULT_CLEARANCE,
            washer_radius: DEFAULT_WASHER_RADIUS,
            washer_height: DEFAULT_WASHER_HEIGHT,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl PartParameters {
    /// Checks every field against its invariant.
    ///
    /// Lengths must be finite and strictly positive, `segments` at least
    /// [`MIN_SEGMENTS`]. The first violation found is reported.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.segments < MIN_SEGMENTS {
            return Err(MeshError::invalid_parameter(
                "segments",
                format!("must be at least {MIN_SEGMENTS}, got {}", self.segments),
            ));
        }

        let lengths = [
            ("radius", self.radius),
            ("height", self.height),
            ("thickness", self.thickness),
            ("thread_size", self.thread_size),
            ("thread_pitch", self.thread_pitch),
            ("clearance", self.clearance),
            ("washer_radius", self.washer_radius),
            ("washer_height", self.washer_height),
        ];
        for (field, value) in lengths {
            if !value.is_finite() {
                return Err(MeshError::invalid_parameter(
                    field,
                    format!("must be finite, got {value}"),
                ));
            }
            if value <= 0.0 {
                return Err(MeshError::invalid_parameter(
                    field,
                    format!("must be positive, got {value}"),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PartParameters::default().validate().is_ok());
    }

    #[test]
    fn test_segments_minimum() {
        let eight = PartParameters {
            segments: 8,
            ..Default::default()
        };
        assert!(eight.validate().is_ok());

        let seven = PartParameters {
            segments: 7,
            ..Default::default()
        };
        assert!(matches!(
            seven.validate(),
            Err(MeshError::InvalidParameter { field: "segments", .. })
        ));
    }

    #[test]
    fn test_non_positive_lengths_rejected() {
        let zero_pitch = PartParameters {
            thread_pitch: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            zero_pitch.validate(),
            Err(MeshError::InvalidParameter { field: "thread_pitch", .. })
        ));

        let negative_height = PartParameters {
            height: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            negative_height.validate(),
            Err(MeshError::InvalidParameter { field: "height", .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let nan = PartParameters {
            clearance: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(MeshError::InvalidParameter { field: "clearance", .. })
        ));

        let inf = PartParameters {
            radius: f64::INFINITY,
            ..Default::default()
        };
        assert!(inf.validate().is_err());
    }

    #[test]
    fn test_kind_thread_side() {
        assert!(PartKind::Nut.has_internal_thread());
        assert!(!PartKind::Bolt.has_internal_thread());
        assert!(PartKind::Bolt.is_bolt());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: PartParameters =
            serde_json::from_str(r#"{ "radius": 30.0, "segments": 16 }"#).unwrap();
        assert_eq!(params.radius, 30.0);
        assert_eq!(params.segments, 16);
        assert_eq!(params.height, DEFAULT_HEIGHT);
        assert_eq!(params.clearance, DEFAULT_CLEARANCE);
    }
}
