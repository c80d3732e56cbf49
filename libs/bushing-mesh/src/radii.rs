//! # Derived Radii
//!
//! Maps part parameters to the concrete radii the body and thread builders use.
//!
//! ```text
//!            outer_nut = radius / 2
//!            inner_wall = outer_nut - thickness
//! nut:       body = [inner_wall, outer_nut], thread base = inner_wall
//! bolt:      peak = inner_wall - clearance
//!            thread base = peak - thread_size
//!            body = [base - thickness, base]
//! both:      washer_outer = body_outer + washer_radius
//! ```

use config::constants::{approx_zero, EPSILON};

use crate::error::MeshError;
use crate::params::{PartKind, PartParameters};

/// Radii derived for one build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRadii {
    /// Outer radius of the nut body
    pub outer_nut_radius: f64,
    /// Inner wall radius of the nut
    pub inner_wall_radius: f64,
    /// Radius the bolt's thread tips reach
    pub bolt_peak_radius: f64,
    /// Radius the thread tooth grows from
    pub thread_base_radius: f64,
    /// Outer radius of this part's body wall
    pub body_outer_radius: f64,
    /// Inner radius of this part's body wall
    pub body_inner_radius: f64,
    /// Outer radius of the washer
    pub washer_outer_radius: f64,
}

impl DerivedRadii {
    /// Computes all radii for a part.
    ///
    /// Pure arithmetic: the parameters are assumed to be validated and the
    /// result is not checked. Call [`DerivedRadii::validate`] before building.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bushing_mesh::{DerivedRadii, PartKind, PartParameters};
    ///
    /// let radii = DerivedRadii::compute(&PartParameters::default(), PartKind::Nut);
    /// assert_eq!(radii.body_outer_radius, 20.0);
    /// assert_eq!(radii.washer_outer_radius, 40.0);
    /// ```
    pub fn compute(params: &PartParameters, kind: PartKind) -> Self {
        let outer_nut_radius = params.radius / 2.0;
        let inner_wall_radius = outer_nut_radius - params.thickness;
        let bolt_peak_radius = inner_wall_radius - params.clearance;

        let (thread_base_radius, body_outer_radius, body_inner_radius) = match kind {
            PartKind::Nut => (inner_wall_radius, outer_nut_radius, inner_wall_radius),
            PartKind::Bolt => {
                let base = bolt_peak_radius - params.thread_size;
                (base, base, base - params.thickness)
            }
        };

        Self {
            outer_nut_radius,
            inner_wall_radius,
            bolt_peak_radius,
            thread_base_radius,
            body_outer_radius,
            body_inner_radius,
            washer_outer_radius: body_outer_radius + params.washer_radius,
        }
    }

    /// Rejects radii that would collapse the body.
    ///
    /// Every radius used for geometry must be positive and the body wall must
    /// not be inverted.
    pub fn validate(&self) -> Result<(), MeshError> {
        let used = [
            ("thread base", self.thread_base_radius),
            ("body outer", self.body_outer_radius),
            ("body inner", self.body_inner_radius),
            ("washer outer", self.washer_outer_radius),
        ];
        for (name, value) in used {
            if value < EPSILON {
                return Err(MeshError::degenerate(format!(
                    "{name} radius must be positive, got {value}"
                )));
            }
        }

        let wall = self.body_outer_radius - self.body_inner_radius;
        if wall < 0.0 || approx_zero(wall) {
            return Err(MeshError::degenerate(format!(
                "body outer radius {} must exceed inner radius {}",
                self.body_outer_radius, self.body_inner_radius
            )));
        }

        Ok(())
    }
}
