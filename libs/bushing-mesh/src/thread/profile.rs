//! # Thread Profile
//!
//! Kite-shaped tooth cross-section.
//!
//! Local X is radial (outward from the part axis), local Y is along the
//! helix's "up" direction:
//!
//! ```text
//!          y
//!          ^
//!          +  (0, 0.7t)
//!         / \
//!  heel  +---+----> tip (t, 0)        external thread
//! (-0.2t)  \ /
//!           +  (0, -0.7t)
//! ```
//!
//! For an internal thread the X coordinates are mirrored so the tooth points
//! toward the axis.

use config::constants::{PROFILE_HEEL_RATIO, PROFILE_TIP_RATIO};
use glam::DVec2;

/// Closed four-point tooth outline, always counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreadProfile {
    points: [DVec2; 4],
}

impl ThreadProfile {
    /// Builds the tooth outline for a thread of radial size `thickness`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bushing_mesh::thread::ThreadProfile;
    ///
    /// let profile = ThreadProfile::new(3.0, false);
    /// assert!(profile.signed_area() > 0.0);
    /// let (heel, tip) = profile.radial_extent();
    /// assert!((heel + 0.6).abs() < 1e-12);
    /// assert_eq!(tip, 3.0);
    /// ```
    pub fn new(thickness: f64, internal: bool) -> Self {
        let dx = if internal { -1.0 } else { 1.0 };
        let tip = thickness * PROFILE_TIP_RATIO;

        let mut points = [
            DVec2::new(0.0, tip),
            DVec2::new(thickness * dx, 0.0),
            DVec2::new(0.0, -tip),
            DVec2::new(-thickness * PROFILE_HEEL_RATIO * dx, 0.0),
        ];
        if shoelace(&points) < 0.0 {
            points.reverse();
        }

        Self { points }
    }

    /// Outline points in counter-clockwise order.
    #[inline]
    pub fn points(&self) -> &[DVec2; 4] {
        &self.points
    }

    /// Enclosed area (positive).
    pub fn signed_area(&self) -> f64 {
        shoelace(&self.points)
    }

    /// Smallest and largest radial offset of the outline.
    pub fn radial_extent(&self) -> (f64, f64) {
        self.points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.x), hi.max(p.x))
            })
    }
}

fn shoelace(points: &[DVec2]) -> f64 {
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum();
    twice / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_external_profile_points_outward() {
        let profile = ThreadProfile::new(2.0, false);
        let (lo, hi) = profile.radial_extent();
        assert_relative_eq!(hi, 2.0);
        assert_relative_eq!(lo, -0.4);
    }

    #[test]
    fn test_internal_profile_is_mirrored() {
        let external = ThreadProfile::new(2.0, false);
        let internal = ThreadProfile::new(2.0, true);
        let (lo, hi) = internal.radial_extent();
        assert_relative_eq!(lo, -2.0);
        assert_relative_eq!(hi, 0.4);
        assert_relative_eq!(internal.signed_area(), external.signed_area());
    }

    #[test]
    fn test_kite_area() {
        // diagonals 1.2t and 1.4t
        let profile = ThreadProfile::new(3.0, true);
        assert_relative_eq!(profile.signed_area(), 0.84 * 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tips_on_axial_axis() {
        let profile = ThreadProfile::new(1.0, false);
        let tips: Vec<_> = profile.points().iter().filter(|p| p.x == 0.0).collect();
        assert_eq!(tips.len(), 2);
        assert!(tips.iter().any(|p| (p.y - 0.7).abs() < 1e-12));
        assert!(tips.iter().any(|p| (p.y + 0.7).abs() < 1e-12));
    }
}
