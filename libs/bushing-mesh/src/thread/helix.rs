//! # Helix Path
//!
//! Samples a tapered helix around the Z axis.
//!
//! The helix starts [`THREAD_START_OFFSET`] above its base and climbs
//! `axial_height - THREAD_AXIAL_MARGIN`, so the thread stays clear of the
//! body's flat caps. Each sample carries a taper weight that scales the tooth:
//! it ramps from 0 to 1 over the first turn and back to 0 over the last.

use std::f64::consts::TAU;

use config::constants::{
    points_per_turn, MAX_VERTICES, MIN_HELIX_POINTS, MIN_THREAD_TURNS, THREAD_AXIAL_MARGIN,
    THREAD_START_OFFSET,
};
use glam::DVec3;

use crate::error::MeshError;

/// One sample along the helix with its orientation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixSample {
    /// Position on the helix
    pub position: DVec3,
    /// Cross-section scale in [0, 1]
    pub weight: f64,
    /// Unit tangent
    pub tangent: DVec3,
    /// Unit horizontal direction away from the axis
    pub outward: DVec3,
    /// Unit direction perpendicular to tangent and outward, leaning to +Z
    pub up: DVec3,
}

/// Sampled helix.
#[derive(Debug, Clone, PartialEq)]
pub struct HelixPath {
    /// Number of turns
    pub turns: f64,
    /// Samples per turn
    pub points_per_turn: usize,
    samples: Vec<HelixSample>,
}

impl HelixPath {
    /// Returns the samples in order of increasing height.
    #[inline]
    pub fn samples(&self) -> &[HelixSample] {
        &self.samples
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: a path holds at least [`MIN_HELIX_POINTS`] samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Taper weights in sample order.
    pub fn weights(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.weight).collect()
    }
}

/// Number of turns for a thread region of `axial_height`.
///
/// # Example
///
/// ```rust
/// use bushing_mesh::thread::helix_turns;
///
/// assert!((helix_turns(50.0, 5.0) - 9.84).abs() < 1e-12);
/// assert_eq!(helix_turns(0.5, 5.0), 0.1);
/// ```
pub fn helix_turns(axial_height: f64, pitch: f64) -> f64 {
    ((axial_height - THREAD_AXIAL_MARGIN) / pitch).max(MIN_THREAD_TURNS)
}

/// Number of samples along a helix of `turns` turns.
///
/// Saturates at `usize::MAX` when the product does not fit.
///
/// # Example
///
/// ```rust
/// use bushing_mesh::thread::helix_point_count;
///
/// assert_eq!(helix_point_count(9.84, 64), 315);
/// assert_eq!(helix_point_count(0.1, 8), 2);
/// ```
pub fn helix_point_count(turns: f64, segments: u32) -> usize {
    let count = (turns * points_per_turn(segments) as f64).round() as usize;
    count.max(MIN_HELIX_POINTS)
}

/// Taper weight of sample `index` out of `total`.
///
/// Linear ramp over `points_per_turn` samples at both ends, symmetric under
/// `index -> total - 1 - index`.
pub fn taper_weight(index: usize, total: usize, points_per_turn: usize) -> f64 {
    let ramp = points_per_turn as f64;
    let from_start = index as f64 / ramp;
    let from_end = total.saturating_sub(index + 1) as f64 / ramp;
    from_start.min(from_end).min(1.0)
}

/// Samples a helix of `radius` around the Z axis.
///
/// # Example
///
/// ```rust
/// use bushing_mesh::thread::build_helix;
///
/// let path = build_helix(18.0, 50.0, 5.0, 64).unwrap();
/// assert_eq!(path.len(), 315);
/// assert_eq!(path.samples()[0].weight, 0.0);
/// ```
pub fn build_helix(
    radius: f64,
    axial_height: f64,
    pitch: f64,
    segments: u32,
) -> Result<HelixPath, MeshError> {
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(MeshError::degenerate(format!(
            "helix radius must be positive: {radius}"
        )));
    }
    if !(pitch > 0.0 && pitch.is_finite()) || !axial_height.is_finite() {
        return Err(MeshError::degenerate(format!(
            "helix needs a positive pitch and finite height: pitch={pitch}, height={axial_height}"
        )));
    }
    let per_turn = points_per_turn(segments);
    if per_turn == 0 {
        return Err(MeshError::degenerate(format!(
            "helix needs at least 2 segments: {segments}"
        )));
    }

    let climb = axial_height - THREAD_AXIAL_MARGIN;
    let turns = helix_turns(axial_height, pitch);
    let total = helix_point_count(turns, segments);
    if total > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: total,
            max: MAX_VERTICES,
        });
    }
    let sweep = turns * TAU;

    let samples = (0..total)
        .map(|i| {
            let t = i as f64 / (total - 1) as f64;
            let angle = t * sweep;
            let (sin, cos) = angle.sin_cos();

            let position = DVec3::new(cos * radius, sin * radius, THREAD_START_OFFSET + t * climb);
            // d(position)/dt
            let tangent = DVec3::new(-sin * radius * sweep, cos * radius * sweep, climb)
                .normalize_or_zero();
            let outward = tangent.cross(DVec3::Z).try_normalize().unwrap_or(DVec3::X);
            let up = outward.cross(tangent).try_normalize().unwrap_or(DVec3::Z);

            HelixSample {
                position,
                weight: taper_weight(i, total, per_turn),
                tangent,
                outward,
                up,
            }
        })
        .collect();

    Ok(HelixPath {
        turns,
        points_per_turn: per_turn,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_turns_and_count() {
        let path = build_helix(18.0, 50.0, 5.0, 64).unwrap();
        assert_relative_eq!(path.turns, 9.84, epsilon = 1e-12);
        assert_eq!(path.points_per_turn, 32);
        assert_eq!(path.len(), 315);
    }

    #[test]
    fn test_endpoints() {
        let path = build_helix(10.0, 20.0, 2.0, 16).unwrap();
        let first = path.samples()[0].position;
        let last = path.samples()[path.len() - 1].position;
        assert_relative_eq!(first.x, 10.0);
        assert_relative_eq!(first.z, 0.4);
        assert_relative_eq!(last.z, 19.6, epsilon = 1e-12);
        for s in path.samples() {
            assert_relative_eq!(s.position.truncate().length(), 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_turn_floor() {
        assert_relative_eq!(helix_turns(0.9, 100.0), 0.1);
        let path = build_helix(5.0, 0.9, 100.0, 8).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.weights(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_taper_ramps() {
        let weights: Vec<f64> = (0..20).map(|i| taper_weight(i, 20, 4)).collect();
        assert_eq!(weights[0], 0.0);
        assert_eq!(weights[2], 0.5);
        assert_eq!(weights[4], 1.0);
        assert_eq!(weights[10], 1.0);
        assert_eq!(weights[19], 0.0);
        assert_eq!(weights[17], 0.5);
    }

    #[test]
    fn test_taper_symmetric() {
        for total in [2, 3, 7, 8, 9, 64, 315] {
            for i in 0..total {
                assert_eq!(
                    taper_weight(i, total, 32),
                    taper_weight(total - 1 - i, total, 32),
                    "total={total} i={i}"
                );
            }
        }
    }

    #[test]
    fn test_frames_orthonormal() {
        let path = build_helix(7.0, 30.0, 3.0, 24).unwrap();
        for s in path.samples() {
            assert_relative_eq!(s.tangent.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(s.outward.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(s.up.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(s.tangent.dot(s.outward), 0.0, epsilon = 1e-12);
            assert_relative_eq!(s.tangent.dot(s.up), 0.0, epsilon = 1e-12);
            assert_relative_eq!(s.outward.z, 0.0, epsilon = 1e-12);
            assert!(s.up.z > 0.0);
            // outward is radial
            let radial = s.position.truncate().normalize();
            assert_relative_eq!(s.outward.truncate().dot(radial), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_dense_helix_rejected_before_sampling() {
        assert_eq!(helix_point_count(helix_turns(50.0, 1e-300), 64), usize::MAX);
        assert!(matches!(
            build_helix(18.0, 1e300, 5.0, 64),
            Err(MeshError::TooManyVertices { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(build_helix(0.0, 10.0, 1.0, 8).is_err());
        assert!(build_helix(1.0, 10.0, 0.0, 8).is_err());
        assert!(build_helix(1.0, 10.0, 1.0, 1).is_err());
    }
}
