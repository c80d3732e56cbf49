//! # Part Assembler
//!
//! Turns one parameter set into one finished part: body plus fused thread.
//!
//! ## Pipeline
//!
//! ```text
//! PartParameters ─validate─▶ DerivedRadii ─validate─▶ build_body ─┐
//!                                                                 ├─ merge ─▶ check_closed ─▶ Part
//!                              ThreadSpec::for_part ─▶ build_thread ┘
//! ```
//!
//! Nothing is returned unless every stage succeeds.

use config::constants::{BODY_RING_COUNT, MAX_VERTICES};
use glam::DVec3;
use tracing::{info, instrument, warn};

use crate::body::build_body;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::{PartKind, PartParameters};
use crate::radii::DerivedRadii;
use crate::thread::{build_thread, ThreadSpec};

/// A finished part, ready to hand to a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// Object name
    pub name: String,
    /// Nut or bolt
    pub kind: PartKind,
    /// Placement of the part's local origin
    pub location: DVec3,
    /// Radii the part was built from
    pub radii: DerivedRadii,
    /// Body and thread in the part's local frame
    pub mesh: Mesh,
}

/// Number of vertices a part will have, without building it.
///
/// Saturates instead of overflowing, so the result is always comparable
/// against [`MAX_VERTICES`].
pub fn estimate_vertex_count(params: &PartParameters, radii: &DerivedRadii, kind: PartKind) -> usize {
    let body = BODY_RING_COUNT.saturating_mul(params.segments as usize);
    body.saturating_add(ThreadSpec::for_part("", params, radii, kind).vertex_count())
}

/// Builds one nut or bolt.
///
/// # Errors
///
/// - `InvalidParameter` if `params` fails validation
/// - `DegenerateGeometry` if a derived radius collapses
/// - `TooManyVertices` if the part would exceed the vertex limit
/// - `TopologyMismatch` if the merged mesh is not a closed solid
///
/// # Example
///
/// ```rust
/// use bushing_mesh::{assemble_part, PartKind, PartParameters};
/// use glam::DVec3;
///
/// let part = assemble_part("Nut", &PartParameters::default(), PartKind::Nut, DVec3::ZERO).unwrap();
/// assert_eq!(part.mesh.vertex_count(), 8 * 64 + 4 * 315);
/// assert!(part.mesh.is_closed());
/// ```
#[instrument(skip(params), fields(segments = params.segments))]
pub fn assemble_part(
    name: &str,
    params: &PartParameters,
    kind: PartKind,
    location: DVec3,
) -> Result<Part, MeshError> {
    build_part(name, params, kind, location)
        .inspect_err(|err| warn!(%err, "part rejected"))
}

fn build_part(
    name: &str,
    params: &PartParameters,
    kind: PartKind,
    location: DVec3,
) -> Result<Part, MeshError> {
    params.validate()?;
    let radii = DerivedRadii::compute(params, kind);
    radii.validate()?;

    let count = estimate_vertex_count(params, &radii, kind);
    if count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count,
            max: MAX_VERTICES,
        });
    }

    let mut mesh = build_body(params, &radii)?;
    let thread = build_thread(&ThreadSpec::for_part(name, params, &radii, kind))?;
    mesh.merge(&thread);

    mesh.validate()?;
    mesh.check_closed()?;

    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "part assembled"
    );

    Ok(Part {
        name: name.to_string(),
        kind,
        location,
        radii,
        mesh,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialSlot;

    #[test]
    fn test_nut_counts() {
        let part =
            assemble_part("Nut", &PartParameters::default(), PartKind::Nut, DVec3::ZERO).unwrap();
        assert_eq!(part.mesh.vertex_count(), 512 + 1260);
        assert_eq!(part.mesh.face_count(), 512 + 1258);
        assert_eq!(part.name, "Nut");
        assert_eq!(part.kind, PartKind::Nut);
    }

    #[test]
    fn test_estimate_matches_build() {
        let params = PartParameters {
            segments: 12,
            thread_pitch: 1.5,
            ..Default::default()
        };
        let radii = DerivedRadii::compute(&params, PartKind::Bolt);
        let part = assemble_part("Bolt", &params, PartKind::Bolt, DVec3::ZERO).unwrap();
        assert_eq!(
            estimate_vertex_count(&params, &radii, PartKind::Bolt),
            part.mesh.vertex_count()
        );
    }

    #[test]
    fn test_thread_faces_follow_body() {
        let part =
            assemble_part("Bolt", &PartParameters::default(), PartKind::Bolt, DVec3::ZERO).unwrap();
        let (body, thread) = part.mesh.faces().split_at(512);
        assert!(body.iter().all(|f| f.material != MaterialSlot::Thread));
        assert!(thread.iter().all(|f| f.material == MaterialSlot::Thread));
        assert!(thread.iter().all(|f| f.indices.iter().all(|&i| i >= 512)));
    }

    #[test]
    fn test_mesh_stays_local() {
        let location = DVec3::new(-100.0, 0.0, 0.0);
        let part =
            assemble_part("Bolt", &PartParameters::default(), PartKind::Bolt, location).unwrap();
        let (min, _) = part.mesh.bounding_box();
        assert_eq!(part.location, location);
        assert!(min.x > -50.0);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let params = PartParameters {
            segments: 7,
            ..Default::default()
        };
        assert!(matches!(
            assemble_part("Nut", &params, PartKind::Nut, DVec3::ZERO),
            Err(MeshError::InvalidParameter { field: "segments", .. })
        ));
    }

    #[test]
    fn test_collapsed_bolt_rejected() {
        let params = PartParameters {
            thread_size: 20.0,
            ..Default::default()
        };
        assert!(assemble_part("Nut", &params, PartKind::Nut, DVec3::ZERO).is_ok());
        assert!(matches!(
            assemble_part("Bolt", &params, PartKind::Bolt, DVec3::ZERO),
            Err(MeshError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn test_extreme_density_saturates() {
        for params in [
            PartParameters {
                thread_pitch: 1e-300,
                ..Default::default()
            },
            PartParameters {
                height: 1e300,
                ..Default::default()
            },
        ] {
            assert!(params.validate().is_ok());
            let radii = DerivedRadii::compute(&params, PartKind::Nut);
            assert_eq!(estimate_vertex_count(&params, &radii, PartKind::Nut), usize::MAX);
            assert!(matches!(
                assemble_part("Nut", &params, PartKind::Nut, DVec3::ZERO),
                Err(MeshError::TooManyVertices { max: MAX_VERTICES, .. })
            ));
        }
    }

    #[test]
    fn test_vertex_limit() {
        let params = PartParameters {
            thread_pitch: 1e-4,
            ..Default::default()
        };
        assert!(matches!(
            assemble_part("Nut", &params, PartKind::Nut, DVec3::ZERO),
            Err(MeshError::TooManyVertices { .. })
        ));
    }
}
