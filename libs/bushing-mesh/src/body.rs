//! # Body Builder
//!
//! Builds the washer-flanged tube of a part by chained ring extrusions.
//!
//! ## Profile
//!
//! ```text
//!        z
//!        ^    inner  outer
//!  hw+h  |      +-----+            top taper (3)
//!        |      |     |
//!        |  (5) |     | (0)        side wall
//!        |      |     |
//!    hw  |      |     +------+     flange (2), washer rim (4)
//!        |      |            |
//!     0  +      +------------+     washer bottom (5)
//!               r_in        r_wash
//! ```
//!
//! The numbers are material slots. The last ring drops back to `z = 0` on
//! the inner radius and is bridged onto the first ring.

use config::constants::BODY_RING_COUNT;
use tracing::{debug, instrument};

use crate::error::MeshError;
use crate::material::MaterialSlot;
use crate::mesh::Mesh;
use crate::ops::ring::{bridge_rings, extrude_scale, extrude_translate, VertexRing};
use crate::params::PartParameters;
use crate::radii::DerivedRadii;

/// How one pipeline step moves the new ring.
#[derive(Debug, Clone, Copy)]
enum RingStep {
    /// Scale about the axis until the ring reaches this radius
    Radius(f64),
    /// Shift along Z
    Rise(f64),
}

/// Builds the body mesh (without thread) for validated radii.
///
/// Produces `8 * segments` vertices and `8 * segments` flat-shaded quads.
/// The second flange step does not change the radius: it leaves zero-area
/// faces that separate flange material from side-wall material.
#[instrument(skip_all, fields(segments = params.segments))]
pub fn build_body(params: &PartParameters, radii: &DerivedRadii) -> Result<Mesh, MeshError> {
    let n = params.segments as usize;
    let mut mesh = Mesh::with_capacity(BODY_RING_COUNT * n, BODY_RING_COUNT * n);

    let steps = [
        ("washer bottom", RingStep::Radius(radii.washer_outer_radius), MaterialSlot::Inner),
        ("washer rim", RingStep::Rise(params.washer_height), MaterialSlot::WasherTop),
        ("flange", RingStep::Radius(radii.body_outer_radius), MaterialSlot::Flange),
        ("stem seam", RingStep::Radius(radii.body_outer_radius), MaterialSlot::Flange),
        ("side wall", RingStep::Rise(params.height), MaterialSlot::BodyOuter),
        ("top taper", RingStep::Radius(radii.body_inner_radius), MaterialSlot::Taper),
        (
            "inner wall",
            RingStep::Rise(-(params.height + params.washer_height)),
            MaterialSlot::Inner,
        ),
    ];

    let ring_start =
        VertexRing::circle(&mut mesh, radii.body_inner_radius, 0.0, params.segments)?;
    let mut ring = ring_start.clone();
    let mut radius = radii.body_inner_radius;

    for (label, step, material) in steps {
        let extrusion = match step {
            RingStep::Radius(target) => {
                let extrusion = extrude_scale(&mut mesh, &ring, target / radius, material)?;
                radius = target;
                extrusion
            }
            RingStep::Rise(dz) => extrude_translate(&mut mesh, &ring, dz, material)?,
        };
        debug!(step = label, ?material, radius, faces = extrusion.faces.len(), "extruded ring");
        ring = extrusion.ring;
    }

    let closing = bridge_rings(&mut mesh, &ring, &ring_start, MaterialSlot::Inner)?;
    debug!(faces = closing.len(), "bridged end ring to start ring");

    mesh.set_smooth(false);
    Ok(mesh)
}
