//! # Thread Sweep
//!
//! Sweeps the tooth profile along a tapered helix to build a thread solid.
//!
//! ## Algorithm
//!
//! 1. Sample the helix ([`build_helix`])
//! 2. At each sample place the four profile points in the sample's
//!    `(outward, up)` plane, scaled by the taper weight
//! 3. Join consecutive cross-sections with quads and cap both ends
//! 4. Shift the result by the thread's Z offset
//!
//! The sweep is built directly as a mesh; there is no intermediate curve
//! object. Every face gets [`MaterialSlot::Thread`].

mod helix;
mod profile;


pub use helix::{
    build_helix, helix_point_count, helix_turns, taper_weight, HelixPath, HelixSample,
};
pub use profile::ThreadProfile;

use glam::DVec3;
use tracing::{debug, instrument};

use crate::error::MeshError;
use crate::material::MaterialSlot;
use crate::mesh::Mesh;
use crate::params::{PartKind, PartParameters};
use crate::radii::DerivedRadii;

/// Inputs for one thread solid.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadSpec {
    /// Name used in diagnostics
    pub name: String,
    /// Radius the tooth grows from
    pub base_radius: f64,
    /// Height of the threaded region
    pub axial_height: f64,
    /// Axial distance between turns
    pub pitch: f64,
    /// Radial size of the tooth
    pub thickness: f64,
    /// Tooth points toward the axis
    pub internal: bool,
    /// Ring tessellation count of the parent part
    pub segments: u32,
    /// Z shift applied to the whole solid, in the parent's frame
    pub z_offset: f64,
}

impl ThreadSpec {
    /// Thread for a part: runs the full body height above the washer.
    pub fn for_part(
        name: &str,
        params: &PartParameters,
        radii: &DerivedRadii,
        kind: PartKind,
    ) -> Self {
        Self {
            name: format!("{name}_thread"),
            base_radius: radii.thread_base_radius,
            axial_height: params.height,
            pitch: params.thread_pitch,
            thickness: params.thread_size,
            internal: kind.has_internal_thread(),
            segments: params.segments,
            z_offset: params.washer_height,
        }
    }

    /// Number of vertices [`build_thread`] will produce.
    ///
    /// Saturates at `usize::MAX` for helices too dense to count.
    pub fn vertex_count(&self) -> usize {
        let turns = helix_turns(self.axial_height, self.pitch);
        helix_point_count(turns, self.segments).saturating_mul(4)
    }
}

/// Builds the thread solid described by `spec`.
///
/// The result is closed and outward-facing: `4 * samples` vertices,
/// `4 * (samples - 1)` side quads and two end caps. End sections collapse to
/// a point where the taper weight is zero; topology is unaffected.
#[instrument(skip_all, fields(name = %spec.name, internal = spec.internal))]
pub fn build_thread(spec: &ThreadSpec) -> Result<Mesh, MeshError> {
    if !(spec.thickness > 0.0 && spec.thickness.is_finite()) {
        return Err(MeshError::degenerate(format!(
            "thread size must be positive: {}",
            spec.thickness
        )));
    }

    let path = build_helix(spec.base_radius, spec.axial_height, spec.pitch, spec.segments)?;
    let profile = ThreadProfile::new(spec.thickness, spec.internal);
    debug!(turns = path.turns, samples = path.len(), "sampled helix");

    let sections = path.len();
    let mut mesh = Mesh::with_capacity(4 * sections, 4 * (sections - 1) + 2);
    let shift = DVec3::new(0.0, 0.0, spec.z_offset);

    for sample in path.samples() {
        for point in profile.points() {
            let offset = sample.outward * point.x + sample.up * point.y;
            mesh.add_vertex(sample.position + offset * sample.weight + shift);
        }
    }

    let section = |s: usize, k: usize| (s * 4 + k % 4) as u32;
    for s in 0..sections - 1 {
        for k in 0..4 {
            mesh.add_face(
                vec![
                    section(s, k),
                    section(s + 1, k),
                    section(s + 1, k + 1),
                    section(s, k + 1),
                ],
                MaterialSlot::Thread,
            );
        }
    }

    // The profile winds counter-clockwise around -tangent, so the start cap
    // keeps profile order and the end cap reverses it.
    mesh.add_face((0..4).map(|k| section(0, k)).collect(), MaterialSlot::Thread);
    mesh.add_face(
        (0..4).rev().map(|k| section(sections - 1, k)).collect(),
        MaterialSlot::Thread,
    );

    Ok(mesh)
}
