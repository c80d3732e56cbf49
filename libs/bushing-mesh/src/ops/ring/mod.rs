//! # Ring Extrusion
//!
//! Grows a solid of revolution one ring at a time.
//!
//! ## Algorithm
//!
//! 1. A [`VertexRing`] is an ordered loop of vertex indices around the Z axis
//! 2. An extrusion copies the ring, moves the copy (scale about the axis or
//!    shift along Z) and joins old and new rings with one quad per segment
//! 3. The copy is returned so the next step can extrude from it
//! 4. [`bridge_rings`] joins two existing rings to seal the tube
//!
//! Quads are wound `(a[i], a[i+1], b[i+1], b[i])`, where `a` is the older
//! ring. With rings running counter-clockwise seen from +Z, chaining
//! extrusions this way keeps every shared edge oppositely directed in its
//! two faces.


use std::f64::consts::PI;
use std::ops::Range;

use glam::DVec3;

use crate::error::MeshError;
use crate::material::MaterialSlot;
use crate::mesh::Mesh;

/// An ordered loop of vertex indices in a mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexRing {
    indices: Vec<u32>,
}

impl VertexRing {
    /// Adds a circle of `segments` vertices at height `z` and returns it.
    ///
    /// Vertex `i` sits at angle `2π·i / segments`, counter-clockwise seen
    /// from +Z.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bushing_mesh::ops::VertexRing;
    /// use bushing_mesh::Mesh;
    ///
    /// let mut mesh = Mesh::new();
    /// let ring = VertexRing::circle(&mut mesh, 5.0, 0.0, 16).unwrap();
    /// assert_eq!(ring.len(), 16);
    /// assert_eq!(mesh.vertex_count(), 16);
    /// ```
    pub fn circle(mesh: &mut Mesh, radius: f64, z: f64, segments: u32) -> Result<Self, MeshError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(MeshError::degenerate(format!(
                "ring radius must be positive: {radius}"
            )));
        }
        if segments < 3 {
            return Err(MeshError::degenerate(format!(
                "ring needs at least 3 segments: {segments}"
            )));
        }

        let indices = (0..segments)
            .map(|i| {
                let theta = 2.0 * PI * i as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z))
            })
            .collect();

        Ok(Self { indices })
    }

    /// Wraps existing vertex indices as a ring.
    pub fn from_indices(indices: Vec<u32>) -> Self {
        Self { indices }
    }

    /// Returns the number of vertices in the ring.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the ring has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the vertex indices in ring order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Average position of the ring's vertices.
    pub fn centroid(&self, mesh: &Mesh) -> DVec3 {
        if self.indices.is_empty() {
            return DVec3::ZERO;
        }
        let sum: DVec3 = self.indices.iter().map(|i| mesh.vertex(*i)).sum();
        sum / self.indices.len() as f64
    }

    fn check(&self, mesh: &Mesh) -> Result<(), MeshError> {
        if self.indices.len() < 3 {
            return Err(MeshError::topology(format!(
                "ring has {} vertices",
                self.indices.len()
            )));
        }
        let count = mesh.vertex_count() as u32;
        if let Some(bad) = self.indices.iter().find(|i| **i >= count) {
            return Err(MeshError::topology(format!(
                "ring references vertex {bad} of {count}"
            )));
        }
        Ok(())
    }
}

/// Result of one extrusion step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extrusion {
    /// The newly created ring
    pub ring: VertexRing,
    /// Indices of the side faces created by this step
    pub faces: Range<usize>,
}

/// Extrudes `ring` and scales the copy in X/Y about the ring's axis.
///
/// The new side faces get `material`. A factor of 1 produces zero-area
/// faces, which is how a material seam is placed at an unchanged radius.
pub fn extrude_scale(
    mesh: &mut Mesh,
    ring: &VertexRing,
    scale_xy: f64,
    material: MaterialSlot,
) -> Result<Extrusion, MeshError> {
    if !(scale_xy > 0.0 && scale_xy.is_finite()) {
        return Err(MeshError::degenerate(format!(
            "extrusion scale must be positive: {scale_xy}"
        )));
    }
    ring.check(mesh)?;

    let axis = ring.centroid(mesh);
    Ok(extrude_with(mesh, ring, material, |p| {
        DVec3::new(
            axis.x + (p.x - axis.x) * scale_xy,
            axis.y + (p.y - axis.y) * scale_xy,
            p.z,
        )
    }))
}

/// Extrudes `ring` and shifts the copy along Z by `dz`.
///
/// `dz` may be negative.
pub fn extrude_translate(
    mesh: &mut Mesh,
    ring: &VertexRing,
    dz: f64,
    material: MaterialSlot,
) -> Result<Extrusion, MeshError> {
    if !dz.is_finite() {
        return Err(MeshError::degenerate(format!(
            "extrusion offset must be finite: {dz}"
        )));
    }
    ring.check(mesh)?;

    Ok(extrude_with(mesh, ring, material, |p| p + DVec3::new(0.0, 0.0, dz)))
}

fn extrude_with(
    mesh: &mut Mesh,
    ring: &VertexRing,
    material: MaterialSlot,
    place: impl Fn(DVec3) -> DVec3,
) -> Extrusion {
    let indices: Vec<u32> = ring
        .indices
        .iter()
        .map(|i| {
            let position = place(mesh.vertex(*i));
            mesh.add_vertex(position)
        })
        .collect();
    let new_ring = VertexRing { indices };

    let faces = join(mesh, ring, &new_ring, material);
    Extrusion {
        ring: new_ring,
        faces,
    }
}

/// Joins two existing rings with one quad per segment.
///
/// Used to seal the last ring of a chain back onto the first.
/// Fails if the rings differ in length.
pub fn bridge_rings(
    mesh: &mut Mesh,
    from: &VertexRing,
    to: &VertexRing,
    material: MaterialSlot,
) -> Result<Range<usize>, MeshError> {
    if from.len() != to.len() {
        return Err(MeshError::topology(format!(
            "cannot bridge rings of {} and {} vertices",
            from.len(),
            to.len()
        )));
    }
    from.check(mesh)?;
    to.check(mesh)?;

    Ok(join(mesh, from, to, material))
}

fn join(mesh: &mut Mesh, a: &VertexRing, b: &VertexRing, material: MaterialSlot) -> Range<usize> {
    let start = mesh.face_count();
    let n = a.len();
    for i in 0..n {
        let next = (i + 1) % n;
        mesh.add_face(
            vec![a.indices[i], a.indices[next], b.indices[next], b.indices[i]],
            material,
        );
    }
    start..mesh.face_count()
}
