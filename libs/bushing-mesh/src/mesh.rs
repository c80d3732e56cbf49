//! # Mesh Data Structure
//!
//! Polygon mesh with per-face material slots and shading flags.

use std::collections::HashMap;

use config::constants::MATERIAL_COUNT;
use glam::DVec3;

use crate::error::MeshError;
use crate::material::MaterialSlot;

/// One polygonal face.
///
/// Indices form a closed cycle. Faces produced by this crate are planar,
/// convex quads, ordered counter-clockwise when seen from outside the solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Vertex indices in winding order
    pub indices: Vec<u32>,
    /// Material slot used to render the face
    pub material: MaterialSlot,
    /// Smooth-shading hint; `false` means flat shading
    pub smooth: bool,
}

/// A polygon mesh with vertices, faces and per-face materials.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the GPU boundary.
///
/// # Example
///
/// ```rust
/// use bushing_mesh::{MaterialSlot, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(vec![0, 1, 2, 3], MaterialSlot::BodyOuter);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Polygon faces
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a flat-shaded face and returns its index.
    pub fn add_face(&mut self, indices: Vec<u32>, material: MaterialSlot) -> usize {
        let index = self.faces.len();
        self.faces.push(Face {
            indices,
            material,
            smooth: false,
        });
        index
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> &Face {
        &self.faces[index]
    }

    /// Sets the shading hint on every face.
    pub fn set_smooth(&mut self, smooth: bool) {
        for face in &mut self.faces {
            face.smooth = smooth;
        }
    }

    /// Counts faces per material slot, indexed by material index.
    pub fn material_face_counts(&self) -> [usize; MATERIAL_COUNT] {
        let mut counts = [0; MATERIAL_COUNT];
        for face in &self.faces {
            counts[face.material.index() as usize] += 1;
        }
        counts
    }

    /// Unit normal of a face (Newell's method), or zero for a collapsed face.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let indices = &self.faces[index].indices;
        let mut normal = DVec3::ZERO;
        for (i, &a) in indices.iter().enumerate() {
            let b = indices[(i + 1) % indices.len()];
            let va = self.vertex(a);
            let vb = self.vertex(b);
            normal.x += (va.y - vb.y) * (va.z + vb.z);
            normal.y += (va.z - vb.z) * (va.x + vb.x);
            normal.z += (va.x - vb.x) * (va.y + vb.y);
        }
        normal.normalize_or_zero()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Signed volume enclosed by the faces.
    ///
    /// Positive when faces wind counter-clockwise seen from outside.
    /// Only meaningful for closed meshes.
    pub fn signed_volume(&self) -> f64 {
        self.triangulate()
            .iter()
            .map(|[a, b, c]| {
                self.vertex(*a).dot(self.vertex(*b).cross(self.vertex(*c))) / 6.0
            })
            .sum()
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Merges another mesh into this one.
    ///
    /// Vertices and faces are appended and the other mesh's indices offset.
    /// No boolean is computed; overlapping solids stay overlapping.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for face in &other.faces {
            self.faces.push(Face {
                indices: face.indices.iter().map(|i| i + offset).collect(),
                material: face.material,
                smooth: face.smooth,
            });
        }
    }

    /// Validates face indices.
    ///
    /// Checks:
    /// - Every face has at least 3 indices
    /// - All indices are in range
    /// - No index repeats within a face
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len() as u32;

        for (face_index, face) in self.faces.iter().enumerate() {
            if face.indices.len() < 3 {
                return Err(MeshError::topology(format!(
                    "face {face_index} has {} indices",
                    face.indices.len()
                )));
            }
            if let Some(bad) = face.indices.iter().find(|i| **i >= vertex_count) {
                return Err(MeshError::topology(format!(
                    "face {face_index} references vertex {bad} of {vertex_count}"
                )));
            }
            for (i, a) in face.indices.iter().enumerate() {
                if face.indices[i + 1..].contains(a) {
                    return Err(MeshError::topology(format!(
                        "face {face_index} repeats vertex {a}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Checks that the mesh is a closed, consistently oriented surface.
    ///
    /// Every directed edge must occur exactly once and its reverse must also
    /// occur exactly once, so every undirected edge borders exactly two faces.
    pub fn check_closed(&self) -> Result<(), MeshError> {
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for face in &self.faces {
            let n = face.indices.len();
            for i in 0..n {
                let edge = (face.indices[i], face.indices[(i + 1) % n]);
                *edges.entry(edge).or_insert(0) += 1;
            }
        }

        for (&(a, b), &count) in &edges {
            if count != 1 {
                return Err(MeshError::topology(format!(
                    "edge {a}->{b} is used by {count} faces"
                )));
            }
            if !edges.contains_key(&(b, a)) {
                return Err(MeshError::topology(format!(
                    "edge {a}-{b} borders only one face"
                )));
            }
        }

        Ok(())
    }

    /// Returns true if [`Mesh::check_closed`] passes.
    pub fn is_closed(&self) -> bool {
        self.check_closed().is_ok()
    }

    /// Fan-triangulates every face.
    ///
    /// Valid for the convex faces this crate produces.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.faces.len() * 2);
        for face in &self.faces {
            let Some(&first) = face.indices.first() else {
                continue;
            };
            for pair in face.indices[1..].windows(2) {
                triangles.push([first, pair[0], pair[1]]);
            }
        }
        triangles
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports fan-triangulated indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangulate().into_iter().flatten().collect()
    }

    /// Exports the material index of every triangle from [`Mesh::indices_u32`].
    pub fn triangle_materials(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.faces.len() * 2);
        for face in &self.faces {
            let triangles = face.indices.len().saturating_sub(2);
            result.extend(std::iter::repeat(face.material.index() as u32).take(triangles));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit cube with outward-facing quads.
    fn unit_cube() -> Mesh {
        let mut mesh = Mesh::new();
        for z in [0.0, 1.0] {
            mesh.add_vertex(DVec3::new(0.0, 0.0, z));
            mesh.add_vertex(DVec3::new(1.0, 0.0, z));
            mesh.add_vertex(DVec3::new(1.0, 1.0, z));
            mesh.add_vertex(DVec3::new(0.0, 1.0, z));
        }
        mesh.add_face(vec![0, 3, 2, 1], MaterialSlot::Inner);
        mesh.add_face(vec![4, 5, 6, 7], MaterialSlot::Taper);
        mesh.add_face(vec![0, 1, 5, 4], MaterialSlot::BodyOuter);
        mesh.add_face(vec![1, 2, 6, 5], MaterialSlot::BodyOuter);
        mesh.add_face(vec![2, 3, 7, 6], MaterialSlot::BodyOuter);
        mesh.add_face(vec![3, 0, 4, 7], MaterialSlot::BodyOuter);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_new_faces_are_flat() {
        let mesh = unit_cube();
        assert!(mesh.faces().iter().all(|f| !f.smooth));
    }

    #[test]
    fn test_set_smooth() {
        let mut mesh = unit_cube();
        mesh.set_smooth(true);
        assert!(mesh.faces().iter().all(|f| f.smooth));
    }

    #[test]
    fn test_cube_is_closed_with_unit_volume() {
        let mesh = unit_cube();
        assert!(mesh.validate().is_ok());
        assert!(mesh.is_closed());
        assert_relative_eq!(mesh.signed_volume(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_open_mesh_detected() {
        let mut mesh = unit_cube();
        mesh.faces.pop();
        assert!(matches!(
            mesh.check_closed(),
            Err(MeshError::TopologyMismatch { .. })
        ));
    }

    #[test]
    fn test_face_normal_points_outward() {
        let mesh = unit_cube();
        assert_relative_eq!(mesh.face_normal(0).z, -1.0);
        assert_relative_eq!(mesh.face_normal(1).z, 1.0);
        assert_relative_eq!(mesh.face_normal(2).y, -1.0);
    }

    #[test]
    fn test_material_face_counts() {
        let counts = unit_cube().material_face_counts();
        assert_eq!(counts, [4, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_face(vec![0, 1, 2], MaterialSlot::Thread);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_validate_repeated_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_face(vec![0, 1, 0], MaterialSlot::Thread);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_mesh_merge_offsets_indices() {
        let mut a = unit_cube();
        let mut b = unit_cube();
        b.translate(DVec3::new(5.0, 0.0, 0.0));
        a.merge(&b);

        assert_eq!(a.vertex_count(), 16);
        assert_eq!(a.face_count(), 12);
        assert_eq!(a.face(6).indices, vec![8, 11, 10, 9]);
        assert_eq!(a.face(7).material, MaterialSlot::Taper);
        assert!(a.is_closed());
        assert_relative_eq!(a.signed_volume(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gpu_export() {
        let mesh = unit_cube();
        assert_eq!(mesh.vertices_f32().len(), 24);
        assert_eq!(mesh.indices_u32().len(), 36);
        let materials = mesh.triangle_materials();
        assert_eq!(materials.len(), 12);
        assert_eq!(&materials[..4], &[5, 5, 3, 3]);
    }
}
