//! # Mesh Operations
//!
//! Low-level operations that grow a [`Mesh`](crate::Mesh) in place.

pub mod ring;

pub use ring::{bridge_rings, extrude_scale, extrude_translate, Extrusion, VertexRing};
