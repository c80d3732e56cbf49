//! # Bushing Mesh
//!
//! Parametric generator for threaded bushings: a nut with an internal thread
//! and a bolt with a matching external thread, built as closed polygon meshes
//! with per-face material slots.
//!
//! ## Architecture
//!
//! ```text
//! PartParameters → DerivedRadii → body (ring extrusions)
//!                               → thread (helix sweep)   → Part → SceneSink
//! ```
//!
//! ## Modules
//!
//! - **params / radii**: validated inputs and the radii derived from them
//! - **ops::ring**: ring extrusion and bridging on a shared mesh
//! - **body**: the washer-flanged tube
//! - **thread**: tapered helix and profile sweep
//! - **assembler**: one finished part
//! - **scene**: material binding, scene sink and the `generate` action
//!
//! ## Usage
//!
//! ```rust
//! use bushing_mesh::{assemble_part, PartKind, PartParameters};
//! use glam::DVec3;
//!
//! let part = assemble_part("Bolt", &PartParameters::default(), PartKind::Bolt, DVec3::ZERO)?;
//! assert!(part.mesh.is_closed());
//! # Ok::<(), bushing_mesh::MeshError>(())
//! ```

pub mod assembler;
pub mod body;
pub mod error;
pub mod material;
pub mod mesh;
pub mod ops;
pub mod params;
pub mod radii;
pub mod scene;
pub mod thread;

pub use assembler::{assemble_part, estimate_vertex_count, Part};
pub use body::build_body;
pub use error::MeshError;
pub use material::{MaterialHandle, MaterialRegistry, MaterialSlot, PaletteRegistry};
pub use mesh::{Face, Mesh};
pub use params::{PartKind, PartParameters};
pub use radii::DerivedRadii;
pub use scene::{generate, MemoryScene, SceneObject, SceneSink};
pub use thread::{build_thread, ThreadSpec};
