//! # Scene
//!
//! The host-facing end of the pipeline: a sink that holds named objects and
//! the `generate` action that fills it with a matching nut and bolt.
//!
//! ```text
//! PartParameters ─┬─ assemble_part(Nut)  ─┐
//!                 │   (rayon::join)       ├─ bind materials ─▶ SceneSink::replace
//!                 └─ assemble_part(Bolt) ─┘
//! ```

use config::constants::GeneratorConfig;
use glam::DVec3;
use tracing::{info, instrument};

use crate::assembler::{assemble_part, Part};
use crate::error::MeshError;
use crate::material::MaterialRegistry;
use crate::mesh::Mesh;
use crate::params::{PartKind, PartParameters};

/// A named mesh placed in a scene with its material list.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject<M> {
    /// Unique name within the scene
    pub name: String,
    /// World placement of the mesh's local origin
    pub location: DVec3,
    /// Geometry in local coordinates
    pub mesh: Mesh,
    /// One entry per material slot; face material indices point into this list
    pub materials: Vec<M>,
}

impl<M> SceneObject<M> {
    /// Wraps a finished part.
    pub fn from_part(part: Part, materials: Vec<M>) -> Self {
        Self {
            name: part.name,
            location: part.location,
            mesh: part.mesh,
            materials,
        }
    }
}

/// Destination for finished parts.
pub trait SceneSink {
    /// Material handle type the host attaches to objects.
    type Material;

    /// Removes the object called `name`, if any.
    fn remove(&mut self, name: &str) -> Option<SceneObject<Self::Material>>;

    /// Adds an object. The name is assumed to be free.
    fn insert(&mut self, object: SceneObject<Self::Material>);

    /// Replaces any object with the same name, returning the old one.
    fn replace(
        &mut self,
        object: SceneObject<Self::Material>,
    ) -> Option<SceneObject<Self::Material>> {
        let previous = self.remove(&object.name);
        self.insert(object);
        previous
    }
}

/// In-memory scene keeping objects in insertion order.
#[derive(Debug, Clone)]
pub struct MemoryScene<M> {
    objects: Vec<SceneObject<M>>,
}

impl<M> Default for MemoryScene<M> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
        }
    }
}

impl<M> MemoryScene<M> {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an object by name.
    pub fn get(&self, name: &str) -> Option<&SceneObject<M>> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Object names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.objects.iter().map(|o| o.name.as_str()).collect()
    }

    /// Objects in insertion order.
    pub fn objects(&self) -> &[SceneObject<M>] {
        &self.objects
    }
}

impl<M> SceneSink for MemoryScene<M> {
    type Material = M;

    fn remove(&mut self, name: &str) -> Option<SceneObject<M>> {
        let position = self.objects.iter().position(|o| o.name == name)?;
        Some(self.objects.remove(position))
    }

    fn insert(&mut self, object: SceneObject<M>) {
        self.objects.push(object);
    }
}

/// Builds a nut at the origin and a matching bolt beside it, then replaces
/// both in `sink` by name.
///
/// Both parts are built before the sink is touched, so a failure in either
/// leaves the scene unchanged.
///
/// # Example
///
/// ```rust
/// use bushing_mesh::{generate, MemoryScene, PaletteRegistry, PartParameters};
/// use config::constants::GeneratorConfig;
///
/// let mut registry = PaletteRegistry::new();
/// let mut scene = MemoryScene::new();
/// generate(&PartParameters::default(), &GeneratorConfig::default(), &mut registry, &mut scene).unwrap();
/// assert_eq!(scene.names(), vec!["Nut", "Bolt"]);
/// assert_eq!(scene.get("Bolt").unwrap().location.x, -100.0);
/// ```
#[instrument(skip_all, fields(nut = %config.nut_name, bolt = %config.bolt_name))]
pub fn generate<R, S>(
    params: &PartParameters,
    config: &GeneratorConfig,
    registry: &mut R,
    sink: &mut S,
) -> Result<(), MeshError>
where
    R: MaterialRegistry,
    S: SceneSink<Material = R::Handle>,
{
    let bolt_location = DVec3::new(config.bolt_offset_x(params.radius), 0.0, 0.0);

    let (nut, bolt) = rayon::join(
        || assemble_part(&config.nut_name, params, PartKind::Nut, DVec3::ZERO),
        || assemble_part(&config.bolt_name, params, PartKind::Bolt, bolt_location),
    );
    let (nut, bolt) = (nut?, bolt?);

    for part in [nut, bolt] {
        let materials = registry.bind_part();
        let replaced = sink.replace(SceneObject::from_part(part, materials));
        if let Some(old) = replaced {
            info!(name = %old.name, "replaced existing object");
        }
    }

    Ok(())
}
