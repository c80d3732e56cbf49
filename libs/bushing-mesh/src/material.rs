//! # Materials
//!
//! Fixed per-face material slots and the registry seam that binds them to
//! renderable handles in a host.
//!
//! Geometry code only ever tags faces with a [`MaterialSlot`]. Turning a slot
//! into something a renderer understands is the job of a [`MaterialRegistry`],
//! which the host creates once per session and passes in explicitly.

use std::collections::HashMap;

use config::constants::{MATERIAL_COUNT, MATERIAL_PALETTE};
use serde::{Deserialize, Serialize};

/// Material slot assigned to a face.
///
/// The discriminant is the material index stored on the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum MaterialSlot {
    /// Blue: main outer side wall
    BodyOuter = 0,
    /// Green: helical thread
    Thread = 1,
    /// Red: flange between washer and stem
    Flange = 2,
    /// Pink: top taper back to the inner wall
    Taper = 3,
    /// Orange: washer rim
    WasherTop = 4,
    /// White: inner wall, washer bottom and the closing bridge
    Inner = 5,
}

impl MaterialSlot {
    /// All slots in index order.
    pub const ALL: [MaterialSlot; MATERIAL_COUNT] = [
        MaterialSlot::BodyOuter,
        MaterialSlot::Thread,
        MaterialSlot::Flange,
        MaterialSlot::Taper,
        MaterialSlot::WasherTop,
        MaterialSlot::Inner,
    ];

    /// Returns the material index stored on faces.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a slot by material index.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Palette name, e.g. `"M_Blue"`.
    pub fn name(self) -> &'static str {
        MATERIAL_PALETTE[self as usize].0
    }

    /// Palette RGBA color.
    pub fn color(self) -> [f32; 4] {
        MATERIAL_PALETTE[self as usize].1
    }
}

/// Binds material slots to host-side appearance handles.
pub trait MaterialRegistry {
    /// Host handle for one material.
    type Handle: Clone;

    /// Returns the handle for `slot`, creating it on first use.
    fn resolve(&mut self, slot: MaterialSlot) -> Self::Handle;

    /// Returns the material list for one part, in slot order.
    ///
    /// Every part carries all six slots so face material indices line up with
    /// list positions even when a slot has no faces.
    fn bind_part(&mut self) -> Vec<Self::Handle> {
        MaterialSlot::ALL
            .iter()
            .map(|slot| self.resolve(*slot))
            .collect()
    }
}

/// Handle produced by [`PaletteRegistry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialHandle {
    /// Creation order within the registry
    pub id: u32,
    /// Palette name
    pub name: &'static str,
    /// RGBA color
    pub color: [f32; 4],
}

/// In-memory registry backed by the fixed palette.
///
/// Handles are created once and looked up by name afterwards, so binding
/// several parts in one session shares the same six materials.
#[derive(Debug, Default)]
pub struct PaletteRegistry {
    handles: HashMap<&'static str, MaterialHandle>,
}

impl PaletteRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct materials created so far.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns true if no material has been created yet.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Looks up an already created material by palette name.
    pub fn get(&self, name: &str) -> Option<&MaterialHandle> {
        self.handles.get(name)
    }
}

impl MaterialRegistry for PaletteRegistry {
    type Handle = MaterialHandle;

    fn resolve(&mut self, slot: MaterialSlot) -> MaterialHandle {
        let next_id = self.handles.len() as u32;
        *self.handles.entry(slot.name()).or_insert_with(|| MaterialHandle {
            id: next_id,
            name: slot.name(),
            color: slot.color(),
        })
    }
}
