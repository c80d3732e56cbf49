//! # Configuration Constants
//!
//! Centralized constants for the bushing generator. All tessellation limits,
//! thread profile ratios, palette entries and panel defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Segment counts and mesh size limits
//! - **Thread**: Helix margins and tooth profile ratios
//! - **Defaults**: Parameter values used when a source omits a field
//! - **Palette**: Material names and colors
//! - **Layout**: Part names and placement for the generate action

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Radii and wall thicknesses below this are treated as collapsed.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum ring segment count.
///
/// Below eight segments the washer and taper rings collapse into shapes that
/// no longer read as round, and the helix gets fewer than four samples per
/// turn.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SEGMENTS;
///
/// let requested = 6;
/// assert!(requested < MIN_SEGMENTS);
/// ```
pub const MIN_SEGMENTS: u32 = 8;

/// Number of rings the body pipeline produces (base ring plus seven extrusions).
///
/// The body therefore holds `BODY_RING_COUNT * segments` vertices and the same
/// number of quads once the closing bridge is added.
pub const BODY_RING_COUNT: usize = 8;

/// Maximum number of vertices in a single part mesh.
///
/// Safety limit to prevent memory exhaustion from absurd segment counts or
/// very fine pitches.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// THREAD CONSTANTS
// =============================================================================

/// Axial clearance subtracted from the body height before laying out the helix.
///
/// Keeps the thread clear of the flat caps at both ends of the body.
pub const THREAD_AXIAL_MARGIN: f64 = 0.8;

/// Z of the first helix sample, half of [`THREAD_AXIAL_MARGIN`].
pub const THREAD_START_OFFSET: f64 = THREAD_AXIAL_MARGIN / 2.0;

/// Lower bound on the number of helix turns.
pub const MIN_THREAD_TURNS: f64 = 0.1;

/// Lower bound on the number of helix samples.
///
/// Two samples are the least a sweep needs to produce a solid.
pub const MIN_HELIX_POINTS: usize = 2;

/// Axial half-extent of the tooth profile, as a fraction of thread size.
///
/// # Example
///
/// ```rust
/// use config::constants::PROFILE_TIP_RATIO;
///
/// let thread_size = 3.0;
/// let tooth_height = 2.0 * thread_size * PROFILE_TIP_RATIO;
/// assert!((tooth_height - 4.2).abs() < 1e-9);
/// ```
pub const PROFILE_TIP_RATIO: f64 = 0.7;

/// Radial depth of the tooth heel behind the base radius, as a fraction of
/// thread size.
///
/// The heel buries the tooth root slightly inside the body wall so the two
/// solids overlap instead of touching along a line.
pub const PROFILE_HEEL_RATIO: f64 = 0.2;

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default ring segment count.
pub const DEFAULT_SEGMENTS: u32 = 64;

/// Default overall diameter proxy.
pub const DEFAULT_RADIUS: f64 = 40.0;

/// Default body height (excluding the washer).
pub const DEFAULT_HEIGHT: f64 = 50.0;

/// Default wall thickness.
pub const DEFAULT_THICKNESS: f64 = 2.0;

/// Default radial thread size.
pub const DEFAULT_THREAD_SIZE: f64 = 3.0;

/// Default axial distance between thread turns.
pub const DEFAULT_THREAD_PITCH: f64 = 5.0;

/// Default radial gap between the nut's inner wall and the bolt's thread peak.
pub const DEFAULT_CLEARANCE: f64 = 0.2;

/// Default washer overhang past the body's outer wall.
pub const DEFAULT_WASHER_RADIUS: f64 = 20.0;

/// Default washer thickness.
pub const DEFAULT_WASHER_HEIGHT: f64 = 5.0;

// =============================================================================
// PALETTE CONSTANTS
// =============================================================================

/// Number of material slots every generated part carries.
pub const MATERIAL_COUNT: usize = 6;

/// Fixed material table, indexed by material slot.
///
/// RGBA values in range [0.0, 1.0].
///
/// # Example
///
/// ```rust
/// use config::constants::MATERIAL_PALETTE;
///
/// let (name, color) = MATERIAL_PALETTE[1];
/// assert_eq!(name, "M_Green");
/// assert_eq!(color, [0.0, 1.0, 0.0, 1.0]);
/// ```
pub const MATERIAL_PALETTE: [(&str, [f32; 4]); MATERIAL_COUNT] = [
    ("M_Blue", [0.05, 0.2, 0.9, 1.0]),
    ("M_Green", [0.0, 1.0, 0.0, 1.0]),
    ("M_Red", [0.9, 0.05, 0.05, 1.0]),
    ("M_Pink", [1.0, 0.2, 0.7, 1.0]),
    ("M_Orange", [1.0, 0.4, 0.0, 1.0]),
    ("M_White", [1.0, 1.0, 1.0, 1.0]),
];

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Scene name of the internally threaded part.
pub const NUT_NAME: &str = "Nut";

/// Scene name of the externally threaded part.
pub const BOLT_NAME: &str = "Bolt";

/// The bolt is placed at `x = -(radius * BOLT_SPACING_FACTOR)`.
pub const BOLT_SPACING_FACTOR: f64 = 2.5;

// =============================================================================
// GENERATOR CONFIG
// =============================================================================

/// Immutable snapshot of the generate action's layout settings.
///
/// # Example
///
/// ```rust
/// use config::constants::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.nut_name, "Nut");
/// assert!(config.bolt_spacing_factor > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Scene name for the nut.
    pub nut_name: String,
    /// Scene name for the bolt.
    pub bolt_name: String,
    /// Multiplier applied to the radius to place the bolt beside the nut.
    pub bolt_spacing_factor: f64,
}

impl GeneratorConfig {
    /// Builds a configuration, rejecting empty or clashing names and a
    /// non-positive spacing factor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::GeneratorConfig;
    ///
    /// let cfg = GeneratorConfig::new("Bushing", "Screw", 3.0).expect("valid config");
    /// assert_eq!(cfg.bolt_name, "Screw");
    /// assert!(GeneratorConfig::new("Same", "Same", 3.0).is_err());
    /// ```
    pub fn new(
        nut_name: impl Into<String>,
        bolt_name: impl Into<String>,
        bolt_spacing_factor: f64,
    ) -> Result<Self, ConfigError> {
        let nut_name = nut_name.into();
        let bolt_name = bolt_name.into();
        if nut_name.is_empty() || bolt_name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if nut_name == bolt_name {
            return Err(ConfigError::DuplicateName(nut_name));
        }
        if !(bolt_spacing_factor > 0.0 && bolt_spacing_factor.is_finite()) {
            return Err(ConfigError::InvalidSpacing(bolt_spacing_factor));
        }
        Ok(Self {
            nut_name,
            bolt_name,
            bolt_spacing_factor,
        })
    }

    /// X coordinate of the bolt for the given radius parameter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::GeneratorConfig;
    ///
    /// assert_eq!(GeneratorConfig::default().bolt_offset_x(40.0), -100.0);
    /// ```
    pub fn bolt_offset_x(&self, radius: f64) -> f64 {
        -(radius * self.bolt_spacing_factor)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            nut_name: NUT_NAME.to_string(),
            bolt_name: BOLT_NAME.to_string(),
            bolt_spacing_factor: BOLT_SPACING_FACTOR,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a part name is empty.
    EmptyName,
    /// Raised when both parts would share one scene name.
    DuplicateName(String),
    /// Raised when the spacing factor is zero, negative or not finite.
    InvalidSpacing(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyName => write!(f, "part names must not be empty"),
            ConfigError::DuplicateName(name) => {
                write!(f, "nut and bolt must have distinct names: {name}")
            }
            ConfigError::InvalidSpacing(value) => {
                write!(f, "bolt_spacing_factor must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of helix samples per thread turn for a ring segment count.
///
/// # Example
///
/// ```rust
/// use config::constants::points_per_turn;
///
/// assert_eq!(points_per_turn(64), 32);
/// assert_eq!(points_per_turn(9), 4);
/// ```
#[inline]
pub fn points_per_turn(segments: u32) -> usize {
    (segments / 2) as usize
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
