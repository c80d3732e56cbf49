//! # Config Crate
//!
//! Centralized configuration constants for the bushing generator.
//! All magic numbers and tunable parameters are defined here so the geometry
//! crate stays declarative and the values are tuned in one place.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{points_per_turn, DEFAULT_SEGMENTS, MIN_SEGMENTS};
//!
//! assert!(DEFAULT_SEGMENTS >= MIN_SEGMENTS);
//! assert_eq!(points_per_turn(DEFAULT_SEGMENTS), 32);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain values and one validated snapshot struct
//! - **Documented**: Every constant has clear documentation

pub mod constants;
