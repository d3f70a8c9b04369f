//! # Config Crate
//!
//! Centralized configuration constants for the fence mesh pipeline.
//! Tolerances, layout strides and tunable thresholds are defined here so
//! the type and mesh crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, DEGENERATE_SEGMENT_TOLERANCE, UZ_COMPONENTS};
//!
//! // A segment shorter than the tolerance cannot define a direction
//! let segment_length: f64 = 1e-14;
//! assert!(segment_length < DEGENERATE_SEGMENT_TOLERANCE);
//! assert!(approx_zero(segment_length));
//!
//! // Vertex arrays are flat (u, z) pairs
//! let uz = [0.0, 0.0, 5.0, 3.0];
//! assert_eq!(uz.len() / UZ_COMPONENTS, 2);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig::new` rejects nonsensical values

pub mod constants;
