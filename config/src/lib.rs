//! # Config Crate
//!
//! Centralized numeric constants for the geometry crates. Every tolerance
//! and well-known angle used by the vector types is defined here so that
//! tests and kernels compare against the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{equals_epsilon, EPSILON14, PI_OVER_FOUR};
//!
//! let angle = (1.0_f64).atan2(1.0);
//! assert!(equals_epsilon(angle, PI_OVER_FOUR, EPSILON14));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Absolute Tolerances**: Comparisons bound each difference directly

pub mod constants;
