//! # Configuration Constants
//!
//! Precision ladders and angle constants shared by the vector types.
//!
//! ## Categories
//!
//! - **Precision**: The `EPSILON1..=EPSILON21` tolerance ladder
//! - **Angles**: Fractions and multiples of PI in radians
//! - **Helpers**: Absolute-tolerance scalar comparisons

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// 0.1
pub const EPSILON1: f64 = 1e-1;
/// 0.01
pub const EPSILON2: f64 = 1e-2;
/// 0.001
pub const EPSILON3: f64 = 1e-3;
/// 0.0001
pub const EPSILON4: f64 = 1e-4;
/// 0.00001
pub const EPSILON5: f64 = 1e-5;
/// 0.000001
pub const EPSILON6: f64 = 1e-6;
/// 0.0000001
pub const EPSILON7: f64 = 1e-7;
/// 0.00000001
pub const EPSILON8: f64 = 1e-8;
/// 0.000000001
pub const EPSILON9: f64 = 1e-9;
/// 0.0000000001
pub const EPSILON10: f64 = 1e-10;
/// 0.00000000001
pub const EPSILON11: f64 = 1e-11;
/// 0.000000000001
pub const EPSILON12: f64 = 1e-12;
/// 0.0000000000001
pub const EPSILON13: f64 = 1e-13;
/// 0.00000000000001
pub const EPSILON14: f64 = 1e-14;
/// 0.000000000000001
pub const EPSILON15: f64 = 1e-15;
/// 0.0000000000000001
pub const EPSILON16: f64 = 1e-16;
/// 0.00000000000000001
pub const EPSILON17: f64 = 1e-17;
/// 0.000000000000000001
pub const EPSILON18: f64 = 1e-18;
/// 0.0000000000000000001
pub const EPSILON19: f64 = 1e-19;
/// 0.00000000000000000001
pub const EPSILON20: f64 = 1e-20;
/// 0.000000000000000000001
pub const EPSILON21: f64 = 1e-21;

/// Default tolerance for floating-point comparisons.
///
/// Used when a caller asks for "approximately equal" without naming a
/// tolerance of its own.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() <= EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = EPSILON10;

// =============================================================================
// ANGLE CONSTANTS
// =============================================================================

/// Half turn in radians.
pub const PI: f64 = std::f64::consts::PI;

/// Full turn in radians.
pub const TWO_PI: f64 = 2.0 * PI;

/// Quarter turn in radians.
///
/// # Example
///
/// ```rust
/// use config::constants::{PI, PI_OVER_TWO};
///
/// assert_eq!(PI_OVER_TWO * 2.0, PI);
/// ```
pub const PI_OVER_TWO: f64 = std::f64::consts::FRAC_PI_2;

/// Sixth of a turn in radians.
pub const PI_OVER_THREE: f64 = std::f64::consts::FRAC_PI_3;

/// Eighth of a turn in radians.
pub const PI_OVER_FOUR: f64 = std::f64::consts::FRAC_PI_4;

/// Twelfth of a turn in radians.
pub const PI_OVER_SIX: f64 = std::f64::consts::FRAC_PI_6;

/// Three quarter turns in radians.
pub const THREE_PI_OVER_TWO: f64 = 3.0 * PI / 2.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values differ by no more than `epsilon`.
///
/// The bound is absolute and inclusive: a difference of exactly `epsilon`
/// passes.
///
/// # Example
///
/// ```rust
/// use config::constants::equals_epsilon;
///
/// assert!(equals_epsilon(1.0, 2.0, 1.0));
/// assert!(!equals_epsilon(1.0, 2.0, 0.99999));
/// ```
#[inline]
pub fn equals_epsilon(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Checks if a f64 value is approximately zero within [`EPSILON`].
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
    value.abs() <= EPSILON
}
