//! 2D vector value type for points, directions and texture coordinates.
//!
//! [`Cartesian2`] is a plain `Copy` value compared by its fields. Operations
//! are associated functions grouped by concern:
//!
//! - construction, cloning and equality live here
//! - [`arithmetic`] holds the component-wise operations
//! - [`geometry`] holds magnitudes, angles, axis selection and interpolation
//!
//! Each operation that produces a vector has an `_into` twin that writes into
//! a caller-owned `result` and returns that same reference. Operands are taken
//! by value, so passing one of them as `result` is allowed.

pub mod arithmetic;
pub mod geometry;

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::CartesianResult;
use crate::packable::{packed_slots, Packable};

/// A two-component floating-point vector.
///
/// # Examples
/// ```
/// use cartesian::Cartesian2;
///
/// let v = Cartesian2::new(1.0, 2.0);
/// assert_eq!(v, Cartesian2::from_elements(1.0, 2.0));
/// assert_eq!(Cartesian2::default(), Cartesian2::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Cartesian2 {
    /// `(0, 0)`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `(1, 0)`
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// `(0, 1)`
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Tolerance used by [`Cartesian2::approx_eq`].
    pub const DEFAULT_EPSILON: f64 = config::constants::EPSILON;

    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector from two scalars.
    pub fn from_elements(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }

    /// Writes two scalars into `result`.
    pub fn from_elements_into(x: f64, y: f64, result: &mut Self) -> &mut Self {
        store(result, Self::new(x, y))
    }

    /// Reads a vector from the first two elements of `buffer`.
    pub fn from_array(buffer: &[f64]) -> CartesianResult<Self> {
        Self::from_array_at(buffer, 0)
    }

    /// Reads a vector from two consecutive elements of `buffer` beginning at
    /// `starting_index`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CartesianError::InvalidArgument`] when the second
    /// element would lie past the end of `buffer`.
    ///
    /// # Examples
    /// ```
    /// use cartesian::Cartesian2;
    ///
    /// let v = Cartesian2::from_array_at(&[0.0, 1.0, 2.0, 0.0], 1).unwrap();
    /// assert_eq!(v, Cartesian2::new(1.0, 2.0));
    /// assert!(Cartesian2::from_array_at(&[0.0, 0.0], 1).is_err());
    /// ```
    pub fn from_array_at(buffer: &[f64], starting_index: usize) -> CartesianResult<Self> {
        let slots = packed_slots("from_array", buffer.len(), starting_index, 2)?;
        Ok(Self::new(buffer[slots.start], buffer[slots.start + 1]))
    }

    /// Reads a vector from `buffer` into `result`, leaving `result` untouched
    /// on failure.
    pub fn from_array_into<'r>(
        buffer: &[f64],
        starting_index: usize,
        result: &'r mut Self,
    ) -> CartesianResult<&'r mut Self> {
        let value = Self::from_array_at(buffer, starting_index)?;
        Ok(store(result, value))
    }

    /// Copies `self` into `result` and returns it.
    ///
    /// Copying a vector into itself is a no-op.
    pub fn copy_into(self, result: &mut Self) -> &mut Self {
        store(result, self)
    }

    /// Clones an optional vector. An absent source yields `None`.
    pub fn clone_optional(source: Option<&Self>) -> Option<Self> {
        source.copied()
    }

    /// Clones an optional vector into `result`.
    ///
    /// Returns `None` and leaves `result` untouched when `source` is absent.
    pub fn clone_optional_into<'r>(
        source: Option<&Self>,
        result: &'r mut Self,
    ) -> Option<&'r mut Self> {
        source.map(|source| store(result, *source))
    }

    /// Component-wise exact equality. Absent operands are never equal.
    pub fn equals(left: Option<&Self>, right: Option<&Self>) -> bool {
        match (left, right) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }

    /// Returns `true` when both absolute component differences are at most
    /// `epsilon`. Absent operands are never equal.
    ///
    /// # Examples
    /// ```
    /// use cartesian::Cartesian2;
    ///
    /// let a = Cartesian2::new(1.0, 2.0);
    /// assert!(Cartesian2::equals_epsilon(Some(&a), Some(&Cartesian2::new(2.0, 2.0)), 1.0));
    /// assert!(!Cartesian2::equals_epsilon(Some(&a), Some(&Cartesian2::new(2.0, 2.0)), 0.99999));
    /// assert!(!Cartesian2::equals_epsilon(Some(&a), None, 1.0));
    /// ```
    pub fn equals_epsilon(left: Option<&Self>, right: Option<&Self>, epsilon: f64) -> bool {
        use config::constants::equals_epsilon;

        match (left, right) {
            (Some(left), Some(right)) => {
                equals_epsilon(left.x, right.x, epsilon) && equals_epsilon(left.y, right.y, epsilon)
            }
            _ => false,
        }
    }

    /// Equality within [`Cartesian2::DEFAULT_EPSILON`].
    pub fn approx_eq(self, other: Self) -> bool {
        Self::equals_epsilon(Some(&self), Some(&other), Self::DEFAULT_EPSILON)
    }

    /// Components as an array.
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Overwrites `result` with `value` and hands the reference back.
pub(crate) fn store(result: &mut Cartesian2, value: Cartesian2) -> &mut Cartesian2 {
    *result = value;
    result
}

impl fmt::Display for Cartesian2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// PACKING
// =============================================================================

impl Packable for Cartesian2 {
    const PACKED_LENGTH: usize = 2;

    fn pack_at<'a>(
        &self,
        buffer: &'a mut [f64],
        starting_index: usize,
    ) -> CartesianResult<&'a mut [f64]> {
        let slots = packed_slots("pack", buffer.len(), starting_index, Self::PACKED_LENGTH)?;
        buffer[slots].copy_from_slice(&[self.x, self.y]);
        Ok(buffer)
    }

    fn unpack_at(buffer: &[f64], starting_index: usize) -> CartesianResult<Self> {
        let slots = packed_slots("unpack", buffer.len(), starting_index, Self::PACKED_LENGTH)?;
        Ok(Self::new(buffer[slots.start], buffer[slots.start + 1]))
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<[f64; 2]> for Cartesian2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Cartesian2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Cartesian2> for [f64; 2] {
    fn from(value: Cartesian2) -> Self {
        value.to_array()
    }
}

impl From<DVec2> for Cartesian2 {
    fn from(value: DVec2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Cartesian2> for DVec2 {
    fn from(value: Cartesian2) -> Self {
        DVec2::new(value.x, value.y)
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl Add for Cartesian2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::add(self, rhs)
    }
}

impl Sub for Cartesian2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::subtract(self, rhs)
    }
}

impl Neg for Cartesian2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::negate(self)
    }
}

impl Mul<f64> for Cartesian2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::multiply_by_scalar(self, rhs)
    }
}

impl Mul<Cartesian2> for f64 {
    type Output = Cartesian2;

    fn mul(self, rhs: Cartesian2) -> Cartesian2 {
        Cartesian2::multiply_by_scalar(rhs, self)
    }
}

impl Div<f64> for Cartesian2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::divide_by_scalar(self, rhs)
    }
}

impl AddAssign for Cartesian2 {
    fn add_assign(&mut self, rhs: Self) {
        Self::add_into(*self, rhs, self);
    }
}

impl SubAssign for Cartesian2 {
    fn sub_assign(&mut self, rhs: Self) {
        Self::subtract_into(*self, rhs, self);
    }
}

impl MulAssign<f64> for Cartesian2 {
    fn mul_assign(&mut self, rhs: f64) {
        Self::multiply_by_scalar_into(*self, rhs, self);
    }
}

impl DivAssign<f64> for Cartesian2 {
    fn div_assign(&mut self, rhs: f64) {
        Self::divide_by_scalar_into(*self, rhs, self);
    }
}
