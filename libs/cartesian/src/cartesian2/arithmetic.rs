//! Component-wise arithmetic on [`Cartesian2`].
//!
//! Division follows IEEE 754: dividing by zero yields infinities or NaN
//! rather than an error.

use super::{store, Cartesian2};

impl Cartesian2 {
    /// `(left.x + right.x, left.y + right.y)`
    ///
    /// # Examples
    /// ```
    /// use cartesian::Cartesian2;
    ///
    /// let sum = Cartesian2::add(Cartesian2::new(2.0, 3.0), Cartesian2::new(4.0, 5.0));
    /// assert_eq!(sum, Cartesian2::new(6.0, 8.0));
    /// ```
    pub fn add(left: Self, right: Self) -> Self {
        Self::new(left.x + right.x, left.y + right.y)
    }

    /// Writes `left + right` into `result`.
    pub fn add_into(left: Self, right: Self, result: &mut Self) -> &mut Self {
        store(result, Self::add(left, right))
    }

    /// `(left.x - right.x, left.y - right.y)`
    pub fn subtract(left: Self, right: Self) -> Self {
        Self::new(left.x - right.x, left.y - right.y)
    }

    /// Writes `left - right` into `result`.
    pub fn subtract_into(left: Self, right: Self, result: &mut Self) -> &mut Self {
        store(result, Self::subtract(left, right))
    }

    /// `(left.x * right.x, left.y * right.y)`
    pub fn multiply_components(left: Self, right: Self) -> Self {
        Self::new(left.x * right.x, left.y * right.y)
    }

    /// Writes the component-wise product into `result`.
    pub fn multiply_components_into(left: Self, right: Self, result: &mut Self) -> &mut Self {
        store(result, Self::multiply_components(left, right))
    }

    /// `(left.x / right.x, left.y / right.y)`
    pub fn divide_components(left: Self, right: Self) -> Self {
        Self::new(left.x / right.x, left.y / right.y)
    }

    /// Writes the component-wise quotient into `result`.
    pub fn divide_components_into(left: Self, right: Self, result: &mut Self) -> &mut Self {
        store(result, Self::divide_components(left, right))
    }

    /// Scales both components by `scalar`.
    pub fn multiply_by_scalar(cartesian: Self, scalar: f64) -> Self {
        Self::new(cartesian.x * scalar, cartesian.y * scalar)
    }

    /// Writes `cartesian * scalar` into `result`.
    pub fn multiply_by_scalar_into(cartesian: Self, scalar: f64, result: &mut Self) -> &mut Self {
        store(result, Self::multiply_by_scalar(cartesian, scalar))
    }

    /// Divides both components by `scalar`.
    pub fn divide_by_scalar(cartesian: Self, scalar: f64) -> Self {
        Self::new(cartesian.x / scalar, cartesian.y / scalar)
    }

    /// Writes `cartesian / scalar` into `result`.
    pub fn divide_by_scalar_into(cartesian: Self, scalar: f64, result: &mut Self) -> &mut Self {
        store(result, Self::divide_by_scalar(cartesian, scalar))
    }

    /// `(-x, -y)`
    pub fn negate(cartesian: Self) -> Self {
        Self::new(-cartesian.x, -cartesian.y)
    }

    /// Writes `-cartesian` into `result`.
    pub fn negate_into(cartesian: Self, result: &mut Self) -> &mut Self {
        store(result, Self::negate(cartesian))
    }

    /// `(|x|, |y|)`
    pub fn abs(cartesian: Self) -> Self {
        Self::new(cartesian.x.abs(), cartesian.y.abs())
    }

    /// Writes the component-wise absolute value into `result`.
    pub fn abs_into(cartesian: Self, result: &mut Self) -> &mut Self {
        store(result, Self::abs(cartesian))
    }

    /// Dot product.
    pub fn dot(left: Self, right: Self) -> f64 {
        left.x * right.x + left.y * right.y
    }

    /// Z component of the 3D cross product of the two vectors lifted to the
    /// XY plane. Positive when `right` is counter-clockwise from `left`.
    pub fn cross(left: Self, right: Self) -> f64 {
        left.x * right.y - left.y * right.x
    }
}
