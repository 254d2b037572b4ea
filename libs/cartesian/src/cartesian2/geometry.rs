//! Geometric queries and interpolation on [`Cartesian2`].

use super::{store, Cartesian2};

/// Larger of `a` and `b`; NaN if either is NaN.
fn max_or_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Smaller of `a` and `b`; NaN if either is NaN.
fn min_or_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

impl Cartesian2 {
    /// The larger of the two components. NaN if either component is NaN.
    pub fn maximum_component(cartesian: Self) -> f64 {
        max_or_nan(cartesian.x, cartesian.y)
    }

    /// The smaller of the two components. NaN if either component is NaN.
    pub fn minimum_component(cartesian: Self) -> f64 {
        min_or_nan(cartesian.x, cartesian.y)
    }

    /// Component-wise maximum of two vectors. NaN components propagate.
    pub fn maximum_by_component(first: Self, second: Self) -> Self {
        Self::new(max_or_nan(first.x, second.x), max_or_nan(first.y, second.y))
    }

    /// Writes the component-wise maximum into `result`.
    pub fn maximum_by_component_into(first: Self, second: Self, result: &mut Self) -> &mut Self {
        store(result, Self::maximum_by_component(first, second))
    }

    /// Component-wise minimum of two vectors. NaN components propagate.
    pub fn minimum_by_component(first: Self, second: Self) -> Self {
        Self::new(min_or_nan(first.x, second.x), min_or_nan(first.y, second.y))
    }

    /// Writes the component-wise minimum into `result`.
    pub fn minimum_by_component_into(first: Self, second: Self, result: &mut Self) -> &mut Self {
        store(result, Self::minimum_by_component(first, second))
    }

    /// `x * x + y * y`
    pub fn magnitude_squared(cartesian: Self) -> f64 {
        cartesian.x * cartesian.x + cartesian.y * cartesian.y
    }

    /// Euclidean length.
    pub fn magnitude(cartesian: Self) -> f64 {
        Self::magnitude_squared(cartesian).sqrt()
    }

    /// Euclidean distance between two points.
    ///
    /// # Examples
    /// ```
    /// use cartesian::Cartesian2;
    ///
    /// let d = Cartesian2::distance(Cartesian2::new(1.0, 0.0), Cartesian2::new(2.0, 0.0));
    /// assert_eq!(d, 1.0);
    /// ```
    pub fn distance(left: Self, right: Self) -> f64 {
        Self::magnitude(Self::subtract(left, right))
    }

    /// Squared Euclidean distance between two points.
    pub fn distance_squared(left: Self, right: Self) -> f64 {
        Self::magnitude_squared(Self::subtract(left, right))
    }

    /// Scales `cartesian` to unit length.
    ///
    /// A zero vector divides by zero and yields NaN components.
    pub fn normalize(cartesian: Self) -> Self {
        Self::divide_by_scalar(cartesian, Self::magnitude(cartesian))
    }

    /// Writes the normalized vector into `result`.
    pub fn normalize_into(cartesian: Self, result: &mut Self) -> &mut Self {
        store(result, Self::normalize(cartesian))
    }

    /// Unsigned angle in radians between two vectors, in `[0, PI]`.
    ///
    /// Computed as `atan2(|cross|, dot)`, which is exact for axis-aligned
    /// inputs and does not require normalized operands.
    ///
    /// # Examples
    /// ```
    /// use cartesian::Cartesian2;
    /// use config::constants::PI_OVER_TWO;
    ///
    /// let angle = Cartesian2::angle_between(Cartesian2::UNIT_X, Cartesian2::UNIT_Y);
    /// assert_eq!(angle, PI_OVER_TWO);
    /// ```
    pub fn angle_between(left: Self, right: Self) -> f64 {
        Self::cross(left, right)
            .abs()
            .atan2(Self::dot(left, right))
    }

    /// The unit axis most nearly perpendicular to `cartesian`.
    ///
    /// That is the axis of the smaller absolute component. Ties, including
    /// the zero vector, give [`Cartesian2::UNIT_X`].
    pub fn most_orthogonal_axis(cartesian: Self) -> Self {
        let magnitudes = Self::abs(cartesian);
        if magnitudes.x <= magnitudes.y {
            Self::UNIT_X
        } else {
            Self::UNIT_Y
        }
    }

    /// Writes the most orthogonal axis into `result`.
    pub fn most_orthogonal_axis_into(cartesian: Self, result: &mut Self) -> &mut Self {
        store(result, Self::most_orthogonal_axis(cartesian))
    }

    /// Linear interpolation from `start` (`t = 0`) to `end` (`t = 1`).
    ///
    /// Values of `t` outside `[0, 1]` extrapolate along the same line.
    ///
    /// # Examples
    /// ```
    /// use cartesian::Cartesian2;
    ///
    /// let start = Cartesian2::new(4.0, 8.0);
    /// let end = Cartesian2::new(8.0, 20.0);
    /// assert_eq!(Cartesian2::lerp(start, end, 0.25), Cartesian2::new(5.0, 11.0));
    /// assert_eq!(Cartesian2::lerp(start, end, 2.0), Cartesian2::new(12.0, 32.0));
    /// ```
    pub fn lerp(start: Self, end: Self, t: f64) -> Self {
        // Weighted sum keeps both endpoints exact.
        Self::add(
            Self::multiply_by_scalar(end, t),
            Self::multiply_by_scalar(start, 1.0 - t),
        )
    }

    /// Writes the interpolated vector into `result`.
    pub fn lerp_into(start: Self, end: Self, t: f64, result: &mut Self) -> &mut Self {
        store(result, Self::lerp(start, end, t))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use config::constants::{EPSILON14, PI, PI_OVER_FOUR, PI_OVER_TWO};

    use super::*;

    #[test]
    fn test_maximum_component() {
        assert_eq!(Cartesian2::maximum_component(Cartesian2::new(2.0, 1.0)), 2.0);
        assert_eq!(Cartesian2::maximum_component(Cartesian2::new(1.0, 2.0)), 2.0);
    }

    #[test]
    fn test_minimum_component() {
        assert_eq!(Cartesian2::minimum_component(Cartesian2::new(1.0, 2.0)), 1.0);
        assert_eq!(Cartesian2::minimum_component(Cartesian2::new(2.0, 1.0)), 1.0);
    }

    #[test]
    fn test_by_component_selection() {
        let a = Cartesian2::new(1.0, 5.0);
        let b = Cartesian2::new(3.0, -2.0);
        assert_eq!(Cartesian2::maximum_by_component(a, b), Cartesian2::new(3.0, 5.0));
        assert_eq!(Cartesian2::minimum_by_component(a, b), Cartesian2::new(1.0, -2.0));

        let mut result = a;
        Cartesian2::maximum_by_component_into(result, b, &mut result);
        assert_eq!(result, Cartesian2::new(3.0, 5.0));
        Cartesian2::minimum_by_component_into(result, b, &mut result);
        assert_eq!(result, b);
    }

    #[test]
    fn test_component_selection_propagates_nan() {
        let v = Cartesian2::new(f64::NAN, 1.0);
        assert!(Cartesian2::maximum_component(v).is_nan());
        assert!(Cartesian2::minimum_component(v).is_nan());
        assert!(Cartesian2::minimum_component(Cartesian2::new(1.0, f64::NAN)).is_nan());

        let max = Cartesian2::maximum_by_component(v, Cartesian2::new(2.0, 0.0));
        assert!(max.x.is_nan());
        assert_eq!(max.y, 1.0);
        let min = Cartesian2::minimum_by_component(Cartesian2::new(2.0, 0.0), v);
        assert!(min.x.is_nan());
        assert_eq!(min.y, 0.0);
    }

    #[test]
    fn test_magnitude() {
        let cartesian = Cartesian2::new(2.0, 3.0);
        assert_eq!(Cartesian2::magnitude_squared(cartesian), 13.0);
        assert_eq!(Cartesian2::magnitude(cartesian), 13.0_f64.sqrt());
    }

    #[test]
    fn test_distance() {
        let a = Cartesian2::new(1.0, 0.0);
        let b = Cartesian2::new(2.0, 0.0);
        assert_eq!(Cartesian2::distance(a, b), 1.0);
        assert_eq!(Cartesian2::distance(b, a), 1.0);
        assert_eq!(Cartesian2::distance_squared(Cartesian2::ZERO, Cartesian2::new(3.0, 4.0)), 25.0);
    }

    #[test]
    fn test_normalize() {
        let cartesian = Cartesian2::new(2.0, 0.0);
        assert_eq!(Cartesian2::normalize(cartesian), Cartesian2::UNIT_X);

        let mut result = Cartesian2::default();
        let returned = Cartesian2::normalize_into(cartesian, &mut result);
        assert_eq!(*returned, Cartesian2::UNIT_X);
        assert_eq!(result, Cartesian2::UNIT_X);
    }

    #[test]
    fn test_normalize_zero_vector_is_nan() {
        let normalized = Cartesian2::normalize(Cartesian2::ZERO);
        assert!(normalized.x.is_nan());
        assert!(normalized.y.is_nan());
    }

    #[test]
    fn test_angle_between_right_angle_is_exact() {
        let (x, y) = (Cartesian2::UNIT_X, Cartesian2::UNIT_Y);
        assert_eq!(Cartesian2::angle_between(x, y), PI_OVER_TWO);
        assert_eq!(Cartesian2::angle_between(y, x), PI_OVER_TWO);
    }

    #[test]
    fn test_angle_between_acute() {
        let a = Cartesian2::new(0.0, 1.0);
        let b = Cartesian2::new(1.0, 1.0);
        assert_abs_diff_eq!(Cartesian2::angle_between(a, b), PI_OVER_FOUR, epsilon = EPSILON14);
        assert_abs_diff_eq!(Cartesian2::angle_between(b, a), PI_OVER_FOUR, epsilon = EPSILON14);
    }

    #[test]
    fn test_angle_between_obtuse() {
        let a = Cartesian2::new(0.0, 1.0);
        let b = Cartesian2::new(-1.0, -1.0);
        let expected = PI * 3.0 / 4.0;
        assert_abs_diff_eq!(Cartesian2::angle_between(a, b), expected, epsilon = EPSILON14);
        assert_abs_diff_eq!(Cartesian2::angle_between(b, a), expected, epsilon = EPSILON14);
    }

    #[test]
    fn test_angle_between_self_is_zero() {
        assert_eq!(Cartesian2::angle_between(Cartesian2::UNIT_X, Cartesian2::UNIT_X), 0.0);
        let v = Cartesian2::new(-3.5, 2.0);
        assert_eq!(Cartesian2::angle_between(v, v), 0.0);
    }

    #[test]
    fn test_angle_between_opposite_is_pi() {
        let angle = Cartesian2::angle_between(Cartesian2::UNIT_X, -Cartesian2::UNIT_X);
        assert_eq!(angle, PI);
    }

    #[test]
    fn test_most_orthogonal_axis() {
        assert_eq!(Cartesian2::most_orthogonal_axis(Cartesian2::new(0.0, 1.0)), Cartesian2::UNIT_X);
        assert_eq!(Cartesian2::most_orthogonal_axis(Cartesian2::new(1.0, 0.0)), Cartesian2::UNIT_Y);
        assert_eq!(Cartesian2::most_orthogonal_axis(Cartesian2::new(-5.0, 2.0)), Cartesian2::UNIT_Y);
    }

    #[test]
    fn test_most_orthogonal_axis_tie_prefers_x() {
        assert_eq!(Cartesian2::most_orthogonal_axis(Cartesian2::new(1.0, -1.0)), Cartesian2::UNIT_X);
        assert_eq!(Cartesian2::most_orthogonal_axis(Cartesian2::ZERO), Cartesian2::UNIT_X);

        let mut result = Cartesian2::default();
        Cartesian2::most_orthogonal_axis_into(Cartesian2::new(2.0, 2.0), &mut result);
        assert_eq!(result, Cartesian2::UNIT_X);
    }

    #[test]
    fn test_lerp() {
        let start = Cartesian2::new(4.0, 8.0);
        let end = Cartesian2::new(8.0, 20.0);
        assert_eq!(Cartesian2::lerp(start, end, 0.25), Cartesian2::new(5.0, 11.0));

        let mut result = Cartesian2::default();
        let returned = Cartesian2::lerp_into(start, end, 0.25, &mut result);
        assert_eq!(*returned, Cartesian2::new(5.0, 11.0));
    }

    #[test]
    fn test_lerp_endpoints() {
        let start = Cartesian2::new(0.1, -0.3);
        let end = Cartesian2::new(7.7, 1.9);
        assert_eq!(Cartesian2::lerp(start, end, 0.0), start);
        assert_eq!(Cartesian2::lerp(start, end, 1.0), end);
    }

    #[test]
    fn test_lerp_extrapolates() {
        let start = Cartesian2::new(4.0, 8.0);
        let end = Cartesian2::new(8.0, 20.0);
        assert_eq!(Cartesian2::lerp(start, end, 2.0), Cartesian2::new(12.0, 32.0));
        assert_eq!(Cartesian2::lerp(start, end, -1.0), Cartesian2::new(0.0, -4.0));
    }
}
