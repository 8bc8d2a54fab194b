//! Logistic sigmoid and its inverse.
//!
//! Used to move a parameter confined to `(0, 1)` by unbounded additive
//! steps: map it onto the real line with [`logit`], add, map back with
//! [`logistic`].

/// `1 / (1 + e^-y)`, mapping all reals onto `(0, 1)`.
#[inline]
#[must_use]
pub fn logistic(y: f64) -> f64 {
    1.0 / (1.0 + (-y).exp())
}

/// `ln(x / (1 - x))`, the inverse of [`logistic`].
///
/// Infinite at `x = 0` and `x = 1`, NaN outside `[0, 1]`.
#[inline]
#[must_use]
pub fn logit(x: f64) -> f64 {
    (x / (1.0 - x)).ln()
}
