// `f64::exp` is not const
pub fn logistic(x: f64, midpoint_offset: f64, multiplier: f64, max_value: Option<f64>) -> f64 {
    max_value.unwrap_or(1.0) / (1.0 + f64::exp(multiplier * (midpoint_offset - x)))
}

// `f64::exp` is not const
pub fn logistic_exp(exp: f64, max_value: Option<f64>) -> f64 {
    max_value.unwrap_or(1.0) / (1.0 + f64::exp(exp))
}

/// Whether `a` and `b` differ by at most `threshold` relative to `b`.
///
/// A zero or non-finite `b` is never considered close.
pub fn is_ratio_within(a: f64, b: f64, threshold: f64) -> bool {
    if f64::abs(b) < f64::EPSILON || !b.is_finite() {
        return false;
    }

    f64::abs(1.0 - a / b) <= threshold
}
