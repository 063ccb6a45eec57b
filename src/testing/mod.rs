pub mod dummies;

/// Absolute-difference comparison for probabilities.
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
