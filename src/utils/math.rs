/// Base-2 logarithm with `log2(0) = 0`, so zero-probability cells drop out
/// of information sums.
#[inline]
pub fn log2_or_zero(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x.log2() }
}

/// Index of the largest finite entry; the first one wins on exact ties.
#[inline]
pub fn argmax(v: &[f64]) -> Option<usize> {
    let mut best = None;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &x) in v.iter().enumerate() {
        if !x.is_finite() {
            continue;
        }
        if best.is_none() || x > best_value {
            best = Some(i);
            best_value = x;
        }
    }
    best
}
