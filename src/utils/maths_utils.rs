use argminmax::ArgMinMax;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// Min and max of a non-empty slice, or `None` for an empty one.
pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    Some((get_min(vec), get_max(vec)))
}

/// Widen `(min, max)` by `pct` of its span on each side.
/// A flat range is widened by `pct` of its magnitude instead so it never collapses to zero height.
pub fn pad_range(min: f64, max: f64, pct: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 {
        span * pct
    } else {
        (max.abs() * pct).max(pct)
    };
    (min - pad, max + pad)
}
