/// Computes the `q`-quantile of already sorted values with linear interpolation between the
/// closest ranks.
///
/// Returns `None` for an empty slice.
pub fn quantile(sorted_values: &[f64], q: f64) -> Option<f64> {
    if sorted_values.is_empty() {
        return None;
    }

    let position = q.clamp(0.0, 1.0) * (sorted_values.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    Some(sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * fraction)
}
