/// Returns the Euclidean distance between `a` and `b` over their first `dim`
/// components.
///
/// Both inputs must have at least `dim` components; shorter inputs panic on
/// the slice index (an unchecked caller precondition, not a handled error).
/// Symmetric, deterministic, O(dim).
pub fn euclidean(a: &[f64], b: &[f64], dim: usize) -> f64 {
    a[..dim]
        .iter()
        .zip(&b[..dim])
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
