/// Pearson correlation between two per-episode variables.
///
/// Returns 0 for an empty series and whenever either variable has zero
/// variance, so that no NaN reaches insight text.
pub fn pearson_correlation<T>(
    series: &[T],
    x_accessor: impl Fn(&T) -> f64,
    y_accessor: impl Fn(&T) -> f64,
) -> f64 {
    let x: Vec<f64> = series.iter().map(|item| x_accessor(item)).collect();
    let y: Vec<f64> = series.iter().map(|item| y_accessor(item)).collect();
    compute_pearson_correlation(&x, &y)
}

/// Pearson correlation over two equally sized slices.
///
/// Mismatched lengths, non-finite values and constant inputs yield 0.
pub fn compute_pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return 0.0;
    }
    if is_constant(x) || is_constant(y) {
        return 0.0;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        0.0
    } else {
        (numerator / denominator).clamp(-1.0, 1.0)
    }
}

fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|v| *v == values[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_empty() {
        assert_eq!(compute_pearson_correlation(&[], &[]), 0.0);
    }

    #[test]
    fn test_pearson_perfect_positive() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        assert!((compute_pearson_correlation(&x, &y) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![10.0, 8.0, 6.0, 4.0, 2.0];
        assert!((compute_pearson_correlation(&x, &y) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_constant_series() {
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![0.1, 0.1, 0.1];
        assert_eq!(compute_pearson_correlation(&x, &y), 0.0);
        assert_eq!(compute_pearson_correlation(&y, &x), 0.0);
    }

    #[test]
    fn test_pearson_length_mismatch() {
        assert_eq!(compute_pearson_correlation(&[1.0, 2.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_pearson_with_accessors() {
        let points = vec![(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)];
        let r = pearson_correlation(&points, |p| p.0, |p| p.1);
        assert!((r - 1.0).abs() < 1e-9);
    }
}
