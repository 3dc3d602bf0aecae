#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[inline]
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Population variance over every entry of a row-major matrix.
pub fn matrix_variance(rows: &[Vec<f64>]) -> f64 {
    let mut n = 0.0;
    let mut mean = 0.0;
    let mut m2 = 0.0;
    for &x in rows.iter().flatten() {
        n += 1.0;
        let delta = x - mean;
        mean += delta / n;
        m2 += delta * (x - mean);
    }
    if n > 0.0 { m2 / n } else { 0.0 }
}

/// Indices that sort `values` in descending order; ties keep index order.
pub fn argsort_desc(values: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_distance() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(squared_distance(&[1.0, 1.0], &[4.0, 5.0]), 25.0);
    }

    #[test]
    fn variance_of_all_entries() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert!((matrix_variance(&rows) - 1.25).abs() < 1e-12);
        assert_eq!(matrix_variance(&[]), 0.0);
    }

    #[test]
    fn argsort_desc_is_stable() {
        assert_eq!(argsort_desc(&[0.1, 0.5, 0.1, 0.3]), vec![1, 3, 0, 2]);
    }
}
