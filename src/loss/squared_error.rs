/// Half squared error, the loss the backward pass is derived from.
pub struct SquaredError;

impl SquaredError {
    /// `0.5 * sum((expected - predicted)^2)`
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| (e - p).powi(2))
            .sum::<f64>() * 0.5
    }

    /// Per-output gradient: `predicted - expected`. The 0.5 factor cancels
    /// the exponent, so this is exact, not approximate.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| p - e)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_zero_iff_exact_match() {
        assert_eq!(SquaredError::loss(&[0.5, 0.25], &[0.5, 0.25]), 0.0);
        assert!(SquaredError::loss(&[0.5, 0.25], &[0.5, 0.5]) > 0.0);
    }

    #[test]
    fn loss_of_known_values() {
        // 0.5 * ((1-0)^2 + (0-1)^2) = 1.0
        assert!((SquaredError::loss(&[0.0, 1.0], &[1.0, 0.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn derivative_is_signed_residual() {
        let grad = SquaredError::derivative(&[0.8, 0.2], &[1.0, 0.0]);
        assert!((grad[0] + 0.2).abs() < 1e-12);
        assert!((grad[1] - 0.2).abs() < 1e-12);
    }
}
