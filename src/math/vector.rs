use rand::Rng;

/// Dot product of two equally long slices. Callers guarantee the lengths
/// match; dimension checks happen at the neuron boundary.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(v: &[f64]) -> f64 {
    if v.is_empty() {
        0.0
    } else {
        v.iter().sum::<f64>() / v.len() as f64
    }
}

/// `len` samples uniform on [-1, 1).
pub fn random_uniform<R: Rng>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect()
}
