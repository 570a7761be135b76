use crate::layers::dense::Layer;

/// Plain online stochastic gradient descent. Carries the learning rate so it
/// is never ambient state; callers pass the optimizer into every backward
/// pass explicitly.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to a layer from the gradients its neurons cached
    /// during the backward step.
    pub fn step(&self, layer: &mut Layer) {
        layer.update_weights(self.learning_rate);
    }
}
