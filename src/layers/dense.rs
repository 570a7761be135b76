use rand::Rng;

use crate::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::layers::neuron::Neuron;

/// An ordered collection of neurons sharing one input vector.
///
/// Neuron index is significant: `backward` aligns `errors[i]` with
/// `neurons[i]`. The parallel caches (outputs, errors, deltas) are likewise
/// one entry per neuron, same order.
#[derive(Debug, Clone)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
    input_size: usize,
    outputs: Vec<f64>,
    errors: Vec<f64>,
    deltas: Vec<Vec<f64>>,
}

impl Layer {
    pub fn new(size: usize, input_size: usize, activation: ActivationFunction) -> Layer {
        Layer::with_rng(size, input_size, activation, &mut rand::thread_rng())
    }

    /// Like `new`, but draws every neuron's weights from the given generator,
    /// in neuron order.
    pub fn with_rng<R: Rng>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        let neurons = (0..size)
            .map(|_| Neuron::with_rng(input_size, activation, rng))
            .collect();

        Layer {
            neurons,
            input_size,
            outputs: vec![0.0; size],
            errors: vec![0.0; size],
            deltas: vec![vec![0.0; input_size]; size],
        }
    }

    /// Number of neurons in this layer.
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Input width every neuron in this layer expects.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Outputs cached by the last `forward` call, one per neuron.
    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    /// Fans the same input vector to every neuron; returns the ordered
    /// per-neuron outputs.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        for (output, neuron) in self.outputs.iter_mut().zip(self.neurons.iter_mut()) {
            *output = neuron.forward(inputs)?;
        }
        Ok(self.outputs.clone())
    }

    /// Runs each neuron's backward step with its own error entry and returns
    /// the elementwise sum of the per-neuron upstream vectors: the error
    /// flowing into input dimension `j` is `sum_i weights[i][j] * delta[i]`.
    pub fn backward(&mut self, errors: &[f64]) -> Result<Vec<f64>> {
        if errors.len() != self.neurons.len() {
            return Err(NetworkError::DimensionMismatch {
                what: "layer error",
                expected: self.neurons.len(),
                got: errors.len(),
            });
        }

        self.errors.copy_from_slice(errors);
        let mut upstream = vec![0.0; self.input_size];
        for (i, (neuron, &error)) in self.neurons.iter_mut().zip(errors.iter()).enumerate() {
            let contribution = neuron.backward(error);
            for (u, c) in upstream.iter_mut().zip(contribution.iter()) {
                *u += c;
            }
            self.deltas[i] = contribution;
        }
        Ok(upstream)
    }

    /// Every neuron applies its own cached gradient; no layer-level
    /// aggregation happens here.
    pub fn update_weights(&mut self, learning_rate: f64) {
        for neuron in &mut self.neurons {
            neuron.update_weights(learning_rate);
        }
    }
}
