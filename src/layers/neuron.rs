use rand::Rng;

use crate::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::math::vector;

/// The smallest computational unit: a fixed-width weight vector, a bias and
/// an activation function.
///
/// `forward` and `backward` overwrite the per-call caches (last inputs, last
/// output, last gradient), so a `Neuron` assumes a single caller and a strict
/// forward-then-backward call order per sample. It is not safe for concurrent
/// or interleaved use.
#[derive(Debug, Clone)]
pub struct Neuron {
    pub weights: Vec<f64>,
    pub bias: f64,
    pub activation: ActivationFunction,
    inputs: Vec<f64>,
    output: f64,
    gradient: Vec<f64>,
}

impl Neuron {
    /// Builds a neuron with `num_inputs` weights and a bias, all sampled
    /// uniform on [-1, 1) from the thread-local generator.
    pub fn new(num_inputs: usize, activation: ActivationFunction) -> Neuron {
        Neuron::with_rng(num_inputs, activation, &mut rand::thread_rng())
    }

    /// Like `new`, but draws from the given generator. Draw order is fixed:
    /// the `num_inputs` weights first, then the bias.
    pub fn with_rng<R: Rng>(num_inputs: usize, activation: ActivationFunction, rng: &mut R) -> Neuron {
        let weights = vector::random_uniform(rng, num_inputs);
        let bias = rng.gen::<f64>() * 2.0 - 1.0;

        Neuron {
            weights,
            bias,
            activation,
            inputs: vec![0.0; num_inputs],
            output: 0.0,
            gradient: vec![0.0; num_inputs],
        }
    }

    /// Number of inputs this neuron was built for.
    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    /// Output cached by the last `forward` call.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// `net = dot(inputs, weights) + bias`, `output = activation(net)`.
    /// Caches the inputs and the output for the backward pass.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<f64> {
        if inputs.len() != self.weights.len() {
            return Err(NetworkError::DimensionMismatch {
                what: "neuron input",
                expected: self.weights.len(),
                got: inputs.len(),
            });
        }

        let net = vector::dot(inputs, &self.weights) + self.bias;
        self.inputs.copy_from_slice(inputs);
        self.output = self.activation.function(net);
        Ok(self.output)
    }

    /// Computes `delta = error * derivative(cached output)`, caches the
    /// gradient `g[i] = input[i] * delta` and returns the per-input error
    /// contributions `weights[i] * delta` for the preceding layer.
    pub fn backward(&mut self, error: f64) -> Vec<f64> {
        let delta = error * self.activation.derivative(self.output);
        for (g, input) in self.gradient.iter_mut().zip(self.inputs.iter()) {
            *g = input * delta;
        }
        self.weights.iter().map(|w| w * delta).collect()
    }

    /// Applies the cached gradient: `weights[i] -= lr * g[i]`. The bias steps
    /// by the mean of the weight gradients, not by `delta`.
    pub fn update_weights(&mut self, learning_rate: f64) {
        for (w, g) in self.weights.iter_mut().zip(self.gradient.iter()) {
            *w -= learning_rate * g;
        }
        self.bias -= learning_rate * vector::mean(&self.gradient);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_neuron(weights: Vec<f64>, bias: f64, activation: ActivationFunction) -> Neuron {
        let mut neuron = Neuron::new(weights.len(), activation);
        neuron.weights = weights;
        neuron.bias = bias;
        neuron
    }

    #[test]
    fn forward_rejects_wrong_input_width() {
        let mut neuron = Neuron::new(3, ActivationFunction::Sigmoid);
        let err = neuron.forward(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::DimensionMismatch { what: "neuron input", expected: 3, got: 2 }
        );
    }

    #[test]
    fn forward_computes_activation_of_net() {
        // net = 1*0.5 + 1*(-0.5) + 0 = 0, sigmoid(0) = 0.5
        let mut neuron = fixed_neuron(vec![0.5, -0.5], 0.0, ActivationFunction::Sigmoid);
        let output = neuron.forward(&[1.0, 1.0]).unwrap();
        assert!((output - 0.5).abs() < 1e-12);
    }

    #[test]
    fn backward_returns_weighted_delta() {
        // Signum derivative is the constant 1, so delta == error.
        let mut neuron = fixed_neuron(vec![0.5, -0.25], 0.1, ActivationFunction::Signum);
        neuron.forward(&[2.0, 3.0]).unwrap();
        let upstream = neuron.backward(0.2);
        assert!((upstream[0] - 0.1).abs() < 1e-12);
        assert!((upstream[1] + 0.05).abs() < 1e-12);
    }

    #[test]
    fn update_applies_elementwise_gradient_and_mean_bias_step() {
        let mut neuron = fixed_neuron(vec![0.5, -0.25], 0.1, ActivationFunction::Signum);
        neuron.forward(&[2.0, 3.0]).unwrap();
        neuron.backward(0.2);
        // g = [2*0.2, 3*0.2] = [0.4, 0.6], mean(g) = 0.5
        neuron.update_weights(0.1);
        assert!((neuron.weights[0] - 0.46).abs() < 1e-12);
        assert!((neuron.weights[1] + 0.31).abs() < 1e-12);
        assert!((neuron.bias - 0.05).abs() < 1e-12);
    }

    #[test]
    fn bias_step_is_lr_times_mean_gradient() {
        let mut neuron = fixed_neuron(vec![0.3, 0.7], -0.2, ActivationFunction::Sigmoid);
        let output = neuron.forward(&[1.0, 0.5]).unwrap();
        let error = 0.4;
        let delta = error * output * (1.0 - output);
        let g = [1.0 * delta, 0.5 * delta];
        let mean_g = (g[0] + g[1]) / 2.0;

        let bias_before = neuron.bias;
        neuron.backward(error);
        neuron.update_weights(0.1);
        assert!((neuron.bias - (bias_before - 0.1 * mean_g)).abs() < 1e-12);
    }
}
