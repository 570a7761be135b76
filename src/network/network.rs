use std::time::Instant;

use rand::Rng;
use serde::Serialize;

use crate::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::layers::dense::Layer;
use crate::loss::squared_error::SquaredError;
use crate::math::rng::SplitMix64;
use crate::optim::sgd::Sgd;
use crate::train::train_config::TrainConfig;
use crate::train::epoch_stats::EpochStats;

/// An ordered sequence of layers plus the per-epoch error history of the
/// last `fit` run.
///
/// Adjacent layers must agree on width: `layers[i].size()` feeds
/// `layers[i + 1].input_size()`. That invariant is not checked at
/// construction; a mismatch anywhere in the chain surfaces as a
/// `DimensionMismatch` at the first forward pass.
pub struct Network {
    pub layers: Vec<Layer>,
    error_history: Vec<f64>,
}

/// Weights, bias and activation of one neuron, as reported by
/// `Network::describe`.
#[derive(Debug, Clone, Serialize)]
pub struct NeuronSummary {
    pub weights: Vec<f64>,
    pub bias: f64,
    pub activation: ActivationFunction,
}

/// Per-layer slice of `Network::describe`, one entry per neuron in layer
/// order.
#[derive(Debug, Clone, Serialize)]
pub struct LayerSummary {
    pub size: usize,
    pub neurons: Vec<NeuronSummary>,
}

impl Network {
    /// Builds a network from (size, input_size, activation) tuples, with
    /// weights from the thread-local generator.
    pub fn new(layer_specs: Vec<(usize, usize, ActivationFunction)>) -> Network {
        Network::with_rng(layer_specs, &mut rand::thread_rng())
    }

    /// Seeded construction: the same seed and layer specs always yield the
    /// same initial weights, which makes whole training runs reproducible.
    pub fn from_seed(layer_specs: Vec<(usize, usize, ActivationFunction)>, seed: u64) -> Network {
        Network::with_rng(layer_specs, &mut SplitMix64::new(seed))
    }

    /// Builds a network drawing every weight from the given generator,
    /// layers in spec order.
    pub fn with_rng<R: Rng>(
        layer_specs: Vec<(usize, usize, ActivationFunction)>,
        rng: &mut R,
    ) -> Network {
        let layers = layer_specs.into_iter()
            .map(|(size, input_size, activation)| Layer::with_rng(size, input_size, activation, rng))
            .collect();
        Network { layers, error_history: Vec::new() }
    }

    /// Forward pass; each layer's output becomes the next layer's input.
    /// Stores activations in each layer for the backward pass.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    /// Backward pass over the sample last run through `forward`.
    ///
    /// Starts from the output-layer error signal `output - target` and walks
    /// the layers last to first. Each layer produces its upstream error and
    /// is updated immediately afterwards, before the preceding layer runs;
    /// one sample's pass is internally consistent because the layer's own
    /// backward step reads its caches before the optimizer mutates it.
    pub fn backward(&mut self, target: &[f64], optimizer: &Sgd) -> Result<()> {
        let Some(last) = self.layers.last() else {
            return Ok(());
        };
        if target.len() != last.size() {
            return Err(NetworkError::DimensionMismatch {
                what: "target",
                expected: last.size(),
                got: target.len(),
            });
        }

        let mut errors = SquaredError::derivative(last.outputs(), target);
        for layer in self.layers.iter_mut().rev() {
            let upstream = layer.backward(&errors)?;
            optimizer.step(layer);
            errors = upstream;
        }
        Ok(())
    }

    /// Half squared error of the last forward pass against `targets`, read
    /// from the output layer's cached outputs.
    pub fn calculate_error(&self, targets: &[f64]) -> Result<f64> {
        let Some(last) = self.layers.last() else {
            return Ok(0.0);
        };
        if targets.len() != last.size() {
            return Err(NetworkError::DimensionMismatch {
                what: "target",
                expected: last.size(),
                got: targets.len(),
            });
        }
        Ok(SquaredError::loss(last.outputs(), targets))
    }

    /// Online training: for every epoch, every sample in input order runs
    /// forward, backward-with-update, then has its error added to the epoch
    /// total. Epoch totals accumulate in `error_history`.
    ///
    /// Samples are never shuffled, so a seeded network trains identically on
    /// every run. An error on any sample aborts the remaining epochs and
    /// leaves the weights as the failing sample left them.
    pub fn fit(
        &mut self,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
        optimizer: &Sgd,
        config: &TrainConfig,
    ) -> Result<()> {
        if inputs.len() != targets.len() {
            return Err(NetworkError::DimensionMismatch {
                what: "training targets",
                expected: inputs.len(),
                got: targets.len(),
            });
        }

        for epoch in 1..=config.epochs {
            let t_start = Instant::now();

            let mut total_error = 0.0;
            for (input, target) in inputs.iter().zip(targets.iter()) {
                self.forward(input)?;
                self.backward(target, optimizer)?;
                total_error += self.calculate_error(target)?;
            }
            self.error_history.push(total_error);

            if config.log_every > 0 && epoch % config.log_every == 0 {
                log::debug!(
                    "epoch {epoch}/{}: total error {total_error:.6}",
                    config.epochs
                );
            }
            if let Some(ref tx) = config.progress_tx {
                // A dropped receiver never stops training.
                let _ = tx.send(EpochStats {
                    epoch,
                    total_epochs: config.epochs,
                    total_error,
                    elapsed_ms: t_start.elapsed().as_millis() as u64,
                });
            }
        }
        Ok(())
    }

    /// `forward` then elementwise rounding. Meaningful only for activations
    /// whose output range straddles 0.5 (sigmoid); that is the caller's
    /// responsibility.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        Ok(self.forward(input)?.into_iter().map(f64::round).collect())
    }

    /// Per-epoch error totals of every `fit` call so far, oldest first.
    pub fn error_history(&self) -> &[f64] {
        &self.error_history
    }

    /// Error total of the most recent epoch, if any training has run.
    pub fn final_error(&self) -> Option<f64> {
        self.error_history.last().copied()
    }

    /// Introspection for debug printing: every neuron's weights, bias and
    /// activation, in layer order.
    pub fn describe(&self) -> Vec<LayerSummary> {
        self.layers.iter()
            .map(|layer| LayerSummary {
                size: layer.size(),
                neurons: layer.neurons.iter()
                    .map(|neuron| NeuronSummary {
                        weights: neuron.weights.clone(),
                        bias: neuron.bias,
                        activation: neuron.activation,
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_layer_sigmoid() -> Network {
        Network::from_seed(
            vec![
                (2, 2, ActivationFunction::Sigmoid),
                (1, 2, ActivationFunction::Sigmoid),
            ],
            7,
        )
    }

    #[test]
    fn forward_output_length_matches_last_layer() {
        let mut network = Network::from_seed(
            vec![
                (4, 3, ActivationFunction::Sigmoid),
                (2, 4, ActivationFunction::Tanh),
            ],
            1,
        );
        let output = network.forward(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(output.len(), 2);
    }

    #[test]
    fn forward_rejects_wrong_input_width() {
        let mut network = two_layer_sigmoid();
        let err = network.forward(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::DimensionMismatch { what: "neuron input", expected: 2, got: 3 }
        );
    }

    #[test]
    fn mismatched_adjacent_layers_fail_at_first_forward() {
        // Second layer expects 3 inputs but the first layer produces 2.
        let mut network = Network::from_seed(
            vec![
                (2, 2, ActivationFunction::Sigmoid),
                (1, 3, ActivationFunction::Sigmoid),
            ],
            1,
        );
        assert!(network.forward(&[0.0, 1.0]).is_err());
    }

    #[test]
    fn predict_is_rounded_forward() {
        let mut network = two_layer_sigmoid();
        let forward = network.forward(&[1.0, 0.0]).unwrap();
        let predicted = network.predict(&[1.0, 0.0]).unwrap();
        let rounded: Vec<f64> = forward.into_iter().map(f64::round).collect();
        assert_eq!(predicted, rounded);
    }

    #[test]
    fn calculate_error_is_nonnegative_and_zero_on_match() {
        let mut network = two_layer_sigmoid();
        let output = network.forward(&[0.0, 1.0]).unwrap();
        assert_eq!(network.calculate_error(&output).unwrap(), 0.0);
        assert!(network.calculate_error(&[1.0]).unwrap() >= 0.0);
    }

    #[test]
    fn backward_rejects_wrong_target_width() {
        let mut network = two_layer_sigmoid();
        network.forward(&[0.0, 1.0]).unwrap();
        let err = network.backward(&[1.0, 0.0], &Sgd::new(0.1)).unwrap_err();
        assert_eq!(
            err,
            NetworkError::DimensionMismatch { what: "target", expected: 1, got: 2 }
        );
    }

    #[test]
    fn seeded_fit_is_deterministic() {
        let inputs = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
        let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
        let optimizer = Sgd::new(0.1);
        let config = TrainConfig::new(50);

        let mut a = two_layer_sigmoid();
        let mut b = two_layer_sigmoid();
        a.fit(&inputs, &targets, &optimizer, &config).unwrap();
        b.fit(&inputs, &targets, &optimizer, &config).unwrap();

        assert_eq!(a.error_history(), b.error_history());
        for (la, lb) in a.describe().iter().zip(b.describe().iter()) {
            for (na, nb) in la.neurons.iter().zip(lb.neurons.iter()) {
                assert_eq!(na.weights, nb.weights);
                assert_eq!(na.bias, nb.bias);
            }
        }
    }

    #[test]
    fn fit_rejects_mismatched_sample_counts() {
        let mut network = two_layer_sigmoid();
        let err = network
            .fit(
                &[vec![0.0, 0.0], vec![0.0, 1.0]],
                &[vec![0.0]],
                &Sgd::new(0.1),
                &TrainConfig::new(1),
            )
            .unwrap_err();
        assert_eq!(
            err,
            NetworkError::DimensionMismatch { what: "training targets", expected: 2, got: 1 }
        );
    }

    #[test]
    fn fit_records_one_history_entry_per_epoch() {
        let mut network = two_layer_sigmoid();
        network
            .fit(
                &[vec![0.0, 0.0]],
                &[vec![0.0]],
                &Sgd::new(0.1),
                &TrainConfig::new(5),
            )
            .unwrap();
        assert_eq!(network.error_history().len(), 5);
        assert_eq!(network.final_error(), network.error_history().last().copied());
    }

    #[test]
    fn fit_reports_progress_per_epoch() {
        use std::sync::mpsc;

        let (tx, rx) = mpsc::channel();
        let mut network = two_layer_sigmoid();
        let config = TrainConfig {
            epochs: 3,
            log_every: 0,
            progress_tx: Some(tx),
        };
        network
            .fit(&[vec![1.0, 1.0]], &[vec![0.0]], &Sgd::new(0.1), &config)
            .unwrap();
        drop(config);

        let stats: Vec<_> = rx.iter().collect();
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].epoch, 1);
        assert_eq!(stats[2].epoch, 3);
        assert!(stats.iter().all(|s| s.total_epochs == 3));
    }

    #[test]
    fn describe_reports_every_neuron() {
        let network = two_layer_sigmoid();
        let summary = network.describe();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].size, 2);
        assert_eq!(summary[1].size, 1);
        assert_eq!(summary[0].neurons[0].weights.len(), 2);
        assert_eq!(summary[0].neurons[0].activation, ActivationFunction::Sigmoid);
    }
}
