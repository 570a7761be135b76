use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::error::NetworkError;

/// The closed set of activation functions a neuron can be built with.
///
/// Bound at construction and immutable thereafter. The serde representation
/// and `FromStr` both use the lowercase tags `sigmoid | tanh | relu | signum`,
/// so JSON architecture specs and string configuration share one spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
    Tanh,
    Relu,
    Signum,
}

impl ActivationFunction {
    /// Element-wise activation of the pre-activation net value.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Relu => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Signum => {
                if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Derivative evaluated on the **post-activation output**, never on the
    /// net value. The backward pass feeds each neuron's cached output here.
    ///
    /// `Relu` keeps the output-based form (`0` when output <= 0) even though
    /// it conflates the zero-input boundary case. `Signum` uses the constant
    /// `1`, a straight-through approximation; the true derivative is zero
    /// almost everywhere and would block all learning.
    pub fn derivative(&self, output: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => output * (1.0 - output),
            ActivationFunction::Tanh => 1.0 - output * output,
            ActivationFunction::Relu => if output <= 0.0 { 0.0 } else { 1.0 },
            ActivationFunction::Signum => 1.0,
        }
    }

    /// The lowercase tag, matching the `FromStr`/serde spelling.
    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::Relu => "relu",
            ActivationFunction::Signum => "signum",
        }
    }
}

impl FromStr for ActivationFunction {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sigmoid" => Ok(ActivationFunction::Sigmoid),
            "tanh" => Ok(ActivationFunction::Tanh),
            "relu" => Ok(ActivationFunction::Relu),
            "signum" => Ok(ActivationFunction::Signum),
            other => Err(NetworkError::Configuration { tag: other.to_string() }),
        }
    }
}
