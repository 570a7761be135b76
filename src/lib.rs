pub mod math;
pub mod activation;
pub mod error;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use error::{NetworkError, Result};
pub use layers::dense::Layer;
pub use layers::neuron::Neuron;
pub use network::network::Network;
pub use network::spec::{NetworkSpec, LayerSpec};
pub use loss::squared_error::SquaredError;
pub use optim::sgd::Sgd;
pub use train::epoch_stats::EpochStats;
pub use train::train_config::TrainConfig;
