pub mod network;
pub mod spec;

pub use network::{Network, LayerSummary, NeuronSummary};
pub use spec::{NetworkSpec, LayerSpec};
