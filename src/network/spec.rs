use serde::{Serialize, Deserialize};

use crate::activation::ActivationFunction;
use crate::network::network::Network;

/// Describes one layer in a network specification.
///
/// Fields:
/// - `size`       — number of neurons in this layer
/// - `input_size` — number of values feeding into this layer (i.e. the
///                  neuron count of the previous layer, or the raw input
///                  dimension for the first layer)
/// - `activation` — activation function every neuron in the layer uses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub input_size: usize,
    pub activation: ActivationFunction,
}

/// A serializable description of a network architecture.
///
/// `NetworkSpec` stores the architecture only, never trained weights, so a
/// configuration can be saved before training starts and rebuilt fresh any
/// number of times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the spec file stem.
    pub name: String,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    /// Builds a freshly initialized `Network` from this spec, weights from
    /// the thread-local generator.
    pub fn build(&self) -> Network {
        Network::new(self.triples())
    }

    /// Builds a seeded `Network` from this spec; same seed, same initial
    /// weights.
    pub fn build_seeded(&self, seed: u64) -> Network {
        Network::from_seed(self.triples(), seed)
    }

    fn triples(&self) -> Vec<(usize, usize, ActivationFunction)> {
        self.layers.iter()
            .map(|layer| (layer.size, layer.input_size, layer.activation))
            .collect()
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
