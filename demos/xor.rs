use axon_nn::{ActivationFunction, Network, Sgd, TrainConfig};

fn print_configuration(network: &Network) {
    println!("Network configuration ({} layers):", network.describe().len());
    for (i, layer) in network.describe().iter().enumerate() {
        println!("  Layer {} ({} neurons):", i + 1, layer.size);
        for (j, neuron) in layer.neurons.iter().enumerate() {
            println!(
                "    Neuron {}: weights {:?}, bias {:.4}, activation {}",
                j + 1,
                neuron.weights,
                neuron.bias,
                neuron.activation.name()
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![
        vec![0.0],
        vec![1.0],
        vec![1.0],
        vec![0.0],
    ];

    let mut network = Network::from_seed(
        vec![
            (2, 2, ActivationFunction::Sigmoid),
            (1, 2, ActivationFunction::Sigmoid),
        ],
        258,
    );
    print_configuration(&network);

    let optimizer = Sgd::new(0.1);
    let config = TrainConfig {
        epochs: 10_000,
        log_every: 1000,
        progress_tx: None,
    };
    network.fit(&inputs, &targets, &optimizer, &config)?;

    print_configuration(&network);
    println!("Final error: {:?}", network.final_error());

    for (input, target) in inputs.iter().zip(targets.iter()) {
        let prediction = network.predict(input)?;
        println!("Input: {input:?}, True: {target:?}, Prediction: {prediction:?}");
    }
    Ok(())
}
