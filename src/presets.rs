//! Compiled-in topology, hyperparameters and training data of the demo.

use std::time::Duration;

use crate::network::NetworkConfig;
use crate::train::{Dataset, Sample, TrainConfig};

pub const INPUT_SIZE: usize = 3;
pub const HIDDEN_SIZE: usize = 4;
pub const OUTPUT_SIZE: usize = 2;
pub const LEARNING_RATE: f64 = 0.1;
pub const EPOCHS: usize = 1000;
pub const FRAME_DELAY: Duration = Duration::from_millis(100);
pub const EPOCH_DELAY: Duration = Duration::from_millis(200);

/// Output 0 is x0 XOR x1, output 1 is NOT x0; the third input is a constant 1.
const DEMO_SAMPLES: [([f64; INPUT_SIZE], [f64; OUTPUT_SIZE]); 4] = [
    ([0.0, 0.0, 1.0], [0.0, 1.0]),
    ([0.0, 1.0, 1.0], [1.0, 1.0]),
    ([1.0, 0.0, 1.0], [1.0, 0.0]),
    ([1.0, 1.0, 1.0], [0.0, 0.0]),
];

pub fn demo_network_config() -> NetworkConfig {
    NetworkConfig::new(INPUT_SIZE, HIDDEN_SIZE, OUTPUT_SIZE, LEARNING_RATE)
}

/// Paced for watching in a terminal.
pub fn demo_train_config() -> TrainConfig {
    TrainConfig::new(EPOCHS).with_delays(FRAME_DELAY, EPOCH_DELAY)
}

pub fn demo_samples() -> Vec<Sample> {
    DEMO_SAMPLES.iter()
        .map(|(input, target)| Sample::new(input.to_vec(), target.to_vec()))
        .collect()
}

pub fn demo_dataset() -> Dataset {
    Dataset::new(demo_samples(), &demo_network_config())
        .unwrap_or_else(|e| unreachable!("demo constants disagree: {e}"))
}
