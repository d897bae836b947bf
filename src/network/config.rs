use serde::{Serialize, Deserialize};

/// Immutable topology and learning rate of a network.
///
/// Fields:
/// - `input_size`: length of every input vector
/// - `hidden_size`: number of units in the single hidden layer
/// - `output_size`: length of every output/target vector
/// - `learning_rate`: step size applied on every backward pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub learning_rate: f64,
}

impl NetworkConfig {
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize, learning_rate: f64) -> Self {
        NetworkConfig {
            input_size,
            hidden_size,
            output_size,
            learning_rate,
        }
    }
}
