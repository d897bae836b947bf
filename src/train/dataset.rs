use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::network::NetworkConfig;

/// One (input, target) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Sample {
        Sample { input, target }
    }
}

/// A fixed, ordered training set whose samples all fit one `NetworkConfig`.
///
/// Lengths are checked once here so the training loop never has to.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>, config: &NetworkConfig) -> Result<Dataset> {
        for (index, sample) in samples.iter().enumerate() {
            if sample.input.len() != config.input_size || sample.target.len() != config.output_size {
                return Err(Error::SampleShape {
                    index,
                    expected_input: config.input_size,
                    expected_target: config.output_size,
                    input: sample.input.len(),
                    target: sample.target.len(),
                });
            }
        }
        Ok(Dataset { samples })
    }

    /// Pairs `inputs[i]` with `targets[i]`. Both lists must have the same length.
    pub fn from_pairs(inputs: &[Vec<f64>], targets: &[Vec<f64>], config: &NetworkConfig) -> Result<Dataset> {
        if inputs.len() != targets.len() {
            return Err(Error::PairCount { inputs: inputs.len(), targets: targets.len() });
        }
        let samples = inputs.iter().zip(targets)
            .map(|(input, target)| Sample::new(input.clone(), target.clone()))
            .collect();
        Dataset::new(samples, config)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
