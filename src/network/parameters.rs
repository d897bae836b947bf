use rand::RngCore;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::layers::DenseLayer;
use crate::math::Matrix;
use crate::network::config::NetworkConfig;

/// All trainable state: input→hidden and hidden→output layers.
///
/// Read-only outside the crate; only `Network::backward` mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkParameters {
    pub(crate) hidden: DenseLayer,
    pub(crate) output: DenseLayer,
}

impl NetworkParameters {
    /// Builds parameters from explicit values, checking them against `config`.
    pub fn new(
        weight1: Matrix,
        bias1: Vec<f64>,
        weight2: Matrix,
        bias2: Vec<f64>,
        config: &NetworkConfig,
    ) -> Result<NetworkParameters> {
        let params = NetworkParameters {
            hidden: DenseLayer::from_parts(weight1, Matrix::row(bias1)),
            output: DenseLayer::from_parts(weight2, Matrix::row(bias2)),
        };
        params.check(config)?;
        Ok(params)
    }

    pub fn zeros(config: &NetworkConfig) -> NetworkParameters {
        NetworkParameters {
            hidden: DenseLayer::zeros(config.input_size, config.hidden_size),
            output: DenseLayer::zeros(config.hidden_size, config.output_size),
        }
    }

    pub fn random<R: RngCore + ?Sized>(config: &NetworkConfig, rng: &mut R) -> Result<NetworkParameters> {
        let hidden = DenseLayer::random(config.input_size, config.hidden_size, rng)?;
        let output = DenseLayer::random(config.hidden_size, config.output_size, rng)?;
        Ok(NetworkParameters { hidden, output })
    }

    /// input_size × hidden_size
    pub fn weight1(&self) -> &Matrix {
        self.hidden.weights()
    }

    /// hidden_size × output_size
    pub fn weight2(&self) -> &Matrix {
        self.output.weights()
    }

    pub fn bias1(&self) -> &[f64] {
        self.hidden.biases()
    }

    pub fn bias2(&self) -> &[f64] {
        self.output.biases()
    }

    /// Fails with `ShapeMismatch` on the first matrix or vector whose shape
    /// differs from what `config` prescribes.
    pub fn check(&self, config: &NetworkConfig) -> Result<()> {
        check_shape("weight1", matrix_shape(self.weight1()), (config.input_size, config.hidden_size))?;
        check_shape("bias1", (1, self.bias1().len()), (1, config.hidden_size))?;
        check_shape("weight2", matrix_shape(self.weight2()), (config.hidden_size, config.output_size))?;
        check_shape("bias2", (1, self.bias2().len()), (1, config.output_size))
    }

    pub fn matches(&self, config: &NetworkConfig) -> bool {
        self.check(config).is_ok()
    }
}

/// (rows, cols), with cols taken from the first ragged row if there is one.
fn matrix_shape(m: &Matrix) -> (usize, usize) {
    let cols = m.data.iter().map(Vec::len).find(|&len| len != m.cols).unwrap_or(m.cols);
    (m.rows, cols)
}

fn check_shape(what: &'static str, actual: (usize, usize), expected: (usize, usize)) -> Result<()> {
    if actual != expected {
        return Err(Error::ShapeMismatch { what, expected, actual });
    }
    Ok(())
}
