use rand::RngCore;
use serde::Serialize;

use crate::{activation::Sigmoid, math::{entropy, Matrix}};

/// One fully connected sigmoid layer.
///
/// `weights` is (input_size × size): entry `[i][j]` connects source unit `i`
/// to this layer's unit `j`. `biases` is a 1 × size row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DenseLayer {
    weights: Matrix,
    biases: Matrix,
}

impl DenseLayer {
    pub(crate) fn from_parts(weights: Matrix, biases: Matrix) -> DenseLayer {
        DenseLayer { weights, biases }
    }

    pub fn zeros(input_size: usize, size: usize) -> DenseLayer {
        DenseLayer {
            weights: Matrix::zeros(input_size, size),
            biases: Matrix::zeros(1, size),
        }
    }

    /// Every weight and bias drawn from [-0.5, 0.5).
    pub fn random<R: RngCore + ?Sized>(
        input_size: usize,
        size: usize,
        rng: &mut R,
    ) -> Result<DenseLayer, rand::Error> {
        let weights = Matrix::try_from_fn(input_size, size, || entropy::centered(&mut *rng))?;
        let biases = Matrix::try_from_fn(1, size, || entropy::centered(&mut *rng))?;
        Ok(DenseLayer { weights, biases })
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &[f64] {
        &self.biases.data[0]
    }

    /// a = σ(x·W + b) for a 1 × input_size row `input`.
    pub fn feed_from(&self, input: &Matrix) -> Matrix {
        let z = input * &self.weights + self.biases.clone();
        z.map(Sigmoid::function)
    }

    /// δ = error ⊙ σ'(a), where `activations` are this layer's outputs.
    pub fn deltas(errors: &Matrix, activations: &Matrix) -> Matrix {
        errors.hadamard(&activations.map(Sigmoid::derivative))
    }

    /// Carries this layer's deltas back to its inputs: δ·Wᵀ.
    /// Must run before the layer is updated.
    pub fn propagate(&self, deltas: &Matrix) -> Matrix {
        deltas * &self.weights.transpose()
    }

    /// W += lr·xᵀ·δ, b += lr·δ.
    pub(crate) fn apply_deltas(&mut self, inputs: &Matrix, deltas: &Matrix, lr: f64) {
        let weights_step = (&inputs.transpose() * deltas).scale(lr);
        let biases_step = deltas.scale(lr);

        self.weights = std::mem::take(&mut self.weights) + weights_step;
        self.biases = std::mem::take(&mut self.biases) + biases_step;
    }
}
