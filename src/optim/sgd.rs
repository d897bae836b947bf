use crate::{math::Matrix, layers::DenseLayer};

/// Plain per-sample gradient step with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Moves a layer along its deltas. `inputs` are the activations that fed
    /// the layer on the forward pass.
    pub fn step(&self, layer: &mut DenseLayer, inputs: &Matrix, deltas: &Matrix) {
        layer.apply_deltas(inputs, deltas, self.learning_rate);
    }
}
