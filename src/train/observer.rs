use crate::network::{Activations, NetworkParameters};
use crate::train::epoch_stats::EpochStats;

/// Snapshot of one training step, lent to observers.
///
/// `parameters` are the values after this sample's update; `activations` are
/// those of the forward pass that preceded it.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub epoch: usize,
    pub sample_index: usize,
    pub parameters: &'a NetworkParameters,
    pub input: &'a [f64],
    pub activations: &'a Activations,
    pub target: &'a [f64],
    pub loss: f64,
}

/// Consumer of training progress. Implementations only read what they are
/// given and cannot fail the run.
pub trait TrainingObserver {
    fn on_sample(&mut self, frame: &Frame<'_>);

    fn on_epoch_end(&mut self, _stats: &EpochStats) {}
}

/// Headless runs.
impl TrainingObserver for () {
    fn on_sample(&mut self, _frame: &Frame<'_>) {}
}
