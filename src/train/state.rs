/// Running loss for the epoch in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingState {
    pub epoch: usize,
    total_loss: f64,
    samples: usize,
}

impl TrainingState {
    pub fn reset(&mut self, epoch: usize) {
        *self = TrainingState { epoch, ..TrainingState::default() };
    }

    pub fn accumulate(&mut self, loss: f64) {
        self.total_loss += loss;
        self.samples += 1;
    }

    /// Mean loss over the samples seen so far; 0 before the first one.
    pub fn average_loss(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.total_loss / self.samples as f64
    }
}
