use std::time::Duration;

/// Configuration for a `Trainer` run.
///
/// # Fields
/// - `epochs`      — total number of full passes over the training data;
///                   the loop always runs all of them
/// - `frame_delay` — pause after every sample, after observers are notified
/// - `epoch_delay` — pause after every epoch summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub frame_delay: Duration,
    pub epoch_delay: Duration,
}

impl TrainConfig {
    /// Creates an unpaced `TrainConfig`, suitable for headless runs.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            frame_delay: Duration::ZERO,
            epoch_delay: Duration::ZERO,
        }
    }

    pub fn with_delays(mut self, frame_delay: Duration, epoch_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self.epoch_delay = epoch_delay;
        self
    }
}
