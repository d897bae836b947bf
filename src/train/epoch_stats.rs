use serde::{Serialize, Deserialize};

/// Per-epoch training statistics.
///
/// The trainer hands one `EpochStats` to its observer at the end of every
/// epoch and returns the whole history when training finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Sum of per-sample losses divided by the sample count.
    pub average_loss: f64,
    /// Wall-clock duration of this epoch in milliseconds, pacing included.
    pub elapsed_ms: u64,
}
