use std::thread;
use std::time::Instant;

use tracing::{debug, info};

use crate::{
    loss::MseLoss,
    network::Network,
    train::{
        dataset::Dataset,
        epoch_stats::EpochStats,
        observer::{Frame, TrainingObserver},
        state::TrainingState,
        train_config::TrainConfig,
    },
};

/// Online (one sample at a time) training loop.
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainConfig,
}

impl Trainer {
    pub fn new(config: TrainConfig) -> Trainer {
        Trainer { config }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Trains `network` for `config.epochs` epochs over `dataset` in its fixed
    /// order and returns the statistics of every epoch.
    ///
    /// For each sample: forward, loss, backward, then `observer.on_sample`
    /// followed by the frame delay. Each epoch ends with
    /// `observer.on_epoch_end` and the epoch delay. There is no early exit.
    pub fn train<O>(&self, network: &mut Network, dataset: &Dataset, observer: &mut O) -> Vec<EpochStats>
    where
        O: TrainingObserver + ?Sized,
    {
        info!(epochs = self.config.epochs, samples = dataset.len(), "training started");

        let mut history = Vec::with_capacity(self.config.epochs);
        let mut state = TrainingState::default();

        for epoch in 0..self.config.epochs {
            let t_start = Instant::now();
            state.reset(epoch);

            for (sample_index, sample) in dataset.samples().iter().enumerate() {
                let activations = network.forward(&sample.input);
                let loss = MseLoss::loss(&activations.output, &sample.target);

                network.backward(&sample.input, activations.clone(), &sample.target);
                state.accumulate(loss);

                observer.on_sample(&Frame {
                    epoch,
                    sample_index,
                    parameters: network.parameters(),
                    input: &sample.input,
                    activations: &activations,
                    target: &sample.target,
                    loss,
                });
                pause(self.config.frame_delay);
            }

            let stats = EpochStats {
                epoch: state.epoch,
                total_epochs: self.config.epochs,
                average_loss: state.average_loss(),
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            debug!(epoch, average_loss = stats.average_loss, "epoch complete");

            observer.on_epoch_end(&stats);
            history.push(stats);
            pause(self.config.epoch_delay);
        }

        if let Some(last) = history.last() {
            info!(final_loss = last.average_loss, "training finished");
        }
        history
    }
}

fn pause(delay: std::time::Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
