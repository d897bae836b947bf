use std::io::Write;

use serde::Serialize;
use tracing::warn;

use crate::network::{Activations, NetworkParameters};
use crate::train::{EpochStats, Frame, TrainingObserver};

/// One line of output. Tagged with `"event"` so consumers can dispatch.
#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Record<'a> {
    Sample {
        epoch: usize,
        sample_index: usize,
        loss: f64,
        input: &'a [f64],
        target: &'a [f64],
        activations: &'a Activations,
        #[serde(skip_serializing_if = "Option::is_none")]
        parameters: Option<&'a NetworkParameters>,
    },
    Epoch(&'a EpochStats),
}

/// Writes training progress as newline-delimited JSON.
pub struct JsonLinesObserver<W: Write> {
    out: W,
    include_parameters: bool,
}

impl<W: Write> JsonLinesObserver<W> {
    pub fn new(out: W) -> Self {
        JsonLinesObserver { out, include_parameters: false }
    }

    /// Also embed the full weights and biases in every sample record.
    pub fn with_parameters(mut self) -> Self {
        self.include_parameters = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &Record<'_>) {
        let res = serde_json::to_writer(&mut self.out, record)
            .map_err(std::io::Error::from)
            .and_then(|_| self.out.write_all(b"\n"));
        if let Err(e) = res {
            warn!(error = %e, "failed to write progress record");
        }
    }
}

impl<W: Write> TrainingObserver for JsonLinesObserver<W> {
    fn on_sample(&mut self, frame: &Frame<'_>) {
        let parameters = self.include_parameters.then_some(frame.parameters);
        self.write_record(&Record::Sample {
            epoch: frame.epoch,
            sample_index: frame.sample_index,
            loss: frame.loss,
            input: frame.input,
            target: frame.target,
            activations: frame.activations,
            parameters,
        });
    }

    fn on_epoch_end(&mut self, stats: &EpochStats) {
        self.write_record(&Record::Epoch(stats));
    }
}
