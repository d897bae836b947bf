use std::io::Write;

use tracing::warn;

use crate::math::Matrix;
use crate::train::{EpochStats, Frame, TrainingObserver};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const SEPARATOR_WIDTH: usize = 40;

const INPUT_INDENT: usize = 8;
const HIDDEN_INDENT: usize = 9;
const OUTPUT_INDENT: usize = 9;

/// Draws every training step as a full-screen ASCII diagram.
///
/// Layers are listed top to bottom; between them each row of glyphs shows the
/// sign of the weights leaving one source unit (`/` non-negative, `\`
/// negative).
pub struct AsciiRenderer<W: Write> {
    out: W,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W) -> Self {
        AsciiRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let res = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush());
        if let Err(e) = res {
            warn!(error = %e, "failed to draw frame");
        }
    }
}

impl<W: Write> TrainingObserver for AsciiRenderer<W> {
    fn on_sample(&mut self, frame: &Frame<'_>) {
        let text = render_frame(frame);
        self.emit(&text);
    }

    fn on_epoch_end(&mut self, stats: &EpochStats) {
        let text = render_epoch_summary(stats);
        self.emit(&text);
    }
}

/// The full screen for one frame, starting with the clear-screen sequence.
pub fn render_frame(frame: &Frame<'_>) -> String {
    let params = frame.parameters;
    let hidden = &frame.activations.hidden;
    let output = &frame.activations.output;

    let mut s = String::from(CLEAR_SCREEN);
    s.push_str(&format!("Epoch: {} | Loss: {:.4}\n\n", frame.epoch, frame.loss));

    s.push_str("Input Layer:\n");
    push_column(&mut s, INPUT_INDENT, frame.input.iter().map(|v| neuron(*v, "x")));
    push_glyphs(&mut s, params.weight1());

    s.push_str("\nHidden Layer:\n");
    push_column(&mut s, HIDDEN_INDENT, hidden.iter().map(|v| neuron(*v, "h")));
    push_glyphs(&mut s, params.weight2());

    s.push_str("\nOutput Layer:\n");
    push_column(
        &mut s,
        OUTPUT_INDENT,
        output.iter().zip(frame.target).map(|(y, t)| format!("{} -> Target: {:.2}", neuron(*y, "y"), t)),
    );

    s.push_str("\nBackpropagation:\n");
    push_column(
        &mut s,
        OUTPUT_INDENT,
        output.iter().zip(frame.target).map(|(y, t)| format!("Error: {:.4}", t - y)),
    );

    s
}

pub fn render_epoch_summary(stats: &EpochStats) -> String {
    format!("\nAverage Loss: {:.4}\n", stats.average_loss)
}

/// Sign glyph for one connection.
pub fn weight_glyph(weight: f64) -> char {
    if weight >= 0.0 { '/' } else { '\\' }
}

fn neuron(value: f64, label: &str) -> String {
    format!("({}{:.2})", label, value)
}

/// One entry per line, with a `|` connector between consecutive entries.
fn push_column<I>(s: &mut String, indent: usize, entries: I)
where
    I: ExactSizeIterator<Item = String>,
{
    let last = entries.len().saturating_sub(1);
    for (i, entry) in entries.enumerate() {
        s.push_str(&" ".repeat(indent));
        s.push_str(&entry);
        s.push('\n');
        if i < last {
            s.push_str(&" ".repeat(indent + 1));
            s.push_str("|\n");
        }
    }
}

fn push_glyphs(s: &mut String, weights: &Matrix) {
    s.push_str(&"-".repeat(SEPARATOR_WIDTH));
    s.push('\n');
    for row in &weights.data {
        s.extend(row.iter().map(|&w| weight_glyph(w)));
        s.push('\n');
    }
}
