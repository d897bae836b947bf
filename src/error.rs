use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The operating system entropy source could not be read.
    #[error("cannot generate random number: {0}")]
    Entropy(#[from] rand::Error),

    /// An explicitly supplied parameter does not match the configured topology.
    #[error("{what} has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        what: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// A training sample does not match the configured input/output sizes.
    #[error(
        "sample {index} has input length {input} and target length {target}, \
         expected {expected_input} and {expected_target}"
    )]
    SampleShape {
        index: usize,
        expected_input: usize,
        expected_target: usize,
        input: usize,
        target: usize,
    },

    /// Inputs and targets were supplied as lists of different lengths.
    #[error("{inputs} inputs but {targets} targets")]
    PairCount { inputs: usize, targets: usize },
}
