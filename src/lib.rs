pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod render;
pub mod presets;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use activation::sigmoid::Sigmoid;
pub use layers::dense::DenseLayer;
pub use network::{Activations, Network, NetworkConfig, NetworkParameters};
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::{Dataset, EpochStats, Frame, Sample, TrainConfig, Trainer, TrainingObserver};
pub use render::{AsciiRenderer, JsonLinesObserver};
