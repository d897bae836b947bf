pub mod dataset;
pub mod epoch_stats;
pub mod observer;
pub mod state;
pub mod train_config;
pub mod trainer;

pub use dataset::{Dataset, Sample};
pub use epoch_stats::EpochStats;
pub use observer::{Frame, TrainingObserver};
pub use state::TrainingState;
pub use train_config::TrainConfig;
pub use trainer::Trainer;
