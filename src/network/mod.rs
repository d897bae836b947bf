pub mod config;
pub mod network;
pub mod parameters;

pub use config::NetworkConfig;
pub use network::{Activations, Network};
pub use parameters::NetworkParameters;
