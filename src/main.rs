// Trains the demo network and animates every step in the terminal.
// Log output goes to stderr; set RUST_LOG=debug to see per-epoch losses.
use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use asciinet::{presets, AsciiRenderer, Network, Trainer};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut network = match Network::new(presets::demo_network_config()) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("asciinet: {e}");
            return ExitCode::FAILURE;
        }
    };

    let dataset = presets::demo_dataset();
    let mut renderer = AsciiRenderer::new(io::stdout().lock());

    Trainer::new(presets::demo_train_config()).train(&mut network, &dataset, &mut renderer);

    ExitCode::SUCCESS
}
