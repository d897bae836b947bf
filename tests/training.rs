use asciinet::{
    presets, Dataset, EpochStats, Frame, MseLoss, Network, NetworkConfig, Sample, TrainConfig, Trainer,
    TrainingObserver,
};

/// Checks invariants on every frame instead of drawing it.
struct InvariantChecker {
    config: NetworkConfig,
    frames: usize,
    out_of_range: usize,
    misshapen: usize,
    epoch_losses: Vec<f64>,
}

impl InvariantChecker {
    fn new(config: NetworkConfig) -> Self {
        InvariantChecker { config, frames: 0, out_of_range: 0, misshapen: 0, epoch_losses: Vec::new() }
    }
}

impl TrainingObserver for InvariantChecker {
    fn on_sample(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        let activations = frame.activations;
        if activations.output.iter().chain(&activations.hidden).any(|a| !(0.0..=1.0).contains(a)) {
            self.out_of_range += 1;
        }
        if !frame.parameters.matches(&self.config) {
            self.misshapen += 1;
        }
    }

    fn on_epoch_end(&mut self, stats: &EpochStats) {
        self.epoch_losses.push(stats.average_loss);
    }
}

#[test]
fn demo_training_makes_progress() {
    let config = presets::demo_network_config();
    let dataset = presets::demo_dataset();
    let mut network = Network::new(config).unwrap();
    let mut checker = InvariantChecker::new(config);

    let history = Trainer::new(TrainConfig::new(1000)).train(&mut network, &dataset, &mut checker);

    assert_eq!(history.len(), 1000);
    assert_eq!(checker.frames, 4000);
    assert_eq!(checker.out_of_range, 0);
    assert_eq!(checker.misshapen, 0);
    assert!(
        history[999].average_loss < history[0].average_loss,
        "epoch 0: {}, epoch 999: {}",
        history[0].average_loss,
        history[999].average_loss
    );
    assert_eq!(checker.epoch_losses, history.iter().map(|s| s.average_loss).collect::<Vec<_>>());
}

#[test]
fn small_topology_learns_negation() {
    let small = NetworkConfig::new(1, 2, 1, 0.5);
    let dataset = Dataset::new(
        vec![Sample::new(vec![0.0], vec![1.0]), Sample::new(vec![1.0], vec![0.0])],
        &small,
    )
    .unwrap();

    let mut a = Network::new(small).unwrap();
    Trainer::new(TrainConfig::new(2000)).train(&mut a, &dataset, &mut ());

    for sample in dataset.samples() {
        let loss = MseLoss::loss(&a.forward(&sample.input).output, &sample.target);
        assert!(loss < 0.05, "loss {loss} for {:?}", sample.input);
    }
}
