use rand::{rngs::OsRng, RngCore};
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::error::Result;
use crate::layers::DenseLayer;
use crate::math::Matrix;
use crate::network::{config::NetworkConfig, parameters::NetworkParameters};
use crate::optim::Sgd;

/// Hidden and output activations of one forward pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activations {
    pub hidden: Vec<f64>,
    pub output: Vec<f64>,
}

/// A 3-layer (input, hidden, output) sigmoid network.
///
/// The network is the sole owner of its parameters. `forward` only reads
/// them; `backward` is the only way to change them.
#[derive(Debug, Clone)]
pub struct Network {
    config: NetworkConfig,
    params: NetworkParameters,
    optimizer: Sgd,
}

impl Network {
    /// Initializes every weight and bias uniformly in [-0.5, 0.5) from the
    /// operating system's entropy source.
    pub fn new(config: NetworkConfig) -> Result<Network> {
        Network::with_rng(config, &mut OsRng)
    }

    /// Like `new`, drawing from `rng` instead of the OS source.
    pub fn with_rng<R: RngCore + ?Sized>(config: NetworkConfig, rng: &mut R) -> Result<Network> {
        let params = NetworkParameters::random(&config, rng)?;
        debug!(
            input = config.input_size,
            hidden = config.hidden_size,
            output = config.output_size,
            "network initialized"
        );
        Ok(Network::assemble(config, params))
    }

    /// All weights and biases zero.
    pub fn zeroed(config: NetworkConfig) -> Network {
        Network::assemble(config, NetworkParameters::zeros(&config))
    }

    /// Fails with `ShapeMismatch` unless `params` has the topology of `config`.
    pub fn from_parameters(config: NetworkConfig, params: NetworkParameters) -> Result<Network> {
        params.check(&config)?;
        Ok(Network::assemble(config, params))
    }

    fn assemble(config: NetworkConfig, params: NetworkParameters) -> Network {
        Network {
            config,
            params,
            optimizer: Sgd::new(config.learning_rate),
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn parameters(&self) -> &NetworkParameters {
        &self.params
    }

    /// Forward pass. Pure: the same input and parameters always give the same
    /// activations.
    pub fn forward(&self, input: &[f64]) -> Activations {
        let hidden = self.params.hidden.feed_from(&Matrix::row(input.to_vec()));
        let output = self.params.output.feed_from(&hidden);

        Activations {
            hidden: into_vec(hidden),
            output: into_vec(output),
        }
    }

    /// Backpropagates `target` through the activations of the matching
    /// forward pass and updates all parameters in place.
    ///
    /// Hidden deltas are taken through the weights as they were before this
    /// call; the output layer is updated first, then the hidden layer.
    pub fn backward(&mut self, input: &[f64], activations: Activations, target: &[f64]) {
        let input = Matrix::row(input.to_vec());
        let hidden = Matrix::row(activations.hidden);
        let output = Matrix::row(activations.output);

        let output_errors = Matrix::row(
            target.iter().zip(&output.data[0]).map(|(t, y)| t - y).collect(),
        );
        let output_deltas = DenseLayer::deltas(&output_errors, &output);

        let hidden_errors = self.params.output.propagate(&output_deltas);
        let hidden_deltas = DenseLayer::deltas(&hidden_errors, &hidden);

        self.optimizer.step(&mut self.params.output, &hidden, &output_deltas);
        self.optimizer.step(&mut self.params.hidden, &input, &hidden_deltas);
    }
}

fn into_vec(row: Matrix) -> Vec<f64> {
    row.data.into_iter().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::Sigmoid;
    use crate::loss::MseLoss;
    use approx::assert_relative_eq;

    fn config() -> NetworkConfig {
        NetworkConfig::new(3, 4, 2, 0.1)
    }

    struct DryRng;

    impl RngCore for DryRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!()
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!()
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!()
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            Err(rand::Error::new("entropy source unavailable"))
        }
    }

    #[test]
    fn entropy_failure_is_reported() {
        let err = Network::with_rng(config(), &mut DryRng).unwrap_err();
        assert!(matches!(err, crate::Error::Entropy(_)));
        assert!(err.to_string().contains("cannot generate random number"));
    }

    #[test]
    fn from_parameters_rejects_foreign_topology() {
        let tiny = NetworkConfig::new(1, 1, 1, 0.1);
        let err = Network::from_parameters(config(), NetworkParameters::zeros(&tiny)).unwrap_err();

        match err {
            crate::Error::ShapeMismatch { what, expected, actual } => {
                assert_eq!(what, "weight1");
                assert_eq!(expected, (3, 4));
                assert_eq!(actual, (1, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_network_outputs_half_everywhere() {
        let network = Network::zeroed(config());
        for input in [[0.0, 0.0, 1.0], [5.0, -3.0, 0.25], [1.0, 1.0, 1.0]] {
            let act = network.forward(&input);
            assert_eq!(act.hidden, vec![0.5; 4]);
            assert_eq!(act.output, vec![0.5; 2]);
        }
    }

    #[test]
    fn forward_is_deterministic() {
        let network = Network::new(config()).unwrap();
        let a = network.forward(&[0.0, 1.0, 1.0]);
        let b = network.forward(&[0.0, 1.0, 1.0]);
        assert_eq!(a, b);
    }

    #[test]
    fn forward_matches_hand_computation() {
        let cfg = NetworkConfig::new(2, 1, 1, 0.1);
        let params = NetworkParameters::new(
            Matrix::from_data(vec![vec![0.5], vec![-1.0]]),
            vec![0.25],
            Matrix::from_data(vec![vec![2.0]]),
            vec![-0.5],
            &cfg,
        )
        .unwrap();
        let network = Network::from_parameters(cfg, params).unwrap();

        let act = network.forward(&[1.0, 2.0]);
        let h = Sigmoid::function(0.5 - 2.0 + 0.25);
        assert_relative_eq!(act.hidden[0], h);
        assert_relative_eq!(act.output[0], Sigmoid::function(2.0 * h - 0.5));
    }

    #[test]
    fn backward_uses_old_output_weights() {
        // 1-1-1 network so every step can be checked by hand.
        let cfg = NetworkConfig::new(1, 1, 1, 0.5);
        let params = NetworkParameters::new(
            Matrix::from_data(vec![vec![0.0]]),
            vec![0.0],
            Matrix::from_data(vec![vec![1.0]]),
            vec![0.0],
            &cfg,
        )
        .unwrap();
        let mut network = Network::from_parameters(cfg, params).unwrap();

        let input = [2.0];
        let target = [1.0];
        let act = network.forward(&input);
        let h = act.hidden[0];
        let y = act.output[0];
        assert_eq!(h, 0.5);
        assert_relative_eq!(y, Sigmoid::function(0.5));

        let delta = (1.0 - y) * y * (1.0 - y);
        let hidden_delta = delta * 1.0 * h * (1.0 - h);

        network.backward(&input, act, &target);
        let p = network.parameters();

        assert_relative_eq!(p.weight2().data[0][0], 1.0 + 0.5 * delta * h);
        assert_relative_eq!(p.bias2()[0], 0.5 * delta);
        assert_relative_eq!(p.weight1().data[0][0], 0.5 * hidden_delta * 2.0);
        assert_relative_eq!(p.bias1()[0], 0.5 * hidden_delta);
    }

    #[test]
    fn backward_keeps_shapes() {
        let mut network = Network::new(config()).unwrap();
        for _ in 0..10 {
            let act = network.forward(&[1.0, 0.0, 1.0]);
            network.backward(&[1.0, 0.0, 1.0], act, &[1.0, 0.0]);
            assert!(network.parameters().matches(&config()));
        }
    }

    #[test]
    fn repeated_updates_fit_a_single_sample() {
        let mut network = Network::new(config()).unwrap();
        let input = [1.0, 0.0, 1.0];
        let target = [1.0, 0.0];

        for _ in 0..10_000 {
            let act = network.forward(&input);
            network.backward(&input, act, &target);
        }

        let loss = MseLoss::loss(&network.forward(&input).output, &target);
        assert!(loss < 1e-3, "loss after 10k updates: {loss}");
    }

    #[test]
    fn backward_moves_output_toward_target() {
        let mut network = Network::zeroed(config());
        let input = [0.0, 1.0, 1.0];
        let target = [1.0, 0.0];
        let before = network.forward(&input);
        network.backward(&input, before.clone(), &target);
        let after = network.forward(&input);

        assert!(after.output[0] > before.output[0]);
        assert!(after.output[1] < before.output[1]);
    }
}
