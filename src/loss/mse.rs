pub struct MseLoss;

impl MseLoss {
    /// mean_k (target_k - output_k)², averaged over the output units.
    pub fn loss(output: &[f64], target: &[f64]) -> f64 {
        let n = output.len() as f64;
        target.iter().zip(output.iter())
            .map(|(t, y)| (t - y).powi(2))
            .sum::<f64>() / n
    }
}
