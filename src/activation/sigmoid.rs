/// Logistic activation used by every unit in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sigmoid;

impl Sigmoid {
    /// σ(x) = 1 / (1 + e^-x)
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }

    /// Derivative expressed through the already-computed activation
    /// `a = σ(x)`, i.e. σ'(x) = a(1 - a). Do not pass the pre-activation sum.
    pub fn derivative(a: f64) -> f64 {
        a * (1.0 - a)
    }
}
