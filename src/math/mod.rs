pub mod entropy;
pub mod matrix;

pub use matrix::Matrix;
