pub mod ascii;
pub mod json;

pub use ascii::AsciiRenderer;
pub use json::JsonLinesObserver;
