//! Tilt position classification

pub mod classifier;

pub use classifier::{PositionClassifier, Reduction};
