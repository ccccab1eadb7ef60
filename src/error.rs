//! Error types for net construction, configuration and training.

use ndarray::ShapeError;
use std::{fmt, io};
use thiserror::Error;

/// Error structure for collections size mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Expected {expected} values, but got {got}!")]
pub struct SizeMismatch {
    pub expected: usize,
    pub got: usize,
}

/// Which per-layer parameter a shape check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Weights,
    Bias,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParamKind::Weights => write!(f, "weights"),
            ParamKind::Bias => write!(f, "bias"),
        }
    }
}

/// Error structure for `Parameters` and `NeuralNet` construction
#[derive(Debug, Error)]
pub enum NewNetError {
    #[error(
        "Net must have at least two layers (input and output), \
        but got geometry with len {0}!"
    )]
    BadGeometry(usize),

    #[error("Layer {0} must have at least one neuron!")]
    ZeroLayerSize(usize),

    #[error("Expected {} layers because of provided geometry, but got {}!", .0.expected, .0.got)]
    BadLayerCount(SizeMismatch),

    /// Postcondition of parameter construction violated.
    #[error("Layer {layer} {kind} must have shape {expected:?}, but got {got:?}!")]
    ShapeMismatch {
        layer: usize,
        kind: ParamKind,
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error(transparent)]
    BadConfig(#[from] ConfigError),
}

/// Error structure for `NeuralNet::train` and prediction
#[derive(Debug, Error)]
pub enum TrainError {
    #[error("Expected {} input feature(s), but got {}!", .0.expected, .0.got)]
    BadInputs(SizeMismatch),

    /// Labels could not be reshaped to the output's shape.
    #[error("Labels do not fit the output: {0}")]
    BadLabels(#[from] ShapeError),
}

/// Error structure for `TrainConfig` loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
