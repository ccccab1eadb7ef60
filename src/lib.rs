//! Deep feed-forward binary classifier trained with full-batch gradient descent.
//!
//! The network is `[LINEAR -> RELU] * (L-1) -> LINEAR -> SIGMOID`, with examples
//! stored as the columns of the input matrix.

pub mod activation;
pub mod config;
pub mod error;
pub mod feedforward;
pub mod logging;

#[cfg(feature = "python")]
mod python_ffi;
