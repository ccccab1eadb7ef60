//! Feedforward neural network with backpropagation-based gradient descent training

mod backward;
mod descent;
mod forward;
mod loss;
mod net;
mod params;
mod trainer;

pub use backward::*;
pub use descent::*;
pub use forward::*;
pub use loss::*;
pub use net::*;
pub use params::*;
pub use trainer::*;
