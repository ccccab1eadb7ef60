use super::backward::Gradients;
use super::params::{LayerParams, Parameters};

/// Gradient descent step over all layers at once:
/// `W' = W - learning_rate * dW`, `b' = b - learning_rate * db`.
///
/// `params` is left untouched; the new parameters are a full copy.
/// With `learning_rate = 0` they are bit-for-bit equal to `params`.
pub fn update(params: &Parameters, grads: &Gradients, learning_rate: f64) -> Parameters {
    debug_assert_eq!(params.layers.len(), grads.layers.len());

    let layers = params
        .layers
        .iter()
        .zip(grads.layers.iter())
        .map(|(layer, grad)| LayerParams {
            weights: &layer.weights - &(learning_rate * &grad.d_weights),
            bias: &layer.bias - &(learning_rate * &grad.d_bias),
        })
        .collect();

    Parameters {
        layer_dims: params.layer_dims.clone(),
        layers,
        specs: params.specs.clone(),
    }
}
