use ndarray::{Array2, ArrayView2, CowArray, Ix2};

use super::params::Parameters;
use crate::activation::{DerivativeFn, LayerSpec};

/// What the linear part of a layer saw, kept for its backward step.
pub struct LinearCache<'a> {
    /// Activations of the previous layer (net inputs for the first layer): `(prev size, m)`.
    pub a_prev: CowArray<'a, f64, Ix2>,
    pub weights: &'a Array2<f64>,
    pub bias: &'a Array2<f64>,
}

/// Everything the backward step of one layer needs.
///
/// Built by `layer_forward`, consumed by `layer_backward`.
pub struct LayerCache<'a> {
    pub linear: LinearCache<'a>,
    /// Pre-activation value `Z = W . A_prev + b`.
    pub z: Array2<f64>,
    /// Derivative of the activation the layer applied to `z`.
    pub derivative: DerivativeFn,
}

/// Linear part of a layer's forward computation:
/// `Z = W . A + b`, with `b` broadcast over the examples.
pub fn linear<'a>(
    a: CowArray<'a, f64, Ix2>,
    weights: &'a Array2<f64>,
    bias: &'a Array2<f64>,
) -> (Array2<f64>, LinearCache<'a>) {
    let z = weights.dot(&a) + bias;
    (
        z,
        LinearCache {
            a_prev: a,
            weights,
            bias,
        },
    )
}

/// `LINEAR -> ACTIVATION` computation of a single layer.
///
/// # Returns
/// `(A, cache)`: the layer's activations and what its backward step needs,
/// the activation derivative included.
pub fn layer_forward<'a>(
    a_prev: CowArray<'a, f64, Ix2>,
    weights: &'a Array2<f64>,
    bias: &'a Array2<f64>,
    spec: LayerSpec,
) -> (Array2<f64>, LayerCache<'a>) {
    let (z, linear) = linear(a_prev, weights, bias);
    let a = (spec.forward())(&z);
    (
        a,
        LayerCache {
            linear,
            z,
            derivative: spec.derivative(),
        },
    )
}

/// `[LINEAR -> RELU] * (L-1) -> LINEAR -> SIGMOID` computation of the whole net.
///
/// # Arguments
/// * `x` - inputs, one example per column: `(layer_dims[0], m)`;
/// * `params` - parameters of all layers.
///
/// # Returns
/// `(AL, caches)`: output activations of shape `(layer_dims[L], m)` and one cache per layer,
/// first hidden layer first.
///
/// # Examples
/// ```
/// # use ndarray::array;
/// # use rpdeepnet::feedforward::{full_forward, Parameters};
/// let params = Parameters::initialize(&[2, 3, 1], 3).unwrap();
/// let x = array![[1.0, 0.0, -2.0], [0.5, 1.0, 3.0]];
/// let (al, caches) = full_forward(x.view(), &params);
/// assert_eq!(al.dim(), (1, 3));
/// assert_eq!(caches.len(), 2);
/// ```
pub fn full_forward<'a>(
    x: ArrayView2<'a, f64>,
    params: &'a Parameters,
) -> (Array2<f64>, Vec<LayerCache<'a>>) {
    let mut caches = Vec::with_capacity(params.layers.len());

    // Each layer's output becomes the next layer's input
    let mut a = CowArray::from(x);
    for (layer, &spec) in params.layers.iter().zip(params.specs.iter()) {
        let (next, cache) = layer_forward(a, &layer.weights, &layer.bias, spec);
        caches.push(cache);
        a = CowArray::from(next);
    }

    (a.into_owned(), caches)
}
