use ndarray::{Array2, Axis, ShapeError};

use super::forward::{LayerCache, LinearCache};
use super::loss::labels_like;

/// Gradients of the cost w.r.t. one layer's parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGrads {
    /// Same shape as the layer's weights.
    pub d_weights: Array2<f64>,
    /// Same shape as the layer's bias.
    pub d_bias: Array2<f64>,
}

/// Gradients of one iteration, indexed by layer position.
///
/// Layers are numbered from 1 (first hidden layer) to L (output layer) in the
/// accessors; activations from 0 (net inputs) to L - 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub(super) layers: Vec<LayerGrads>,
    pub(super) d_activations: Vec<Array2<f64>>,
}

impl Gradients {
    pub fn layers(&self) -> &[LayerGrads] {
        &self.layers
    }

    pub fn layers_count(&self) -> usize {
        self.layers.len()
    }

    /// `dW` of layer `l`, `1 <= l <= L`.
    pub fn dw(&self, l: usize) -> &Array2<f64> {
        &self.layers[l - 1].d_weights
    }

    /// `db` of layer `l`, `1 <= l <= L`.
    pub fn db(&self, l: usize) -> &Array2<f64> {
        &self.layers[l - 1].d_bias
    }

    /// `dA` of the activations feeding layer `l + 1`, `0 <= l < L`.
    pub fn da(&self, l: usize) -> &Array2<f64> {
        &self.d_activations[l]
    }
}

/// Linear part of a layer's backward computation.
///
/// # Arguments
/// * `dz` - gradient of the cost w.r.t. the layer's linear output;
/// * `cache` - what the layer's linear part saw in the forward computation.
///
/// # Returns
/// `(dA_prev, grads)` where
/// `dW = dZ . A_prev^T / m`, `db = row_sum(dZ) / m` and `dA_prev = W^T . dZ`.
pub fn linear_backward(dz: &Array2<f64>, cache: &LinearCache) -> (Array2<f64>, LayerGrads) {
    let m = cache.a_prev.ncols() as f64;

    let d_weights = dz.dot(&cache.a_prev.t()) / m;
    let d_bias = dz.sum_axis(Axis(1)).insert_axis(Axis(1)) / m;
    let da_prev = cache.weights.t().dot(dz);

    (da_prev, LayerGrads { d_weights, d_bias })
}

/// Backward computation of a single `LINEAR -> ACTIVATION` layer, consuming its cache.
///
/// `dZ` comes from the activation derivative the forward step stored in `cache`.
pub fn layer_backward(da: &Array2<f64>, cache: LayerCache) -> (Array2<f64>, LayerGrads) {
    let dz = (cache.derivative)(da, &cache.z);
    linear_backward(&dz, &cache.linear)
}

/// Backward computation of the whole net.
///
/// Starts from the cross-entropy derivative w.r.t. the sigmoid output,
/// `dAL = -(Y / AL - (1 - Y) / (1 - AL))`, then walks the layers from the output
/// down to the first one, each step consuming the `dA` the layer above produced.
///
/// # Arguments
/// * `al` - output of `full_forward`;
/// * `labels` - true labels, reshaped to `al`'s shape;
/// * `caches` - caches of `full_forward`, first hidden layer first.
pub fn full_backward(
    al: &Array2<f64>,
    labels: &Array2<f64>,
    caches: Vec<LayerCache>,
) -> Result<Gradients, ShapeError> {
    let y = labels_like(al, labels)?;
    let layers_count = caches.len();

    let d_al = -(&y / al - &(1.0 - &y) / &(1.0 - al));

    // Filled from the output layer down, reversed at the end
    let mut layers = Vec::with_capacity(layers_count);
    let mut d_activations: Vec<Array2<f64>> = Vec::with_capacity(layers_count);

    for cache in caches.into_iter().rev() {
        let da = d_activations.last().unwrap_or(&d_al);
        let (da_prev, grads) = layer_backward(da, cache);
        layers.push(grads);
        d_activations.push(da_prev);
    }

    layers.reverse();
    d_activations.reverse();

    Ok(Gradients {
        layers,
        d_activations,
    })
}
