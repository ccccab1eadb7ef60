use ndarray::Array2;
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::LayerSpec;
use crate::error::{NewNetError, ParamKind, SizeMismatch};

/// Factor applied to the standard-normal initial weights.
pub const INIT_SCALE: f64 = 0.1;

/// Weights and bias of one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerParams {
    /// `(layer size, previous layer size)`
    pub weights: Array2<f64>,
    /// `(layer size, 1)`
    pub bias: Array2<f64>,
}

/// Parameters of all layers of the net.
///
/// `layers[0]` belongs to the first hidden layer, `layers[L - 1]` to the output layer.
/// Every layer's shapes match `layer_dims`; both constructors check this.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    /// The number of neurons in each layer, input layer included.
    pub(super) layer_dims: Box<[usize]>,
    pub(super) layers: Vec<LayerParams>,
    /// Relu for hidden layers, sigmoid for the output one; one per layer.
    pub(super) specs: Box<[LayerSpec]>,
}

impl Parameters {
    /// Returns parameters for given geometry.
    /// Weights are drawn from a standard normal distribution scaled by `INIT_SCALE`,
    /// biases are zero. The same `seed` always gives the same parameters.
    ///
    /// # Arguments
    /// * `layer_dims` - number of neurons in each layer, input layer first;
    /// * `seed` - seed of the generator the weights are drawn from.
    ///
    /// # Examples
    /// ```
    /// # use rpdeepnet::feedforward::Parameters;
    /// let params = Parameters::initialize(&[4, 3, 1], 3).unwrap();
    /// assert_eq!(params.layers()[0].weights.dim(), (3, 4));
    /// assert_eq!(params.layers()[1].bias.dim(), (1, 1));
    /// assert_eq!(params, Parameters::initialize(&[4, 3, 1], 3).unwrap());
    /// ```
    pub fn initialize(layer_dims: &[usize], seed: u64) -> Result<Parameters, NewNetError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Parameters::initialize_with(layer_dims, &mut rng)
    }

    /// Same as `Parameters::initialize`, drawing from a caller-owned generator.
    pub fn initialize_with<R: Rng + ?Sized>(
        layer_dims: &[usize],
        rng: &mut R,
    ) -> Result<Parameters, NewNetError> {
        check_geometry(layer_dims)?;

        let layers = layer_dims
            .windows(2)
            .map(|pair| {
                let (prev_size, size) = (pair[0], pair[1]);
                LayerParams {
                    weights: Array2::<f64>::random_using(
                        (size, prev_size),
                        StandardNormal,
                        &mut *rng,
                    ) * INIT_SCALE,
                    bias: Array2::zeros((size, 1)),
                }
            })
            .collect();

        Parameters::assemble(layer_dims, layers)
    }

    /// Builds parameters from given per-layer weights and biases.
    ///
    /// # Returns
    /// * `Ok(Parameters)` if there is one `LayerParams` per layer and all shapes fit `layer_dims`;
    /// * `Err(NewNetError)` otherwise.
    pub fn from_layers(
        layer_dims: &[usize],
        layers: Vec<LayerParams>,
    ) -> Result<Parameters, NewNetError> {
        check_geometry(layer_dims)?;
        if layers.len() != layer_dims.len() - 1 {
            return Err(NewNetError::BadLayerCount(SizeMismatch {
                expected: layer_dims.len() - 1,
                got: layers.len(),
            }));
        }

        Parameters::assemble(layer_dims, layers)
    }

    fn assemble(
        layer_dims: &[usize],
        layers: Vec<LayerParams>,
    ) -> Result<Parameters, NewNetError> {
        let layers_count = layers.len();
        let params = Parameters {
            layer_dims: layer_dims.to_owned().into_boxed_slice(),
            layers,
            specs: (0..layers_count)
                .map(|index| LayerSpec::for_layer(index, layers_count))
                .collect(),
        };
        params.check_shapes()?;
        Ok(params)
    }

    /// Verifies `W_l: (dims[l], dims[l-1])` and `b_l: (dims[l], 1)` for every layer `l`.
    pub fn check_shapes(&self) -> Result<(), NewNetError> {
        for (index, (layer, pair)) in self
            .layers
            .iter()
            .zip(self.layer_dims.windows(2))
            .enumerate()
        {
            let (prev_size, size) = (pair[0], pair[1]);
            if layer.weights.dim() != (size, prev_size) {
                return Err(NewNetError::ShapeMismatch {
                    layer: index + 1,
                    kind: ParamKind::Weights,
                    expected: (size, prev_size),
                    got: layer.weights.dim(),
                });
            }
            if layer.bias.dim() != (size, 1) {
                return Err(NewNetError::ShapeMismatch {
                    layer: index + 1,
                    kind: ParamKind::Bias,
                    expected: (size, 1),
                    got: layer.bias.dim(),
                });
            }
        }
        Ok(())
    }

    pub fn layer_dims(&self) -> &[usize] {
        &self.layer_dims
    }

    /// Number of layers with parameters (input layer excluded).
    pub fn layers_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[LayerParams] {
        &self.layers
    }

    /// Activation of each layer, first hidden layer first.
    pub fn specs(&self) -> &[LayerSpec] {
        &self.specs
    }

    pub fn into_layers(self) -> Vec<LayerParams> {
        self.layers
    }

    /// Total number of weights and biases.
    pub fn parameters_count(&self) -> usize {
        self.layers
            .iter()
            .map(|layer| layer.weights.len() + layer.bias.len())
            .sum()
    }
}

fn check_geometry(layer_dims: &[usize]) -> Result<(), NewNetError> {
    if layer_dims.len() < 2 {
        return Err(NewNetError::BadGeometry(layer_dims.len()));
    }
    if let Some(index) = layer_dims.iter().position(|&size| size == 0) {
        return Err(NewNetError::ZeroLayerSize(index));
    }
    Ok(())
}
