//! Elementwise nonlinearities and their derivatives.

use ndarray::{Array2, Zip};
use std::fmt;

/// Elementwise activation: `A = f(Z)`.
pub type ActivationFn = fn(&Array2<f64>) -> Array2<f64>;

/// Activation derivative: `dZ = f'(dA, Z)`.
pub type DerivativeFn = fn(&Array2<f64>, &Array2<f64>) -> Array2<f64>;

/// Nonlinearity applied to a layer's linear output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// `1 / (1 + exp(-z))`, used by the output layer.
    Sigmoid,
    /// `max(0, z)`, used by every hidden layer.
    Relu,
}

impl Activation {
    /// Activation of layer `index` (0-based) in a net of `layers_count` layers:
    /// sigmoid for the last one, relu for the rest.
    pub fn for_layer(index: usize, layers_count: usize) -> Activation {
        if index + 1 == layers_count {
            Activation::Sigmoid
        } else {
            Activation::Relu
        }
    }

    /// The `(forward, derivative)` pair implementing this activation.
    pub fn functions(self) -> (ActivationFn, DerivativeFn) {
        match self {
            Activation::Sigmoid => (sigmoid, sigmoid_backward),
            Activation::Relu => (relu, relu_backward),
        }
    }

    /// Applies the activation to the pre-activation `z`.
    pub fn forward(self, z: &Array2<f64>) -> Array2<f64> {
        (self.functions().0)(z)
    }

    /// Turns the gradient w.r.t. the activation output into the gradient
    /// w.r.t. the pre-activation `z` that produced it.
    pub fn backward(self, da: &Array2<f64>, z: &Array2<f64>) -> Array2<f64> {
        (self.functions().1)(da, z)
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Activation::Sigmoid => write!(f, "sigmoid"),
            Activation::Relu => write!(f, "relu"),
        }
    }
}

/// Activation of one layer, resolved to its function pair.
///
/// Built once per layer when `Parameters` are constructed; the forward pass
/// hands the derivative over to the layer's cache.
#[derive(Clone, Copy)]
pub struct LayerSpec {
    activation: Activation,
    forward: ActivationFn,
    derivative: DerivativeFn,
}

impl LayerSpec {
    pub fn new(activation: Activation) -> LayerSpec {
        let (forward, derivative) = activation.functions();
        LayerSpec {
            activation,
            forward,
            derivative,
        }
    }

    /// Spec of layer `index` (0-based) in a net of `layers_count` layers.
    pub fn for_layer(index: usize, layers_count: usize) -> LayerSpec {
        LayerSpec::new(Activation::for_layer(index, layers_count))
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn forward(&self) -> ActivationFn {
        self.forward
    }

    pub fn derivative(&self) -> DerivativeFn {
        self.derivative
    }
}

impl From<Activation> for LayerSpec {
    fn from(activation: Activation) -> LayerSpec {
        LayerSpec::new(activation)
    }
}

impl fmt::Debug for LayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("LayerSpec").field(&self.activation).finish()
    }
}

// Two specs of the same activation always carry the same pair
impl PartialEq for LayerSpec {
    fn eq(&self, other: &LayerSpec) -> bool {
        self.activation == other.activation
    }
}

/// Sigmoid function.
/// Implements the formula:
/// `1 / (1 + exp(-z))`.
pub fn sigmoid(z: &Array2<f64>) -> Array2<f64> {
    z.mapv(|v| 1.0 / (1.0 + (-v).exp()))
}

/// Rectified linear unit. NaN inputs stay NaN.
pub fn relu(z: &Array2<f64>) -> Array2<f64> {
    z.mapv(|v| if v < 0.0 { 0.0 } else { v })
}

/// Sigmoid derivative, expressed in terms of sigmoid itself:
/// `dA * s * (1 - s)` where `s = sigmoid(z)`.
pub fn sigmoid_backward(da: &Array2<f64>, z: &Array2<f64>) -> Array2<f64> {
    let s = sigmoid(z);
    da * &s * &(1.0 - &s)
}

/// Passes `dA` through where `z > 0`, zero elsewhere.
pub fn relu_backward(da: &Array2<f64>, z: &Array2<f64>) -> Array2<f64> {
    let mut dz = da.clone();
    Zip::from(&mut dz).and(z).for_each(|d, &v| {
        if v <= 0.0 {
            *d = 0.0;
        }
    });
    dz
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn sigmoid_of_zero_is_half() {
        let a = sigmoid(&array![[0.0, 0.0]]);
        assert_abs_diff_eq!(a[[0, 0]], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(a[[0, 1]], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn sigmoid_saturates_for_extreme_inputs() {
        let a = sigmoid(&array![[800.0, -800.0]]);
        assert_eq!(a[[0, 0]], 1.0);
        assert_eq!(a[[0, 1]], 0.0);
    }

    #[test]
    fn relu_clamps_negatives() {
        let a = relu(&array![[-2.0, -0.0, 0.5], [3.0, -1.0, 0.0]]);
        assert_eq!(a, array![[0.0, -0.0, 0.5], [3.0, 0.0, 0.0]]);
    }

    #[test]
    fn relu_backward_masks_non_positive() {
        let da = array![[1.0, 2.0, 3.0]];
        let z = array![[-1.0, 0.0, 4.0]];
        assert_eq!(relu_backward(&da, &z), array![[0.0, 0.0, 3.0]]);
    }

    #[test]
    fn sigmoid_backward_at_zero_is_quarter() {
        let dz = sigmoid_backward(&array![[2.0]], &array![[0.0]]);
        assert_abs_diff_eq!(dz[[0, 0]], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn layer_activation_choice() {
        assert_eq!(Activation::for_layer(0, 3), Activation::Relu);
        assert_eq!(Activation::for_layer(1, 3), Activation::Relu);
        assert_eq!(Activation::for_layer(2, 3), Activation::Sigmoid);
        assert_eq!(Activation::for_layer(0, 1), Activation::Sigmoid);
    }

    #[test]
    fn dispatches_through_enum() {
        let z = array![[-1.0, 1.0]];
        assert_eq!(Activation::Relu.forward(&z), relu(&z));
        assert_eq!(Activation::Sigmoid.forward(&z), sigmoid(&z));
        assert_eq!(Activation::Relu.to_string(), "relu");
    }

    #[test]
    fn functions_pair_matches_free_functions() {
        let z = array![[-2.0, 0.0, 3.0]];
        let da = array![[1.0, 1.0, 2.0]];

        let (forward, derivative) = Activation::Relu.functions();
        assert_eq!(forward(&z), relu(&z));
        assert_eq!(derivative(&da, &z), relu_backward(&da, &z));

        let (forward, derivative) = Activation::Sigmoid.functions();
        assert_eq!(forward(&z), sigmoid(&z));
        assert_eq!(derivative(&da, &z), sigmoid_backward(&da, &z));
    }

    #[test]
    fn layer_spec_holds_resolved_pair() {
        let z = array![[-1.0, 0.5]];
        let da = array![[4.0, 4.0]];

        let spec = LayerSpec::for_layer(0, 2);
        assert_eq!(spec.activation(), Activation::Relu);
        assert_eq!((spec.forward())(&z), relu(&z));
        assert_eq!((spec.derivative())(&da, &z), array![[0.0, 4.0]]);

        let spec = LayerSpec::for_layer(1, 2);
        assert_eq!(spec, LayerSpec::from(Activation::Sigmoid));
        assert_eq!((spec.forward())(&z), sigmoid(&z));
    }
}
