// Analytic gradients of the backward pass against centered finite differences of the cost.

use ndarray::{array, Array2};
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rpdeepnet::feedforward::{cost, full_backward, full_forward, LayerParams, Parameters};

const EPSILON: f64 = 1e-6;
const TOLERANCE: f64 = 1e-7;

fn random_params(dims: &[usize], rng: &mut StdRng) -> Parameters {
    let layers = dims
        .windows(2)
        .map(|pair| LayerParams {
            weights: Array2::<f64>::random_using((pair[1], pair[0]), StandardNormal, &mut *rng)
                * 0.5,
            bias: Array2::<f64>::random_using((pair[1], 1), StandardNormal, &mut *rng) * 0.1,
        })
        .collect();
    Parameters::from_layers(dims, layers).unwrap()
}

fn cost_of(params: &Parameters, x: &Array2<f64>, y: &Array2<f64>) -> f64 {
    let (al, _) = full_forward(x.view(), params);
    cost(&al, y).unwrap()
}

fn nudged(
    params: &Parameters,
    layer: usize,
    bias: bool,
    at: (usize, usize),
    delta: f64,
) -> Parameters {
    let mut layers = params.clone().into_layers();
    let target = if bias {
        &mut layers[layer].bias
    } else {
        &mut layers[layer].weights
    };
    target[at] += delta;
    Parameters::from_layers(params.layer_dims(), layers).unwrap()
}

/// `||analytic - numeric|| / (||analytic|| + ||numeric||)` over all parameters.
fn relative_difference(dims: &[usize], seed: u64, y: &Array2<f64>) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    let params = random_params(dims, &mut rng);
    let x = Array2::<f64>::random_using((dims[0], y.ncols()), StandardNormal, &mut rng);

    let (al, caches) = full_forward(x.view(), &params);
    let grads = full_backward(&al, y, caches).unwrap();

    let mut analytic = Vec::new();
    let mut numeric = Vec::new();
    for (layer, values) in params.layers().iter().enumerate() {
        for &bias in &[false, true] {
            let (shape, grad) = if bias {
                (values.bias.dim(), grads.db(layer + 1))
            } else {
                (values.weights.dim(), grads.dw(layer + 1))
            };
            for i in 0..shape.0 {
                for j in 0..shape.1 {
                    let plus = cost_of(&nudged(&params, layer, bias, (i, j), EPSILON), &x, y);
                    let minus = cost_of(&nudged(&params, layer, bias, (i, j), -EPSILON), &x, y);
                    numeric.push((plus - minus) / (2.0 * EPSILON));
                    analytic.push(grad[[i, j]]);
                }
            }
        }
    }

    let norm = |v: &[f64]| v.iter().map(|a| a * a).sum::<f64>().sqrt();
    let difference: Vec<f64> = analytic.iter().zip(&numeric).map(|(a, n)| a - n).collect();
    norm(&difference) / (norm(&analytic) + norm(&numeric))
}

#[test]
fn gradients_match_finite_differences() {
    let y = array![[1.0, 0.0, 1.0, 1.0, 0.0, 0.0]];
    let diff = relative_difference(&[4, 5, 3, 1], 1, &y);
    assert!(diff < TOLERANCE, "relative difference {}", diff);
}

#[test]
fn gradients_match_finite_differences_deeper_net() {
    let y = array![[0.0, 1.0, 1.0, 0.0, 1.0]];
    let diff = relative_difference(&[3, 4, 4, 2, 1], 2, &y);
    assert!(diff < TOLERANCE, "relative difference {}", diff);
}

#[test]
fn gradients_match_finite_differences_without_hidden_layers() {
    let y = array![[0.0, 1.0, 1.0]];
    let diff = relative_difference(&[5, 1], 3, &y);
    assert!(diff < TOLERANCE, "relative difference {}", diff);
}
