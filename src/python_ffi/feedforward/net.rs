use ndarray::Array2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::TrainConfig;
use crate::error::{NewNetError, TrainError};
use crate::feedforward::NeuralNet as InnerNet;
use crate::Impl_to_PyErr;

/// Matrices cross the boundary as lists of rows, examples being columns.
#[pyclass]
pub struct NeuralNet {
    pub(super) net: InnerNet,
}

#[pymethods]
impl NeuralNet {
    #[new]
    #[args(
        learning_rate = "0.1",
        iterations = "3000",
        print_cost = "false",
        seed = "3"
    )]
    pub fn new(
        layer_dims: Vec<usize>,
        learning_rate: f64,
        iterations: usize,
        print_cost: bool,
        seed: u64,
    ) -> Result<Self, NewNetError> {
        let config = TrainConfig::default()
            .with_learning_rate(learning_rate)
            .with_iterations(iterations)
            .with_print_cost(print_cost)
            .with_seed(seed);
        Ok(Self {
            net: InnerNet::new(&layer_dims, config)?,
        })
    }

    /// Trains on inputs `x` (`layer_dims[0]` rows of `m` values) and `m` labels `y`.
    /// Returns the cost of the last iteration.
    pub fn train(&mut self, x: Vec<Vec<f64>>, y: Vec<f64>) -> PyResult<f64> {
        let x = to_matrix(x)?;
        let m = y.len();
        let y = Array2::from_shape_vec((1, m), y).map_err(TrainError::from)?;
        Ok(self.net.train(&x, &y)?.final_cost)
    }

    pub fn predict_proba(&self, x: Vec<Vec<f64>>) -> PyResult<Vec<Vec<f64>>> {
        Ok(to_rows(&self.net.predict_proba(&to_matrix(x)?)?))
    }

    pub fn predict(&self, x: Vec<Vec<f64>>) -> PyResult<Vec<Vec<f64>>> {
        Ok(to_rows(&self.net.predict(&to_matrix(x)?)?))
    }

    #[getter]
    pub fn layer_dims(&self) -> Vec<usize> {
        self.net.layer_dims().to_vec()
    }

    #[getter]
    pub fn costs(&self) -> Vec<f64> {
        self.net.costs().to_vec()
    }

    /// `[(weights rows, bias values)]`, first hidden layer first.
    #[getter]
    pub fn parameters(&self) -> Vec<(Vec<Vec<f64>>, Vec<f64>)> {
        self.net
            .parameters()
            .layers()
            .iter()
            .map(|layer| (to_rows(&layer.weights), layer.bias.iter().copied().collect()))
            .collect()
    }
}

fn to_matrix(rows: Vec<Vec<f64>>) -> PyResult<Array2<f64>> {
    let cols = rows.first().map_or(0, Vec::len);
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
        return Err(PyValueError::new_err(format!(
            "Expected {} value(s) in every row, but row {} got {}!",
            cols,
            i,
            row.len()
        )));
    }
    let shape = (rows.len(), cols);
    Array2::from_shape_vec(shape, rows.into_iter().flatten().collect())
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

fn to_rows(matrix: &Array2<f64>) -> Vec<Vec<f64>> {
    matrix.outer_iter().map(|row| row.to_vec()).collect()
}

Impl_to_PyErr!(for NewNetError, TrainError);
