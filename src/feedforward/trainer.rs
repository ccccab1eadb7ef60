use ndarray::Array2;
use std::time::{Duration, Instant};
use tracing::info;

use super::backward::full_backward;
use super::descent::update;
use super::forward::full_forward;
use super::loss::cost;
use super::net::NeuralNet;
use crate::error::TrainError;

/// Summary of one `NeuralNet::train` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainReport {
    pub iterations: usize,
    /// Cost computed in the last iteration, before its update.
    pub final_cost: f64,
    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

impl NeuralNet {
    /// Trains the net with full-batch gradient descent.
    ///
    /// Every iteration runs `full_forward -> cost -> full_backward -> update` and replaces the
    /// parameters with the updated ones. The cost of every `cost_interval`-th iteration and of the
    /// last one is appended to `NeuralNet::costs` (and logged if `print_cost` is set).
    /// There is no convergence check: the configured number of iterations always runs,
    /// NaN costs included.
    ///
    /// # Arguments
    /// * `x` - inputs, one example per column: `(layer_dims[0], m)`;
    /// * `labels` - `m` labels in {0, 1}, in any shape holding `m` values.
    ///
    /// # Returns
    /// * `Ok(TrainReport)` once all iterations are done;
    /// * `Err(TrainError)` if `x` has the wrong number of features or `labels` the wrong
    /// number of values. Parameters are untouched in that case.
    ///
    /// # Examples
    /// ```
    /// # use ndarray::array;
    /// # use rpdeepnet::config::TrainConfig;
    /// # use rpdeepnet::feedforward::NeuralNet;
    /// let mut net = NeuralNet::new(&[2, 3, 1], TrainConfig::default().with_iterations(300)).unwrap();
    /// let x = array![[0.0, 0.0, 1.0, 1.0], [0.0, 1.0, 0.0, 1.0]];
    /// let y = array![[0.0, 0.0, 0.0, 1.0]];
    /// let report = net.train(&x, &y).unwrap();
    /// assert_eq!(report.iterations, 300);
    /// // Sampled at iterations 0, 100, 200 and 299
    /// assert_eq!(net.costs().len(), 4);
    /// ```
    pub fn train(
        &mut self,
        x: &Array2<f64>,
        labels: &Array2<f64>,
    ) -> Result<TrainReport, TrainError> {
        self.check_inputs(x)?;

        let iterations = self.config.iterations;
        let learning_rate = self.config.learning_rate;
        let start = Instant::now();
        let mut final_cost = f64::NAN;

        for i in 0..iterations {
            let (al, caches) = full_forward(x.view(), &self.parameters);
            let current_cost = cost(&al, labels)?;
            let grads = full_backward(&al, labels, caches)?;
            self.parameters = update(&self.parameters, &grads, learning_rate);

            if i % self.config.cost_interval == 0 || i + 1 == iterations {
                if self.config.print_cost {
                    info!("Cost after iteration {}: {}", i, current_cost);
                }
                self.costs.push(current_cost);
            }
            final_cost = current_cost;
        }

        let elapsed = start.elapsed();
        info!("Training time in seconds: {:.2}", elapsed.as_secs_f64());

        Ok(TrainReport {
            iterations,
            final_cost,
            elapsed,
        })
    }
}
