use ndarray::Array2;
use tracing::debug;

use super::forward::full_forward;
use super::loss::labels_like;
use super::params::Parameters;
use crate::config::TrainConfig;
use crate::error::{NewNetError, SizeMismatch, TrainError};

/// Binary classifier `[LINEAR -> RELU] * (L-1) -> LINEAR -> SIGMOID`.
///
/// Holds the current parameters, the training hyperparameters and the cost history
/// sampled by `NeuralNet::train`.
#[derive(Debug, Clone)]
pub struct NeuralNet {
    pub(super) parameters: Parameters,
    pub(super) config: TrainConfig,
    /// Costs sampled while training, oldest first.
    pub(super) costs: Vec<f64>,
}

impl NeuralNet {
    /// Returns network for given geometry, with parameters drawn from `config.seed`.
    ///
    /// # Arguments
    /// * `layer_dims` - number of neurons in each layer, input layer first (at least two entries);
    /// * `config` - training hyperparameters.
    ///
    /// # Examples
    /// ```
    /// # use rpdeepnet::config::TrainConfig;
    /// # use rpdeepnet::feedforward::NeuralNet;
    /// let config = TrainConfig::default().with_iterations(500);
    /// let net = NeuralNet::new(&[12288, 20, 7, 5, 1], config).unwrap();
    /// assert_eq!(net.parameters().layers_count(), 4);
    /// assert!(net.costs().is_empty());
    /// ```
    pub fn new(layer_dims: &[usize], config: TrainConfig) -> Result<NeuralNet, NewNetError> {
        let parameters = Parameters::initialize(layer_dims, config.seed)?;
        debug!(
            ?layer_dims,
            parameters = parameters.parameters_count(),
            seed = config.seed,
            "initialized net"
        );
        NeuralNet::from_parameters(parameters, config)
    }

    /// `NeuralNet::new` with learning rate 0.1, 3000 iterations and no cost logging.
    pub fn with_defaults(layer_dims: &[usize]) -> Result<NeuralNet, NewNetError> {
        NeuralNet::new(layer_dims, TrainConfig::default())
    }

    /// Wraps already built parameters.
    pub fn from_parameters(
        parameters: Parameters,
        config: TrainConfig,
    ) -> Result<NeuralNet, NewNetError> {
        config.validate()?;
        Ok(NeuralNet {
            parameters,
            config,
            costs: Vec::new(),
        })
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Costs sampled by every `train` call so far.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    pub fn layer_dims(&self) -> &[usize] {
        self.parameters.layer_dims()
    }

    pub(super) fn check_inputs(&self, x: &Array2<f64>) -> Result<(), TrainError> {
        let expected = self.parameters.layer_dims[0];
        if x.nrows() != expected {
            return Err(TrainError::BadInputs(SizeMismatch {
                expected,
                got: x.nrows(),
            }));
        }
        Ok(())
    }

    /// Output probabilities for inputs `x` of shape `(layer_dims[0], m)`.
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, TrainError> {
        self.check_inputs(x)?;
        let (al, _) = full_forward(x.view(), &self.parameters);
        Ok(al)
    }

    /// Class predictions: `1.0` where the probability exceeds 0.5, `0.0` elsewhere.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array2<f64>, TrainError> {
        Ok(self
            .predict_proba(x)?
            .mapv(|p| if p > 0.5 { 1.0 } else { 0.0 }))
    }

    /// Share of examples whose prediction equals the label.
    pub fn accuracy(&self, x: &Array2<f64>, labels: &Array2<f64>) -> Result<f64, TrainError> {
        let predictions = self.predict(x)?;
        let y = labels_like(&predictions, labels)?;
        let hits = predictions
            .iter()
            .zip(y.iter())
            .filter(|(p, y)| p == y)
            .count();
        Ok(hits as f64 / predictions.len() as f64)
    }
}
