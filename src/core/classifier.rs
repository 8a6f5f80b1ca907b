use crate::models::{FeatureVector, ModelKind, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while scoring a feature vector
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("le modèle a produit un score non numérique")]
    NonFinite,
}

/// Structural problems detected when a model is loaded
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("expected {expected} coefficients, found {actual}")]
    CoefficientCount { expected: usize, actual: usize },

    #[error("network has no layers")]
    EmptyNetwork,

    #[error("layer {layer}: expected {expected} inputs, found {actual}")]
    LayerInputs { layer: usize, expected: usize, actual: usize },

    #[error("layer {layer}: {weights} weight rows but {biases} biases")]
    LayerBiases { layer: usize, weights: usize, biases: usize },

    #[error("output layer must have exactly one unit, found {0}")]
    OutputWidth(usize),

    #[error("scaler must have {expected} means and scales, found {means} and {scales}")]
    ScalerWidth { expected: usize, means: usize, scales: usize },

    #[error("scaler scale at index {0} must be positive")]
    ScalerScale(usize),

    #[error("non-finite parameter in {0}")]
    NonFinite(&'static str),
}

/// A binary classifier over tumor measurements
pub trait Classifier: Send + Sync + fmt::Debug {
    /// Which loader produced this model
    fn kind(&self) -> ModelKind;

    /// Probability of the malignant class, in [0, 1]
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, PredictionError>;
}

#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[inline]
fn to_probability(score: f64) -> Result<f64, PredictionError> {
    if score.is_finite() {
        Ok(score.clamp(0.0, 1.0))
    } else {
        Err(PredictionError::NonFinite)
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Per-feature standardization: `z = (x - mean) / scale`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Scaler {
    /// Fit mean and standard deviation per column; constant columns get a scale of 1
    pub fn fit(samples: &[[f64; FEATURE_COUNT]]) -> Self {
        let n = samples.len().max(1) as f64;
        let mut mean = vec![0.0; FEATURE_COUNT];
        let mut scale = vec![0.0; FEATURE_COUNT];

        for sample in samples {
            for (m, x) in mean.iter_mut().zip(sample) {
                *m += x;
            }
        }
        for m in mean.iter_mut() {
            *m /= n;
        }
        for sample in samples {
            for ((s, m), x) in scale.iter_mut().zip(&mean).zip(sample) {
                *s += (x - m).powi(2);
            }
        }
        for s in scale.iter_mut() {
            *s = (*s / n).sqrt();
            if *s < 1e-12 {
                *s = 1.0;
            }
        }

        Self { mean, scale }
    }

    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (m, s))| (x - m) / s)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ModelError::ScalerWidth {
                expected: FEATURE_COUNT,
                means: self.mean.len(),
                scales: self.scale.len(),
            });
        }
        if !all_finite(&self.mean) || !all_finite(&self.scale) {
            return Err(ModelError::NonFinite("scaler"));
        }
        if let Some(idx) = self.scale.iter().position(|s| *s <= 0.0) {
            return Err(ModelError::ScalerScale(idx));
        }
        Ok(())
    }
}

fn scaled_input(scaler: Option<&Scaler>, features: &FeatureVector) -> Vec<f64> {
    match scaler {
        Some(scaler) => scaler.transform(features.values()),
        None => features.values().to_vec(),
    }
}

fn default_linear_kind() -> ModelKind {
    ModelKind::Linear
}

/// Logistic regression: `p = sigmoid(intercept + coefficients · z)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub scaler: Option<Scaler>,
    #[serde(skip, default = "default_linear_kind")]
    kind: ModelKind,
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: Vec<f64>, scaler: Option<Scaler>) -> Self {
        Self {
            intercept,
            coefficients,
            scaler,
            kind: ModelKind::Linear,
        }
    }

    /// Tag the model with the loader that produced it
    pub fn with_kind(mut self, kind: ModelKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(ModelError::CoefficientCount {
                expected: FEATURE_COUNT,
                actual: self.coefficients.len(),
            });
        }
        if !self.intercept.is_finite() || !all_finite(&self.coefficients) {
            return Err(ModelError::NonFinite("linear coefficients"));
        }
        if let Some(scaler) = &self.scaler {
            scaler.validate()?;
        }
        Ok(())
    }

    /// Raw linear score before the logistic link
    pub fn decision_function(&self, features: &FeatureVector) -> f64 {
        let z = scaled_input(self.scaler.as_ref(), features);
        self.intercept
            + z.iter()
                .zip(&self.coefficients)
                .map(|(x, w)| x * w)
                .sum::<f64>()
    }
}

impl Classifier for LinearModel {
    fn kind(&self) -> ModelKind {
        self.kind
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        to_probability(sigmoid(self.decision_function(features)))
    }
}

/// Activation applied after a dense layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Sigmoid,
    Tanh,
    #[default]
    Linear,
}

impl Activation {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        match self {
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => sigmoid(x),
            Activation::Tanh => x.tanh(),
            Activation::Linear => x,
        }
    }
}

/// Fully connected layer, `weights[out][in]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
    #[serde(default)]
    pub activation: Activation,
}

impl DenseLayer {
    fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.bias)
            .map(|(row, b)| {
                let sum: f64 = row.iter().zip(input).map(|(w, x)| w * x).sum();
                self.activation.apply(sum + b)
            })
            .collect()
    }
}

/// Feed-forward network ending in a single probability unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuralNetwork {
    pub layers: Vec<DenseLayer>,
    #[serde(default)]
    pub scaler: Option<Scaler>,
}

impl NeuralNetwork {
    pub fn new(layers: Vec<DenseLayer>, scaler: Option<Scaler>) -> Self {
        Self { layers, scaler }
    }

    /// Check that layer widths chain from `FEATURE_COUNT` inputs down to one output
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.layers.is_empty() {
            return Err(ModelError::EmptyNetwork);
        }

        let mut width = FEATURE_COUNT;
        for (idx, layer) in self.layers.iter().enumerate() {
            if layer.weights.len() != layer.bias.len() {
                return Err(ModelError::LayerBiases {
                    layer: idx,
                    weights: layer.weights.len(),
                    biases: layer.bias.len(),
                });
            }
            if let Some(row) = layer.weights.iter().find(|row| row.len() != width) {
                return Err(ModelError::LayerInputs {
                    layer: idx,
                    expected: width,
                    actual: row.len(),
                });
            }
            if !all_finite(&layer.bias) || !layer.weights.iter().all(|row| all_finite(row)) {
                return Err(ModelError::NonFinite("network weights"));
            }
            width = layer.weights.len();
        }

        if width != 1 {
            return Err(ModelError::OutputWidth(width));
        }
        if let Some(scaler) = &self.scaler {
            scaler.validate()?;
        }
        Ok(())
    }

    pub fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.layers
            .iter()
            .fold(input.to_vec(), |activations, layer| layer.forward(&activations))
    }
}

impl Classifier for NeuralNetwork {
    fn kind(&self) -> ModelKind {
        ModelKind::Network
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let input = scaled_input(self.scaler.as_ref(), features);
        let output = self.forward(&input);
        let score = output.first().copied().ok_or(PredictionError::NonFinite)?;
        to_probability(score)
    }
}
