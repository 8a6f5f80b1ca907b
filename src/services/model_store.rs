use crate::config::ModelSettings;
use crate::core::{demo_model, interpret, Classifier, DemoSettings, LinearModel, ModelError, NeuralNetwork, PredictionError};
use crate::models::{FeatureVector, ModelKind, Verdict};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading the classifier at startup
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid network model {path}: {source}")]
    NetworkFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid linear model {path}: {source}")]
    LinearFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("model {path} rejected: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    #[error("no model file found and the demo model is disabled")]
    NoModelAvailable,
}

/// Loads the classifier, trying each source in turn
///
/// 1. Neural network (JSON)
/// 2. Linear model (TOML)
/// 3. Synthetic demo model, when enabled
///
/// A missing file moves on to the next source. A file that exists but
/// cannot be read or fails validation stops the chain with an error.
#[derive(Debug, Clone)]
pub struct ModelStore {
    network_path: PathBuf,
    linear_path: PathBuf,
    demo: Option<DemoSettings>,
}

impl ModelStore {
    pub fn new(network_path: impl Into<PathBuf>, linear_path: impl Into<PathBuf>, demo: Option<DemoSettings>) -> Self {
        Self {
            network_path: network_path.into(),
            linear_path: linear_path.into(),
            demo,
        }
    }

    pub fn from_settings(settings: &ModelSettings) -> Self {
        Self::new(&settings.network_path, &settings.linear_path, settings.demo())
    }

    /// Run the fallback chain
    pub fn load(&self) -> Result<Arc<dyn Classifier>, ModelLoadError> {
        if self.network_path.exists() {
            let network = load_network(&self.network_path)?;
            tracing::info!("Loaded network model from {}", self.network_path.display());
            return Ok(Arc::new(network));
        }
        tracing::info!(
            "Network model {} not found, looking for a linear model",
            self.network_path.display()
        );

        if self.linear_path.exists() {
            let linear = load_linear(&self.linear_path)?;
            tracing::info!("Loaded linear model from {}", self.linear_path.display());
            return Ok(Arc::new(linear));
        }
        tracing::info!(
            "Linear model {} not found, building the demo model",
            self.linear_path.display()
        );

        match &self.demo {
            Some(settings) => {
                let model = demo_model(settings);
                tracing::warn!(
                    "Serving the synthetic demo model (seed {}, {} samples); predictions are not meaningful",
                    settings.seed,
                    settings.samples
                );
                Ok(Arc::new(model))
            }
            None => Err(ModelLoadError::NoModelAvailable),
        }
    }

    /// Run the fallback chain, logging and absorbing any failure
    pub fn load_handle(&self) -> ModelHandle {
        match self.load() {
            Ok(classifier) => ModelHandle::ready(classifier),
            Err(e) => {
                tracing::error!("Failed to load the prediction model: {}", e);
                ModelHandle::unavailable()
            }
        }
    }
}

fn read_model_file(path: &Path) -> Result<String, ModelLoadError> {
    fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse and validate a JSON network model
pub fn load_network(path: &Path) -> Result<NeuralNetwork, ModelLoadError> {
    let content = read_model_file(path)?;
    let network: NeuralNetwork =
        serde_json::from_str(&content).map_err(|source| ModelLoadError::NetworkFormat {
            path: path.to_path_buf(),
            source,
        })?;
    network.validate().map_err(|source| ModelLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(network)
}

/// Parse and validate a TOML linear model
pub fn load_linear(path: &Path) -> Result<LinearModel, ModelLoadError> {
    let content = read_model_file(path)?;
    let linear: LinearModel =
        toml::from_str(&content).map_err(|source| ModelLoadError::LinearFormat {
            path: path.to_path_buf(),
            source,
        })?;
    linear.validate().map_err(|source| ModelLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(linear)
}

/// Errors returned when asking the active model for a verdict
#[derive(Debug, Error)]
pub enum DiagnoseError {
    #[error("the prediction model is not loaded")]
    Unavailable,

    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

/// Shared handle on the classifier chosen at startup
#[derive(Debug, Clone, Default)]
pub struct ModelHandle {
    classifier: Option<Arc<dyn Classifier>>,
}

impl ModelHandle {
    pub fn ready(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier: Some(classifier),
        }
    }

    pub fn unavailable() -> Self {
        Self { classifier: None }
    }

    pub fn is_ready(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn kind(&self) -> Option<ModelKind> {
        self.classifier.as_ref().map(|c| c.kind())
    }

    /// Score the features and interpret the probability
    pub fn diagnose(&self, features: &FeatureVector) -> Result<(Verdict, ModelKind), DiagnoseError> {
        let classifier = self.classifier.as_ref().ok_or(DiagnoseError::Unavailable)?;
        tracing::debug!(
            "Scoring measurements: {:?}",
            features.named().collect::<Vec<_>>()
        );
        let probability = classifier.predict_proba(features)?;
        let verdict = interpret(probability);

        tracing::info!(
            "Prediction: {:?} (p={:.4}, model={})",
            verdict.diagnosis,
            probability,
            classifier.kind()
        );

        Ok((verdict, classifier.kind()))
    }
}
