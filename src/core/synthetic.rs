//! Seeded synthetic data and the logistic trainer behind the demo model.
//!
//! The demo model only exists so the service can answer when no trained
//! model file is deployed. Its predictions carry no medical meaning.

use crate::core::classifier::{sigmoid, LinearModel, Scaler};
use crate::models::{ModelKind, FEATURE_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Features that carry class signal; the rest are noise
pub const INFORMATIVE_FEATURES: usize = 4;

/// Labeled samples produced by `make_classification`
#[derive(Debug, Clone)]
pub struct SyntheticDataset {
    pub samples: Vec<[f64; FEATURE_COUNT]>,
    pub labels: Vec<u8>,
}

impl SyntheticDataset {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Gradient descent parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub l2: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 300,
            learning_rate: 0.5,
            l2: 1e-3,
        }
    }
}

/// Demo model parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoSettings {
    pub seed: u64,
    pub samples: usize,
    pub training: TrainingConfig,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            samples: 100,
            training: TrainingConfig::default(),
        }
    }
}

/// Standard normal draw (Box-Muller)
fn standard_normal(rng: &mut StdRng) -> f64 {
    // 1 - u keeps the log argument in (0, 1]
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Generate a balanced two-class dataset
///
/// Class 0 sits around a random ±1 centroid on the informative features,
/// class 1 around its negation. Every feature gets unit gaussian noise.
/// The same seed always yields the same dataset.
pub fn make_classification(n_samples: usize, seed: u64) -> SyntheticDataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut centroid = [0.0; FEATURE_COUNT];
    for c in centroid.iter_mut().take(INFORMATIVE_FEATURES) {
        *c = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    }

    let mut samples = Vec::with_capacity(n_samples);
    let mut labels = Vec::with_capacity(n_samples);

    for i in 0..n_samples {
        let label = (i % 2) as u8;
        let sign = if label == 0 { 1.0 } else { -1.0 };

        let mut sample = [0.0; FEATURE_COUNT];
        for (x, c) in sample.iter_mut().zip(&centroid) {
            *x = sign * c + standard_normal(&mut rng);
        }

        samples.push(sample);
        labels.push(label);
    }

    SyntheticDataset { samples, labels }
}

/// Fit a standardized logistic regression with full-batch gradient descent
pub fn train_logistic(dataset: &SyntheticDataset, config: &TrainingConfig) -> LinearModel {
    let scaler = Scaler::fit(&dataset.samples);
    let inputs: Vec<Vec<f64>> = dataset
        .samples
        .iter()
        .map(|sample| scaler.transform(sample))
        .collect();

    let n = dataset.len().max(1) as f64;
    let mut weights = vec![0.0; FEATURE_COUNT];
    let mut bias = 0.0;

    for _ in 0..config.epochs {
        let mut grad_w = vec![0.0; FEATURE_COUNT];
        let mut grad_b = 0.0;

        for (z, label) in inputs.iter().zip(&dataset.labels) {
            let linear = bias + z.iter().zip(&weights).map(|(x, w)| x * w).sum::<f64>();
            let error = sigmoid(linear) - f64::from(*label);
            for (g, x) in grad_w.iter_mut().zip(z) {
                *g += error * x;
            }
            grad_b += error;
        }

        for (w, g) in weights.iter_mut().zip(&grad_w) {
            *w -= config.learning_rate * (g / n + config.l2 * *w);
        }
        bias -= config.learning_rate * grad_b / n;
    }

    LinearModel::new(bias, weights, Some(scaler))
}

/// Train the fallback model used when no model file is deployed
pub fn demo_model(settings: &DemoSettings) -> LinearModel {
    let dataset = make_classification(settings.samples, settings.seed);
    tracing::debug!(
        "Training demo model on {} synthetic samples (seed {})",
        dataset.len(),
        settings.seed
    );
    train_logistic(&dataset, &settings.training).with_kind(ModelKind::Demo)
}
