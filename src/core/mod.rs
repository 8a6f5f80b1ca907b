// Core exports
pub mod chat;
pub mod classifier;
pub mod features;
pub mod knowledge;
pub mod synthetic;
pub mod verdict;

pub use chat::ChatResponder;
pub use classifier::{Activation, Classifier, DenseLayer, LinearModel, ModelError, NeuralNetwork, PredictionError, Scaler};
pub use features::{parse_field, parse_form, FeatureError};
pub use synthetic::{demo_model, make_classification, train_logistic, DemoSettings, TrainingConfig};
pub use verdict::interpret;
