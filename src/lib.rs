//! Rose Screen - breast cancer screening demo service
//!
//! Serves a form that scores ten tumor measurements with a pre-trained
//! classifier, and a keyword-driven awareness chat. The classifier is loaded
//! at startup from a network model file, a linear model file, or a seeded
//! synthetic demo model, in that order.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{interpret, parse_form, ChatResponder, Classifier, FeatureError};
pub use models::{Diagnosis, FeatureVector, ModelKind, Verdict, FEATURE_NAMES};
pub use services::{ModelHandle, ModelStore, PageRenderer};
