use crate::models::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use std::collections::HashMap;
use thiserror::Error;

/// Reasons a set of measurements is rejected
///
/// Display strings are shown verbatim to the person filling the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("Erreur : Le champ '{0}' est manquant.")]
    Missing(String),

    #[error("Erreur : Le champ '{0}' doit être un nombre valide.")]
    NotANumber(String),

    #[error("Erreur : Le champ '{0}' ne peut pas être négatif.")]
    Negative(String),

    #[error("Erreur : Nombre incorrect de caractéristiques. Attendu: {expected}, Reçu: {actual}")]
    WrongCount { expected: usize, actual: usize },
}

impl FeatureError {
    /// Name of the offending field, if the error concerns a single field
    pub fn field(&self) -> Option<&str> {
        match self {
            FeatureError::Missing(f) | FeatureError::NotANumber(f) | FeatureError::Negative(f) => {
                Some(f)
            }
            FeatureError::WrongCount { .. } => None,
        }
    }
}

impl FeatureVector {
    /// Build a vector from values in `FEATURE_NAMES` order
    pub fn new(values: [f64; FEATURE_COUNT]) -> Result<Self, FeatureError> {
        for (name, value) in FEATURE_NAMES.iter().zip(values.iter()) {
            check_value(name, *value)?;
        }
        Ok(Self(values))
    }

    /// Build a vector from a slice, rejecting any length other than `FEATURE_COUNT`
    pub fn from_slice(values: &[f64]) -> Result<Self, FeatureError> {
        let values: [f64; FEATURE_COUNT] =
            values.try_into().map_err(|_| FeatureError::WrongCount {
                expected: FEATURE_COUNT,
                actual: values.len(),
            })?;
        Self::new(values)
    }
}

#[inline]
fn check_value(name: &str, value: f64) -> Result<f64, FeatureError> {
    if !value.is_finite() {
        return Err(FeatureError::NotANumber(name.to_string()));
    }
    if value < 0.0 {
        return Err(FeatureError::Negative(name.to_string()));
    }
    Ok(value)
}

/// Parse a single raw form value
pub fn parse_field(name: &str, raw: &str) -> Result<f64, FeatureError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FeatureError::NotANumber(name.to_string()))?;
    check_value(name, value)
}

/// Extract the measurements from a submitted form
///
/// Fields are checked in `FEATURE_NAMES` order and the first failure wins.
/// Unknown fields are ignored.
pub fn parse_form(form: &HashMap<String, String>) -> Result<FeatureVector, FeatureError> {
    let mut values = [0.0; FEATURE_COUNT];

    for (slot, name) in values.iter_mut().zip(FEATURE_NAMES) {
        let raw = form
            .get(name)
            .ok_or_else(|| FeatureError::Missing(name.to_string()))?;
        *slot = parse_field(name, raw)?;
    }

    Ok(FeatureVector(values))
}
