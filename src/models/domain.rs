use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tumor measurements the classifier expects
pub const FEATURE_COUNT: usize = 10;

/// Form field names, in the column order the models were trained on
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "mean_radius",
    "mean_texture",
    "mean_perimeter",
    "mean_area",
    "mean_compactness",
    "mean_concavity",
    "worst_radius",
    "worst_texture",
    "worst_perimeter",
    "worst_concavity",
];

/// Labels displayed next to each form field, aligned with `FEATURE_NAMES`
pub const FEATURE_LABELS: [&str; FEATURE_COUNT] = [
    "Rayon moyen",
    "Texture moyenne",
    "Périmètre moyen",
    "Surface moyenne",
    "Compacité moyenne",
    "Concavité moyenne",
    "Rayon maximal",
    "Texture maximale",
    "Périmètre maximal",
    "Concavité maximale",
];

/// Validated measurements for a single prediction
///
/// Always holds exactly `FEATURE_COUNT` finite, non-negative values.
/// Built through `FeatureVector::new`, `FeatureVector::from_slice` or
/// `core::features::parse_form`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub(crate) [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Pairs each value with its field name
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

/// Classifier outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diagnosis {
    Benign,
    Malignant,
}

impl Diagnosis {
    /// Label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::Benign => "Bénin",
            Diagnosis::Malignant => "Malin",
        }
    }
}

/// Interpreted prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    pub diagnosis: Diagnosis,
    /// Probability of the malignant class
    pub probability: f64,
    /// Probability of the chosen class
    pub confidence: f64,
}

impl Verdict {
    /// Confidence as a percentage with one decimal, e.g. `87.3%`
    pub fn confidence_display(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }

    /// One-line summary rendered on the result page
    pub fn summary(&self) -> String {
        format!(
            "{} (Confiance: {})",
            self.diagnosis.label(),
            self.confidence_display()
        )
    }
}

/// Which loader produced the active classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Network,
    Linear,
    Demo,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Network => "network",
            ModelKind::Linear => "linear",
            ModelKind::Demo => "demo",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
