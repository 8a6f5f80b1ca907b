use crate::models::{Diagnosis, Verdict};

/// Probabilities strictly above this are reported as malignant
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Turn a malignancy probability into a verdict
///
/// Confidence is the probability of whichever class was chosen, so it is
/// always at least 0.5.
pub fn interpret(probability: f64) -> Verdict {
    if probability > DECISION_THRESHOLD {
        Verdict {
            diagnosis: Diagnosis::Malignant,
            probability,
            confidence: probability,
        }
    } else {
        Verdict {
            diagnosis: Diagnosis::Benign,
            probability,
            confidence: 1.0 - probability,
        }
    }
}
