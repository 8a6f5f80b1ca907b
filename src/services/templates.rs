use crate::models::{Verdict, FEATURE_LABELS, FEATURE_NAMES};
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const RESULT_TEMPLATE: &str = include_str!("../../templates/result.html");

/// Name shown on the result page for the screening model
pub const CANCER_MODEL_NAME: &str = "Cancer du Sein";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}

#[derive(Debug, Serialize)]
struct FormField {
    name: &'static str,
    label: &'static str,
}

/// Renders the HTML pages from the templates compiled into the binary
#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("index.html", INDEX_TEMPLATE),
            ("result.html", RESULT_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    /// Form page with the measurement fields and the chat widget
    pub fn render_index(&self) -> Result<String, TemplateError> {
        let fields: Vec<FormField> = FEATURE_NAMES
            .iter()
            .zip(FEATURE_LABELS.iter())
            .map(|(name, label)| FormField { name: *name, label: *label })
            .collect();

        let mut context = Context::new();
        context.insert("fields", &fields);
        Ok(self.tera.render("index.html", &context)?)
    }

    /// Result page for a verdict
    pub fn render_result(&self, verdict: &Verdict, model_name: &str) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("result", &verdict.summary());
        context.insert("model", model_name);
        context.insert("diagnosis", &verdict.diagnosis);
        Ok(self.tera.render("result.html", &context)?)
    }
}
