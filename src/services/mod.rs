// Service exports
pub mod model_store;
pub mod templates;

pub use model_store::{load_linear, load_network, DiagnoseError, ModelHandle, ModelLoadError, ModelStore};
pub use templates::{PageRenderer, TemplateError, CANCER_MODEL_NAME};
