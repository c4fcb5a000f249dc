pub mod components;
mod state;
pub mod strategy;
mod template;

pub use state::TimeFieldEditor;
pub use template::{TemplateVariables, compute_template_variables};
