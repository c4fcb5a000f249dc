mod error;
mod events;
pub mod field;
mod registry;

pub use error::{
    BAD_INPUT_MESSAGE, ErrorStatus, ExtractionError, PATTERN_MESSAGE, REQUIRED_MESSAGE,
};
pub use events::{EditorAction, EventBindings, FieldEvent, ListenerHandle};
pub use field::{TemplateVariables, TimeFieldEditor, compute_template_variables};
pub use registry::{EditorFactory, FieldEditor, FieldEditorRegistry, RegistryError};
