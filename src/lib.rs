#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod io;
mod presentation;
mod runtime;

pub use app::UiOptions;
pub use domain::{
    FieldDefinition, FieldPayload, FieldSettings, FieldValue, Precision, SECONDS_PER_DAY,
    TIME_FIELD_TYPE, TimeOfDay, TimeRangeError, parse_field_definition, parse_field_value,
};
pub use form::field::components::{
    ControlKind, DisplaySegment, InputControl, SegmentedTimeControl, TIME_PATTERN,
    TextTimeControl, ValidityState, matches_time_pattern,
};
pub use form::field::strategy::{
    ManualTimeInput, NativeTimeInput, TimeInputStrategy, strategy_for,
};
pub use form::{
    BAD_INPUT_MESSAGE, EditorAction, EditorFactory, ErrorStatus, EventBindings, ExtractionError,
    FieldEditor, FieldEditorRegistry, FieldEvent, ListenerHandle, PATTERN_MESSAGE,
    REQUIRED_MESSAGE, RegistryError, TemplateVariables, TimeFieldEditor,
    compute_template_variables,
};
pub use io::{
    OutputDestination, OutputOptions, emit, load_document, parse_document_str,
    submission_document,
};
pub use presentation::{
    CapabilityProbe, FixedCapability, InputMode, ParseInputModeError, TIME_INPUT_ENV,
    TerminalProbe, UiContext, draw,
};
pub use runtime::TimeFieldUI;

pub mod prelude {
    pub use super::{
        ErrorStatus, FieldDefinition, FieldValue, InputMode, TimeFieldEditor, TimeFieldUI,
        UiOptions,
    };
}
