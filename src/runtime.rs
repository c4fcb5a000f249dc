use anyhow::{Context, Result};
use serde_json::Value;

use crate::{
    app::{App, UiOptions},
    domain::{FieldDefinition, FieldValue},
    form::FieldEditorRegistry,
    io::{self, OutputOptions},
};

/// Interactive editor for a single field.
#[derive(Debug)]
pub struct TimeFieldUI {
    definition: FieldDefinition,
    value: Option<FieldValue>,
    title: Option<String>,
    options: UiOptions,
    output: Option<OutputOptions>,
    registry: FieldEditorRegistry,
}

impl TimeFieldUI {
    pub fn new(definition: FieldDefinition) -> Self {
        Self {
            definition,
            value: None,
            title: None,
            options: UiOptions::default(),
            output: None,
            registry: FieldEditorRegistry::with_defaults(),
        }
    }

    pub fn with_value(mut self, value: FieldValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_registry(mut self, registry: FieldEditorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Runs the terminal UI and returns the submitted field value, `null`
    /// for an empty field.
    pub fn run(self) -> Result<Value> {
        let TimeFieldUI {
            definition,
            value,
            title,
            options,
            output,
            registry,
        } = self;

        let probe = options.input_mode.probe();
        let editor = registry
            .create(definition, value, probe.as_ref())
            .context("failed to create field editor")?;
        let title =
            title.unwrap_or_else(|| format!("Edit {}", editor.definition().display_label()));

        let mut app = App::new(title, editor, options);
        let value = app.run()?;

        if let Some(output) = output {
            io::emit(&io::submission_document(&value), &output)?;
        }
        Ok(value)
    }
}
