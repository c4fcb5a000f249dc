use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use serde_json::{Value, json};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use timefield::{
    FieldDefinition, FieldValue, InputMode, OutputDestination, OutputOptions, TimeFieldEditor,
    TimeFieldUI, UiOptions, load_document, parse_field_definition, parse_field_value,
};

const DEFAULT_IDENTIFIER: &str = "time";
const DEFAULT_LOG_FILTER: &str = "info";
const CHECK_LOG_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(
    name = "timefield",
    version,
    about = "Edit a time-of-day field in the terminal and print it as seconds since midnight"
)]
struct Cli {
    /// Field definition: file path, inline JSON, or "-" for stdin
    #[arg(short = 'd', long = "definition", value_name = "SPEC")]
    definition: Option<String>,

    /// Stored field payload ({"fieldValue": ...}): file path, inline JSON, or "-" for stdin
    #[arg(long = "field", value_name = "SPEC", conflicts_with = "value")]
    field: Option<String>,

    /// Initial value in seconds since midnight
    #[arg(short = 'v', long = "value", value_name = "SECONDS")]
    value: Option<u32>,

    /// Mark the field as required
    #[arg(short = 'r', long = "required")]
    required: bool,

    /// Enter and display seconds
    #[arg(long = "use-seconds")]
    use_seconds: bool,

    /// Input control to use: auto, native (segmented) or text
    #[arg(long = "input-mode", value_name = "MODE", default_value_t = InputMode::Auto)]
    input_mode: InputMode,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Output destinations ("-" writes to stdout). Accepts multiple values per flag use.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Validate TEXT as if typed into the field, print the result and exit
    #[arg(long = "check", value_name = "TEXT", allow_hyphen_values = true)]
    check: Option<String>,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(&cli)?;

    let definition = load_definition(&cli)?;
    let value = load_value(&cli, &definition)?;

    if let Some(text) = cli.check.as_deref() {
        return check(definition, value, cli.input_mode, text);
    }

    let options = UiOptions::default().with_input_mode(cli.input_mode);
    let mut ui = TimeFieldUI::new(definition).with_options(options);
    if let Some(value) = value {
        ui = ui.with_value(value);
    }
    if let Some(title) = cli.title.as_ref() {
        ui = ui.with_title(title.clone());
    }
    ui = ui.with_output(build_output_options(&cli)?);

    let value = ui.run().map_err(Report::msg)?;
    debug!(%value, "field submitted");
    Ok(ExitCode::SUCCESS)
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = |fallback: &str| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };
    if let Some(path) = cli.log_file.as_ref() {
        let file = File::create(path)
            .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter(DEFAULT_LOG_FILTER))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.check.is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter(CHECK_LOG_FILTER))
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn load_definition(cli: &Cli) -> Result<FieldDefinition> {
    let mut definition = match cli.definition.as_deref() {
        Some(spec) => {
            let document = load_document(spec)
                .map_err(Report::msg)
                .wrap_err("failed to load field definition")?;
            parse_field_definition(&document).map_err(Report::msg)?
        }
        None => FieldDefinition::time(DEFAULT_IDENTIFIER),
    };
    if cli.required {
        definition.is_required = true;
    }
    if cli.use_seconds {
        definition.field_settings.use_seconds = true;
    }
    Ok(definition)
}

fn load_value(cli: &Cli, definition: &FieldDefinition) -> Result<Option<FieldValue>> {
    if let Some(seconds) = cli.value {
        return FieldValue::from_seconds(seconds)
            .map(Some)
            .map_err(|err| eyre!("invalid --value: {err}"));
    }
    let Some(spec) = cli.field.as_deref() else {
        return Ok(None);
    };
    if spec == "-" && cli.definition.as_deref() == Some("-") {
        return Err(eyre!(
            "cannot read definition and field from stdin simultaneously"
        ));
    }
    let document = load_document(spec)
        .map_err(Report::msg)
        .wrap_err("failed to load field payload")?;
    let value = parse_field_value(&document).map_err(Report::msg)?;
    if let Some(target) = document
        .get("fieldDefinitionIdentifier")
        .and_then(Value::as_str)
        .filter(|target| *target != definition.identifier)
    {
        warn!(
            payload = target,
            definition = %definition.identifier,
            "field payload targets a different definition"
        );
    }
    Ok(Some(value))
}

fn check(
    definition: FieldDefinition,
    value: Option<FieldValue>,
    mode: InputMode,
    text: &str,
) -> Result<ExitCode> {
    let probe = mode.probe();
    let mut editor = TimeFieldEditor::new(definition, value, probe.as_ref());
    editor.set_input_text(text);
    editor.validate();

    let report = json!({
        "errorStatus": editor.error_status(),
        "fieldValue": editor.field_value(),
        "templateVariables": editor.template_variables(),
    });
    let rendered =
        serde_json::to_string_pretty(&report).wrap_err("failed to serialize check result")?;
    println!("{rendered}");

    if editor.error_status().is_invalid() {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn build_output_options(cli: &Cli) -> Result<OutputOptions> {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            return Err(eyre!("output destination cannot be empty"));
        }
        if raw == "-" {
            destinations.push(OutputDestination::Stdout);
        } else {
            destinations.push(OutputDestination::file(Path::new(raw)));
        }
    }
    if destinations.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }
    Ok(OutputOptions::new()
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations))
}
