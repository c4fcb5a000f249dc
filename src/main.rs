use serde_json::json;
use timefield::{TimeFieldUI, parse_field_definition, parse_field_value};

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let definition = parse_field_definition(&json!({
        "identifier": "opening_time",
        "name": "Opening time",
        "description": "When the front desk opens, local wall-clock time.",
        "fieldTypeIdentifier": "eztime",
        "isRequired": true,
        "fieldSettings": { "useSeconds": false }
    }))?;
    let value = parse_field_value(&json!({
        "fieldDefinitionIdentifier": "opening_time",
        "fieldValue": 30600
    }))?;

    let submitted = TimeFieldUI::new(definition)
        .with_value(value)
        .with_title("TimeField Demo")
        .run()?;

    println!("{}", serde_json::to_string_pretty(&json!({ "fieldValue": submitted }))?);
    Ok(())
}
