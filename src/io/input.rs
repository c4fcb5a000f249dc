use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Parse a JSON document.
pub fn parse_document_str(contents: &str) -> Result<Value> {
    serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
}

/// Resolve a document spec: `-` reads stdin, an existing path reads the
/// file, anything else is parsed as inline JSON.
pub fn load_document(spec: &str) -> Result<Value> {
    if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return parse_document_str(&buffer).context("stdin does not contain valid JSON");
    }
    let path = Path::new(spec);
    if path.is_file() {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return parse_document_str(&contents)
            .with_context(|| format!("{} does not contain valid JSON", path.display()));
    }
    parse_document_str(spec).context("argument is neither a readable file nor inline JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn parses_inline_json() {
        let value = load_document(r#"{"identifier": "opening"}"#).unwrap();
        assert_eq!(value, json!({"identifier": "opening"}));
    }

    #[test]
    fn reads_files() {
        let path = std::env::temp_dir().join(format!(
            "timefield-input-{}.json",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::write(&path, r#"{"fieldValue": 60}"#).unwrap();
        let value = load_document(path.to_str().unwrap()).unwrap();
        assert_eq!(value["fieldValue"], 60);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn rejects_garbage() {
        assert!(load_document("definitely not json").is_err());
    }
}
