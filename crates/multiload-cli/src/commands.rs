use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use multiload_result::MultiLoadResult;
use multiload_types::DocumentId;
use serde::Serialize;
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Inspect(args) => cmd_inspect(args, cli.format),
        Command::Correlate(args) => cmd_correlate(args, cli.format),
    }
}

fn cmd_inspect(args: InspectArgs, format: OutputFormat) -> anyhow::Result<()> {
    let result = load_response(&args.path)?;
    let summary = Summary::of(&result);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            println!("Results: {} slots, {} found", summary.slots.to_string().bold(), summary.found.to_string().green());
            if summary.missing.is_empty() {
                println!("  Missing: {}", "none".green());
            } else {
                let positions: Vec<String> = summary.missing.iter().map(usize::to_string).collect();
                println!("  Missing at: {}", positions.join(", ").red());
            }
            println!("Includes: {}", summary.includes.len().to_string().bold());
            for id in &summary.includes {
                match id {
                    Some(id) => println!("  {}", id.cyan()),
                    None => println!("  {}", "(no @id)".dimmed()),
                }
            }
        }
    }
    Ok(())
}

fn cmd_correlate(args: CorrelateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let result = load_response(&args.path)?;
    let rows = correlation_rows(&result, &args.ids)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => {
            for row in &rows {
                match &row.document {
                    Some(found) => println!("{} {} → {}", "✓".green(), row.requested.yellow(), found),
                    None => println!("{} {} → {}", "✗".red(), row.requested.yellow(), "missing".red()),
                }
            }
        }
    }
    Ok(())
}

/// Read and parse a saved load response body.
pub fn load_response(path: &Path) -> anyhow::Result<MultiLoadResult> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let result: MultiLoadResult = serde_json::from_str(&data)
        .with_context(|| format!("{} is not a load response", path.display()))?;
    debug!(path = %path.display(), slots = result.len(), includes = result.includes().len(), "loaded response");
    Ok(result)
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Summary {
    pub slots: usize,
    pub found: usize,
    pub missing: Vec<usize>,
    /// `@id` of each include, in the order received.
    pub includes: Vec<Option<String>>,
}

impl Summary {
    pub fn of(result: &MultiLoadResult) -> Self {
        Self {
            slots: result.len(),
            found: result.found_count(),
            missing: result.missing_positions(),
            includes: result
                .includes()
                .iter()
                .map(|doc| doc.id().map(DocumentId::into_string))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CorrelationRow {
    pub requested: String,
    /// `@id` of the document in this slot; `"?"` when it carries none.
    pub document: Option<String>,
}

pub fn correlation_rows(result: &MultiLoadResult, ids: &[String]) -> anyhow::Result<Vec<CorrelationRow>> {
    let pairs = result.correlate(ids)?;
    Ok(pairs
        .into_iter()
        .map(|(requested, slot)| CorrelationRow {
            requested: requested.clone(),
            document: slot.map(|doc| {
                doc.id()
                    .map(DocumentId::into_string)
                    .unwrap_or_else(|| "?".into())
            }),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BODY: &str = r#"{
        "Results": [
            {"Name": "Oren", "@metadata": {"@id": "users/1"}},
            null,
            {"Name": "Ayende"}
        ],
        "Includes": [
            {"Total": 5, "@metadata": {"@id": "orders/1"}},
            {"Total": 7}
        ]
    }"#;

    fn write_temp(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_and_summarize() {
        let file = write_temp(BODY);
        let result = load_response(file.path()).unwrap();
        assert_eq!(
            Summary::of(&result),
            Summary {
                slots: 3,
                found: 2,
                missing: vec![1],
                includes: vec![Some("orders/1".into()), None],
            }
        );
    }

    #[test]
    fn load_missing_file_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_response(&path).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn load_rejects_non_response() {
        let file = write_temp("[1, 2, 3]");
        assert!(load_response(file.path()).is_err());
    }

    #[test]
    fn correlate_rows() {
        let file = write_temp(BODY);
        let result = load_response(file.path()).unwrap();
        let ids = vec!["users/1".to_string(), "users/2".to_string(), "users/3".to_string()];
        let rows = correlation_rows(&result, &ids).unwrap();
        assert_eq!(
            rows,
            vec![
                CorrelationRow { requested: "users/1".into(), document: Some("users/1".into()) },
                CorrelationRow { requested: "users/2".into(), document: None },
                CorrelationRow { requested: "users/3".into(), document: Some("?".into()) },
            ]
        );
    }

    #[test]
    fn correlate_length_mismatch_is_error() {
        let file = write_temp(BODY);
        let result = load_response(file.path()).unwrap();
        let err = correlation_rows(&result, &["users/1".to_string()]).unwrap_err();
        assert!(err.to_string().contains("requested 1 ids"));
    }

    #[test]
    fn summary_serializes() {
        let summary = Summary::of(&MultiLoadResult::default());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["slots"], 0);
        assert_eq!(json["missing"], serde_json::json!([]));
    }
}
