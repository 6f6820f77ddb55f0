//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::classify::{classify, Classification};
use crate::detector::detect;
use crate::error::Result;
use crate::records::{find_records, RecordsLocation};
use crate::types::{format_path, parse_path, Path};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path as FsPath;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Detect { file } => {
                let body = load_body(file)?;
                let detection = detect(&body);
                let report = DetectReport {
                    records: detection.records.as_ref().map(RecordsReport::from),
                    pagination: detection.pagination,
                };
                self.emit(&report, &render_detect(&report))
            }
            Commands::Records { file } => {
                let body = load_body(file)?;
                let report = RecordsOnlyReport {
                    records: find_records(&body).as_ref().map(RecordsReport::from),
                };
                self.emit(&report, &render_records(report.records.as_ref()))
            }
            Commands::Classify { file, records_path } => {
                let body = load_body(file)?;
                let exclude = records_path
                    .as_deref()
                    .map(parse_path)
                    .transpose()?;
                let report = ClassifyReport {
                    pagination: classify(&body, exclude.as_deref()),
                };
                self.emit(&report, &render_pagination(report.pagination.as_ref()))
            }
        }
    }

    /// Print a report in the requested format
    fn emit<T: Serialize>(&self, report: &T, pretty: &str) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
            OutputFormat::Pretty => println!("{pretty}"),
        }
        Ok(())
    }
}

// ============================================================================
// Reports
// ============================================================================

/// Serializable summary of a located records collection
#[derive(Debug, Serialize)]
struct RecordsReport {
    path: Path,
    count: usize,
}

impl From<&RecordsLocation<'_>> for RecordsReport {
    fn from(location: &RecordsLocation<'_>) -> Self {
        Self {
            path: location.path.clone(),
            count: location.len(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DetectReport {
    records: Option<RecordsReport>,
    pagination: Option<Classification>,
}

#[derive(Debug, Serialize)]
struct RecordsOnlyReport {
    records: Option<RecordsReport>,
}

#[derive(Debug, Serialize)]
struct ClassifyReport {
    pagination: Option<Classification>,
}

// ============================================================================
// Pretty Rendering
// ============================================================================

fn render_detect(report: &DetectReport) -> String {
    format!(
        "{}\n{}",
        render_records(report.records.as_ref()),
        render_pagination(report.pagination.as_ref())
    )
}

fn render_records(records: Option<&RecordsReport>) -> String {
    match records {
        Some(r) => format!("records:  {} ({} records)", format_path(&r.path), r.count),
        None => "records:  not found".to_string(),
    }
}

fn render_pagination(pagination: Option<&Classification>) -> String {
    match pagination {
        Some(c) => {
            let next = c
                .next_key
                .as_deref()
                .map_or_else(|| "-".to_string(), format_path);
            format!("paradigm: {}\nnext key: {next}", c.paradigm)
        }
        None => "paradigm: not found".to_string(),
    }
}

// ============================================================================
// Input Loading
// ============================================================================

/// Load and parse a JSON response body from a file, or stdin for `-`
fn load_body(path: &FsPath) -> Result<Value> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !path.exists() {
            return Err(crate::error::Error::file_not_found(
                path.display().to_string(),
            ));
        }
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Paradigm;
    use crate::types::PathSegment;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_load_body_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"data": [{{"id": 1}}], "offset": 0, "limit": 1}}"#).unwrap();

        let body = load_body(file.path()).unwrap();
        assert_eq!(body["offset"], json!(0));
    }

    #[test]
    fn test_load_body_missing_file() {
        let err = load_body(FsPath::new("/nonexistent/response.json")).unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_load_body_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = load_body(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse JSON"));
    }

    #[test]
    fn test_render_records_not_found() {
        assert_eq!(render_records(None), "records:  not found");
    }

    #[test]
    fn test_render_pagination_with_next_key() {
        let classification = Classification {
            paradigm: Paradigm::Cursor,
            next_key: Some(vec![
                PathSegment::key("cursors"),
                PathSegment::key("next"),
            ]),
        };
        assert_eq!(
            render_pagination(Some(&classification)),
            "paradigm: cursor\nnext key: cursors.next"
        );
    }

    #[test]
    fn test_render_pagination_counters() {
        let classification = Classification {
            paradigm: Paradigm::PageNumber,
            next_key: None,
        };
        assert_eq!(
            render_pagination(Some(&classification)),
            "paradigm: page_number\nnext key: -"
        );
    }
}
