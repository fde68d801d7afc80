//! Command-line front end for the grading engine.
//!
//! Reads a grading request as JSON, grades it and returns the report envelope.

use anyhow::{Context, Result};
use common::config::Config;
use grader::GradingJob;
use grader::options::{GradingOptions, TextMatching};
use grader::report::GradeReportResponse;
use grader::types::GradingRequest;
use std::io::Read;
use std::path::Path;

/// Reads the raw request from `path`, or from stdin when no path is given or the path is `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read grading request {}", p.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read grading request from stdin")?;
            Ok(raw)
        }
    }
}

/// Grading options derived from the short-text settings in `config`.
pub fn grading_options(config: &Config) -> GradingOptions {
    GradingOptions {
        text_matching: TextMatching {
            case_sensitive: config.short_text_case_sensitive,
            collapse_whitespace: config.short_text_collapse_whitespace,
        },
    }
}

/// Parses `raw` as a [`GradingRequest`] and grades it.
pub fn grade_json(raw: &str, options: GradingOptions) -> Result<GradeReportResponse> {
    let request: GradingRequest =
        serde_json::from_str(raw).context("grading request is not valid JSON")?;
    log::info!("grading {} question(s)", request.answers.len());

    let report = GradingJob::new(request)
        .with_options(options)
        .grade()
        .context("grading request violates the input contract")?;

    Ok(report.into())
}
