use clap::ValueEnum;

use crate::model::profile::AnalysisResult;
use crate::report::json::render_result_json;
use crate::report::text::{INVALID_TEXT_MESSAGE, render_summary_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn run_stage5(result: &AnalysisResult, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Json => render_result_json(result),
        ReportFormat::Text => Ok(match result {
            AnalysisResult::Scored(profile) => render_summary_text(profile),
            AnalysisResult::NoResult(_) => INVALID_TEXT_MESSAGE.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
