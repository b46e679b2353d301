pub mod json;
pub mod text;

use crate::error::ScorecardError;
use crate::types::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String, ScorecardError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScorecardError::Json),
        OutputFormat::Text => Ok(text::to_text(report)),
    }
}
