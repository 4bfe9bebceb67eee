use std::path::Path;

use colref_core::{ColrefError, ErrorInfo};

use crate::report::RefinementReport;

/// Serialises a refinement report into indented JSON.
pub fn report_to_json(report: &RefinementReport) -> Result<String, ColrefError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| ColrefError::Serde(ErrorInfo::new("report-serialize", err.to_string())))
}

/// Deserialises a refinement report from JSON text.
pub fn report_from_json(json: &str) -> Result<RefinementReport, ColrefError> {
    serde_json::from_str(json)
        .map_err(|err| ColrefError::Serde(ErrorInfo::new("report-deserialize", err.to_string())))
}

/// Writes a refinement report to disk as JSON.
pub fn write_report(path: &Path, report: &RefinementReport) -> Result<(), ColrefError> {
    let json = report_to_json(report)?;
    std::fs::write(path, json).map_err(|err| {
        ColrefError::Io(
            ErrorInfo::new("report-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}
