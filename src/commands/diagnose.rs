use anyhow::{Context, Result};
use std::io::Write;

use crate::classifier::Verdict;
use crate::cli::RenderSettings;
use crate::handler::{handle, DiagnosisRequest, DiagnosisResponse};
use crate::io::{self, create_writer};

/// Run one request through the classifier and render the response.
pub fn handle_diagnose(request: &DiagnosisRequest, settings: &RenderSettings) -> Result<Verdict> {
    let response = handle(request);
    let destination = io::open_destination(settings.output.as_deref()).with_context(|| {
        format!(
            "Failed to open output file {}",
            settings
                .output
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;
    render_response(&response, settings, destination)?;

    if let Some(path) = &settings.output {
        log::info!("Wrote diagnosis to {}", path.display());
    }
    Ok(response.result.verdict())
}

pub fn render_response<'a>(
    response: &DiagnosisResponse,
    settings: &RenderSettings,
    destination: Box<dyn Write + 'a>,
) -> Result<()> {
    let mut writer = create_writer(
        settings.format,
        destination,
        settings.options,
        settings.formatting,
    );
    writer.write_response(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::FormattingConfig;
    use crate::io::{OutputFormat, ReportOptions};
    use tempfile::TempDir;

    fn settings(format: OutputFormat, output: Option<std::path::PathBuf>) -> RenderSettings {
        RenderSettings {
            format,
            output,
            options: ReportOptions::default(),
            formatting: FormattingConfig::plain(),
        }
    }

    #[test]
    fn writes_report_to_file_and_returns_verdict() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("result.json");
        let request = DiagnosisRequest::from_codes("a", "b", "k", "b").unwrap();

        let verdict = handle_diagnose(&request, &settings(OutputFormat::Json, Some(path.clone()))).unwrap();
        assert_eq!(verdict, Verdict::Safe);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["result"]["verdict"], "safe");
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("result.json");
        let request = DiagnosisRequest::from_codes("a", "b", "k", "b").unwrap();
        let err = handle_diagnose(&request, &settings(OutputFormat::Json, Some(path))).unwrap_err();
        assert!(err.to_string().contains("Failed to open output file"));
    }
}
