use crate::error::Result;
use crate::models::SummaryReport;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Output formats for rendered summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed human-readable template
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

/// Render one summary using the fixed text template
pub fn render(report: &SummaryReport) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Тип тренировки: {}", report.training_type);
    let _ = writeln!(out, "Длительность: {} мин", report.duration_minutes());
    let _ = writeln!(out, "Дистанция: {:.2} км.", report.distance_km);
    let _ = writeln!(out, "Ср. скорость: {:.2} км/ч", report.speed_kmh);
    let _ = writeln!(out, "Потрачено ккал: {:.2}", report.calories);

    out
}

/// Render one summary as pretty JSON
pub fn render_json(report: &SummaryReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render several summaries in the requested format
///
/// Text blocks are each followed by a blank line. JSON output is a single
/// array terminated by a newline.
pub fn render_all(reports: &[SummaryReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|report| format!("{}\n", render(report)))
            .collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(reports)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn running_report() -> SummaryReport {
        SummaryReport {
            training_type: "Бег".to_string(),
            duration: Duration::from_secs(30 * 60),
            distance_km: 3.25,
            speed_kmh: 6.5,
            calories: 302.9145,
        }
    }

    #[test]
    fn test_render_template() {
        let text = render(&running_report());

        assert_eq!(
            text,
            "Тип тренировки: Бег\n\
             Длительность: 30 мин\n\
             Дистанция: 3.25 км.\n\
             Ср. скорость: 6.50 км/ч\n\
             Потрачено ккал: 302.91\n"
        );
    }

    #[test]
    fn test_render_fractional_minutes() {
        let mut report = running_report();
        report.duration = Duration::from_secs(22 * 60 + 30);

        assert!(render(&report).contains("Длительность: 22.5 мин\n"));
    }

    #[test]
    fn test_render_non_finite_values() {
        let mut report = running_report();
        report.speed_kmh = f64::INFINITY;
        report.calories = f64::NAN;

        let text = render(&report);
        assert!(text.contains("Ср. скорость: inf км/ч"));
        assert!(text.contains("Потрачено ккал: NaN"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&running_report()).unwrap();

        assert!(json.contains("\"training_type\": \"Бег\""));
        assert!(json.contains("\"duration_minutes\": 30.0"));
        assert!(json.contains("\"distance_km\": 3.25"));
    }

    #[test]
    fn test_render_all_text_separates_blocks() {
        let reports = vec![running_report(), running_report()];
        let text = render_all(&reports, OutputFormat::Text).unwrap();

        assert_eq!(text.matches("Тип тренировки").count(), 2);
        assert!(text.ends_with("Потрачено ккал: 302.91\n\n"));
        assert!(text.contains("302.91\n\nТип тренировки"));
    }

    #[test]
    fn test_render_all_json_array() {
        let reports = vec![running_report()];
        let json = render_all(&reports, OutputFormat::Json).unwrap();

        let parsed: Vec<SummaryReport> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].training_type, "Бег");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }
}
