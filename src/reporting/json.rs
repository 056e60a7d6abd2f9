use crate::reporting::model::ExtractionReport;
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    metadata: Metadata,
    result: &'a ExtractionReport,
}

#[derive(Serialize)]
struct Metadata {
    tool: String,
    version: String,
    run_date: String,
    report_format: String,
}

pub fn render(report: &ExtractionReport) -> anyhow::Result<String> {
    let doc = Report {
        metadata: Metadata {
            tool: "blindpass".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            run_date: chrono::Utc::now().to_rfc3339(),
            report_format: "application/json".to_string(),
        },
        result: report,
    };

    let json = serde_json::to_string_pretty(&doc)?;
    Ok(json)
}
