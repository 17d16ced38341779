//! Export rendering for the request listing.
//!
//! Three formats: JSON (pass-through serialisation), CSV with a fixed column
//! set, and a Markdown digest. JSON-valued fields are deliberately excluded
//! from the CSV columns.

use std::str::FromStr;

use crate::domain::{Error, WeatherRequest};

/// Supported export formats, parsed case-insensitively from the `format`
/// query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(Error::invalid_request("format must be json|csv|md")),
        }
    }
}

/// A rendered export: body plus the content type it should be served with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// MIME type for the `Content-Type` header.
    pub content_type: &'static str,
    /// Rendered body.
    pub body: String,
}

/// Render the listing in the requested format.
///
/// # Errors
///
/// Returns [`Error::internal`] when JSON serialisation fails, which requires
/// a non-serialisable snapshot and should not happen in practice.
pub fn render(records: &[WeatherRequest], format: ExportFormat) -> Result<ExportDocument, Error> {
    match format {
        ExportFormat::Json => Ok(ExportDocument {
            content_type: "application/json",
            body: serde_json::to_string(records)
                .map_err(|err| Error::internal(format!("export serialisation failed: {err}")))?,
        }),
        ExportFormat::Csv => Ok(ExportDocument {
            content_type: "text/csv",
            body: to_csv(records),
        }),
        ExportFormat::Markdown => Ok(ExportDocument {
            content_type: "text/markdown",
            body: to_markdown(records),
        }),
    }
}

const CSV_HEADER: &str = "id,locationRaw,locationName,lat,lon,startDate,endDate,createdAt";

fn to_csv(records: &[WeatherRequest]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_owned());
    for record in records {
        let fields = [
            record.id.to_string(),
            record.location_raw.clone(),
            record.location_name.clone(),
            record.lat.to_string(),
            record.lon.to_string(),
            record.start_date.to_string(),
            record.end_date.to_string(),
            record.created_at.to_rfc3339(),
        ];
        lines.push(
            fields
                .iter()
                .map(|field| escape_csv(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Standard CSV quoting: wrap fields containing a comma, quote, or newline
/// in double quotes and double any embedded quotes.
fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

fn to_markdown(records: &[WeatherRequest]) -> String {
    let mut lines = vec!["# Weather Requests".to_owned(), String::new()];
    for record in records {
        lines.push(format!("## {}", record.location_name));
        lines.push(format!("- id: {}", record.id));
        lines.push(format!(
            "- range: {} ~ {}",
            record.start_date, record.end_date
        ));
        lines.push(format!("- lat/lon: {}, {}", record.lat, record.lon));
        if let Some(advice) = &record.ai_advice {
            lines.push(format!("- advice: {advice}"));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}
