//! Response renderer
//!
//! Renders command responses and errors as plain text or JSON lines.

use std::str::FromStr;
use serde::Serialize;
use serde_json::json;
use crate::command::Response;
use crate::error::CommandError;

/// Output format for rendered lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}', expected text or json", other)),
        }
    }
}

/// Response renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render a successful response
    pub fn render(&self, response: &Response) -> String {
        match self.format {
            OutputFormat::Text => render_text(response),
            OutputFormat::Json => to_json_line(response),
        }
    }

    /// Render an error with its code and suggestion
    pub fn render_error(&self, error: &CommandError) -> String {
        match self.format {
            OutputFormat::Text => format!("error [{}]: {} (suggestion: {})", error.code(), error, error.suggestion()),
            OutputFormat::Json => to_json_line(&json!({
                "kind": "error",
                "code": error.code(),
                "message": error.to_string(),
                "suggestion": error.suggestion(),
            })),
        }
    }
}

fn render_text(response: &Response) -> String {
    match response {
        Response::Quantity { display, .. } => display.clone(),
        Response::Ratio { value } => value.to_string(),
        Response::Equality { equal } => equal.to_string(),
        Response::Units { category, units } => {
            let names: Vec<String> = units.iter().map(|u| u.to_string()).collect();
            format!("{}: {}", category, names.join(", "))
        }
        Response::Message { text } => text.to_string(),
    }
}

fn to_json_line<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| json!({ "kind": "error", "code": "INTERNAL", "message": e.to_string() }).to_string())
}
