mod csv;
mod json;
mod text;

use serde::Deserialize;

use crate::characteristics::CalibrationEntry;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

pub trait Formatter: Send {
    fn format(&self, entry: &CalibrationEntry) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// Format a whole table, header first when the format has one
pub fn render(formatter: &dyn Formatter, entries: &[CalibrationEntry]) -> Vec<String> {
    formatter
        .header()
        .map(str::to_string)
        .into_iter()
        .chain(entries.iter().map(|e| formatter.format(e)))
        .collect()
}
