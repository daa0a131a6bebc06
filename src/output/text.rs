use super::Formatter;
use crate::characteristics::{CalibrationEntry, calibration_group};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &CalibrationEntry) -> String {
        let rf = &entry.characteristics;
        let line = format!(
            "{:<8} gps: {:>5.1} m  range: {:>6.1} m .. {:>9.1} m  min count: {:>2}{}",
            entry.emitter,
            rf.required_gps_accuracy,
            rf.minimum_range,
            rf.maximum_range,
            rf.min_count,
            if entry.short_range { "  short range" } else { "" }
        );

        if !self.verbose {
            return line;
        }

        let shared: Vec<String> = calibration_group(entry.emitter)
            .into_iter()
            .filter(|&t| t != entry.emitter)
            .map(|t| t.to_string())
            .collect();
        if shared.is_empty() {
            line
        } else {
            format!("{}  [shared with {}]", line, shared.join(", "))
        }
    }
}
