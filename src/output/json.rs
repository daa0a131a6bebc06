use serde_json::json;

use super::Formatter;
use crate::characteristics::CalibrationEntry;

/// One JSON object per line
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, entry: &CalibrationEntry) -> String {
        let rf = &entry.characteristics;
        json!({
            "emitter": entry.emitter,
            "required_gps_accuracy": rf.required_gps_accuracy,
            "minimum_range": rf.minimum_range,
            "maximum_range": rf.maximum_range,
            "min_count": rf.min_count,
            "short_range": entry.short_range,
        })
        .to_string()
    }
}
