use super::Formatter;
use crate::characteristics::CalibrationEntry;

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, entry: &CalibrationEntry) -> String {
        let rf = &entry.characteristics;
        format!(
            "{},{:.1},{:.1},{:.1},{},{}",
            entry.emitter,
            rf.required_gps_accuracy,
            rf.minimum_range,
            rf.maximum_range,
            rf.min_count,
            entry.short_range
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some("emitter,required_gps_accuracy_m,minimum_range_m,maximum_range_m,min_count,short_range")
    }
}
