use rfmodel::characteristics::{CalibrationEntry, calibration_table, validate_table};
use rfmodel::output::{OutputFormat, create_formatter, render};
use rfmodel::{EmitterType, ReportConfig};

#[test]
fn test_table_validates() {
    validate_table().expect("calibration table should be consistent");
}

#[test]
fn test_csv_report_from_config() {
    let config = ReportConfig::from_toml_str(
        r#"
        format = "csv"
        short_range_only = true
        "#,
    )
    .unwrap();

    let entries: Vec<CalibrationEntry> = config
        .selected_emitters()
        .into_iter()
        .map(CalibrationEntry::new)
        .collect();
    let formatter = create_formatter(config.format, config.verbose);
    let lines = render(formatter.as_ref(), &entries);

    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("emitter,"));
    assert_eq!(lines[1], "WLAN2,16.0,35.0,300.0,2,true");
    assert!(lines[1..].iter().all(|l| l.ends_with(",true")));
}

#[test]
fn test_json_report_lines_parse() {
    let formatter = create_formatter(OutputFormat::Json, false);
    let lines = render(formatter.as_ref(), &calibration_table());
    assert_eq!(lines.len(), EmitterType::ALL.len());

    for (line, t) in lines.iter().zip(EmitterType::ALL) {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        let name = value["emitter"].as_str().unwrap();
        assert_eq!(name.parse::<EmitterType>().unwrap(), t);
    }
}
