use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use rfmodel::assess::{Observation, assess};
use rfmodel::characteristics::{CalibrationEntry, validate_table};
use rfmodel::output::{OutputFormat, create_formatter, render};
use rfmodel::{EmitterType, ReportConfig};

#[derive(Parser, Debug)]
#[command(name = "rfmodel")]
#[command(about = "Inspect RF emitter calibration constants", long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the calibration table
    Table {
        /// TOML report configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (overrides config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Only show short-range emitter types
        #[arg(long)]
        short_range_only: bool,

        /// Show which emitter types share a calibration record
        #[arg(long)]
        details: bool,
    },

    /// Print the calibration of specific emitter types
    Show {
        /// Emitter types (e.g. "WLAN2", "lte", "nr-fr2")
        #[arg(required = true, value_parser = clap::value_parser!(EmitterType))]
        emitters: Vec<EmitterType>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check an observation against an emitter type's calibration
    Check {
        #[arg(value_parser = clap::value_parser!(EmitterType))]
        emitter: EmitterType,

        /// Reported GPS accuracy in meters
        #[arg(long)]
        gps_accuracy: Option<f32>,

        /// Estimated coverage radius in meters
        #[arg(long)]
        radius: Option<f64>,

        /// Number of emitters seen together
        #[arg(long)]
        count: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify the invariants of every calibration record
    Validate,
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        2 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Table {
            config,
            format,
            short_range_only,
            details,
        } => {
            let mut report = match config {
                Some(ref path) => ReportConfig::load(path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => ReportConfig::default(),
            };
            if let Some(format) = format {
                report.format = format;
            }
            report.short_range_only |= short_range_only;
            report.verbose |= details;

            let entries: Vec<CalibrationEntry> = report
                .selected_emitters()
                .into_iter()
                .map(CalibrationEntry::new)
                .collect();
            print_entries(report.format, report.verbose, &entries);
        }
        Command::Show { emitters, format } => {
            let entries: Vec<CalibrationEntry> =
                emitters.into_iter().map(CalibrationEntry::new).collect();
            print_entries(format, true, &entries);
        }
        Command::Check {
            emitter,
            gps_accuracy,
            radius,
            count,
            json,
        } => {
            let observation = Observation {
                gps_accuracy,
                radius,
                count,
            };
            let result = assess(emitter, &observation);

            if json {
                let text =
                    serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
                println!("{}", text);
            } else {
                print_verdict("GPS fix", result.gps_fix_usable);
                print_verdict("Coverage radius", result.range_plausible);
                if let Some(clamped) = result.clamped_radius {
                    println!("{:<16} {:.1} m", "Clamped radius", clamped);
                }
                print_verdict("Emitter count", result.count_sufficient);
                println!(
                    "{}: {}",
                    emitter,
                    if result.accepted() {
                        "accepted"
                    } else {
                        "rejected"
                    }
                );
            }

            if !result.accepted() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Validate => {
            validate_table().context("Calibration table is inconsistent")?;
            println!("{} emitter types OK", EmitterType::ALL.len());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_entries(format: OutputFormat, verbose: bool, entries: &[CalibrationEntry]) {
    let formatter = create_formatter(format, verbose);
    for line in render(formatter.as_ref(), entries) {
        println!("{}", line);
    }
}

fn print_verdict(label: &str, verdict: Option<bool>) {
    if let Some(ok) = verdict {
        println!("{:<16} {}", label, if ok { "ok" } else { "rejected" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_accepts_printed_names() {
        for t in EmitterType::ALL {
            let args = Args::try_parse_from(["rfmodel", "show", t.name()]).unwrap();
            match args.command {
                Command::Show { emitters, .. } => assert_eq!(emitters, vec![t]),
                other => panic!("unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn test_check_accepts_relaxed_names() {
        for (name, expected) in [
            ("NR_FR2", EmitterType::NrFr2),
            ("nr-fr2", EmitterType::NrFr2),
            ("bluetooth", EmitterType::Bluetooth),
            ("BT", EmitterType::Bluetooth),
            ("Lte", EmitterType::Lte),
        ] {
            let args = Args::try_parse_from(["rfmodel", "check", name, "--count", "2"]).unwrap();
            match args.command {
                Command::Check { emitter, count, .. } => {
                    assert_eq!(emitter, expected);
                    assert_eq!(count, Some(2));
                }
                other => panic!("unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn test_unknown_emitter_name_is_rejected() {
        assert!(Args::try_parse_from(["rfmodel", "show", "UMTS"]).is_err());
        assert!(Args::try_parse_from(["rfmodel", "check", ""]).is_err());
    }
}
