//! ginkgo2allure CLI
//!
//! Converts a Ginkgo JSON report into an Allure results folder.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use ginkgo2allure::commands::{execute_convert, validate_args, ConvertArgs};
use ginkgo2allure::utils::config::{DEFAULT_EPIC, DEFAULT_LABEL_SEPARATOR, ID_LABEL_NAME};

/// Convert Ginkgo report to Allure report
///
/// Writes one `<uuid>-result.json` per spec into the results folder.
#[derive(Parser, Debug)]
#[command(name = "ginkgo2allure")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Ginkgo JSON report (ginkgo --json-report)
    ginkgo_report: PathBuf,

    /// Folder receiving Allure result files
    results_dir: PathBuf,

    /// Epic name
    #[arg(short, long, default_value = DEFAULT_EPIC)]
    epic: String,

    /// Labels separator
    #[arg(long = "label_separator", alias = "label-separator", default_value = DEFAULT_LABEL_SEPARATOR)]
    label_separator: String,

    /// Allure mandatory labels (empty to disable the check)
    #[arg(
        long = "mandatory_labels",
        alias = "mandatory-labels",
        value_delimiter = ',',
        default_value = ID_LABEL_NAME
    )]
    mandatory_labels: Vec<String>,

    /// Analyze test failures in the Ginkgo report
    #[arg(
        long = "analyze_errors",
        alias = "analyze-errors",
        default_value_t = true,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    analyze_errors: bool,

    /// Generate a random id for specs without an id label
    #[arg(long)]
    auto_generate_id: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(
        short,
        long = "log_level",
        alias = "log-level",
        default_value = "info",
        env = "GINKGO2ALLURE_LOG_LEVEL"
    )]
    log_level: String,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level.as_str())).init();

    let args = convert_args(cli);

    // Validate args first
    validate_args(&args)?;

    execute_convert(args)
}

fn convert_args(cli: Cli) -> ConvertArgs {
    ConvertArgs {
        ginkgo_report: cli.ginkgo_report,
        results_dir: cli.results_dir,
        epic: cli.epic,
        label_separator: cli.label_separator,
        mandatory_labels: cli.mandatory_labels,
        analyze_errors: cli.analyze_errors,
        auto_generate_id: cli.auto_generate_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(flags: &[&str]) -> Cli {
        let argv = ["ginkgo2allure", "report.json", "allure-results"]
            .iter()
            .chain(flags.iter())
            .copied();
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.epic, "base");
        assert_eq!(cli.label_separator, "=");
        assert_eq!(cli.mandatory_labels, vec!["id".to_string()]);
        assert!(cli.analyze_errors);
        assert!(!cli.auto_generate_id);
    }

    #[test]
    fn test_underscore_flags() {
        let cli = parse(&[
            "--label_separator=:",
            "--mandatory_labels=id,story",
            "--analyze_errors=false",
            "--log_level=debug",
        ]);
        assert_eq!(cli.label_separator, ":");
        assert_eq!(cli.mandatory_labels, vec!["id".to_string(), "story".to_string()]);
        assert!(!cli.analyze_errors);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_hyphen_aliases() {
        let cli = parse(&[
            "--label-separator=:",
            "--mandatory-labels=story",
            "--analyze-errors=false",
            "--log-level=warn",
        ]);
        assert_eq!(cli.label_separator, ":");
        assert_eq!(cli.mandatory_labels, vec!["story".to_string()]);
        assert!(!cli.analyze_errors);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_bare_analyze_errors_flag() {
        let cli = parse(&["--analyze_errors"]);
        assert!(cli.analyze_errors);
        assert_eq!(cli.ginkgo_report, PathBuf::from("report.json"));
    }

    #[test]
    fn test_empty_mandatory_labels_disable_check() {
        let args = convert_args(parse(&["--mandatory_labels="]));
        assert!(args.to_config().report.mandatory_labels.is_empty());
    }
}
