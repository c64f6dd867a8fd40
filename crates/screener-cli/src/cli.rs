//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use screener_core::Locale;

#[derive(Parser, Debug)]
#[command(
    name = "screener",
    version,
    about = "Screen a candidate against the trial's eligibility criteria",
    long_about = "Screen a candidate against the trial's inclusion and exclusion criteria.\n\n\
                  Reads a completed screening form (YAML or JSON) and reports which criteria\n\
                  are met, which need confirmation, and which disqualify."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a completed screening form.
    Evaluate(EvaluateArgs),

    /// List fields still missing from a screening form, by form step.
    Check(CheckArgs),

    /// List the exclusion criteria in evaluation order.
    Criteria(CriteriaArgs),
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Answers file (.json for JSON, anything else is read as YAML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Language for findings and report text.
    #[arg(long, value_enum, default_value = "en")]
    pub locale: LocaleArg,

    /// Exit with status 2 when the verdict is ineligible.
    #[arg(long = "fail-on-ineligible")]
    pub fail_on_ineligible: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Answers file (.json for JSON, anything else is read as YAML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Language for step labels.
    #[arg(long, value_enum, default_value = "en")]
    pub locale: LocaleArg,
}

#[derive(Args, Debug)]
pub struct CriteriaArgs {
    /// Language for criterion labels.
    #[arg(long, value_enum, default_value = "en")]
    pub locale: LocaleArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LocaleArg {
    En,
    Ja,
}

impl From<LocaleArg> for Locale {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::En => Locale::En,
            LocaleArg::Ja => Locale::Ja,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_evaluate() {
        let cli = Cli::try_parse_from([
            "screener",
            "-v",
            "evaluate",
            "answers.yaml",
            "--format",
            "json",
            "--locale",
            "ja",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Evaluate(args) => {
                assert_eq!(args.file, PathBuf::from("answers.yaml"));
                assert!(matches!(args.format, OutputFormatArg::Json));
                assert_eq!(Locale::from(args.locale), Locale::Ja);
                assert!(!args.fail_on_ineligible);
            }
            other => panic!("expected evaluate, got {:?}", other),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["screener", "-q", "-v", "criteria"]);
        assert!(result.is_err());
    }
}
