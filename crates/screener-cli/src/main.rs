//! Trial eligibility screener CLI.

use clap::Parser;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_check, run_criteria, run_evaluate};
use crate::logging::{init_logging, LogConfig, LogFormat};

fn main() {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));

    let outcome = match &cli.command {
        Command::Evaluate(args) => run_evaluate(args),
        Command::Check(args) => run_check(args),
        Command::Criteria(args) => run_criteria(args),
    };

    let exit_code = match outcome {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {:#}", error);
            1
        }
    };
    std::process::exit(exit_code);
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    LogConfig::from_flags(cli.verbose, cli.quiet).with_format(format)
}
