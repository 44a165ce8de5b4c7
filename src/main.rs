mod config;
mod exporter;
mod format;
mod store;
mod utils;

use anyhow::Result;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, error, info};
use std::env;
use std::io;
use std::process;

use config::Activation;
use exporter::{ExportOptions, Exporter};
use format::OutputFormat;
use store::SsmStore;

/// Export AWS SSM Parameter Store parameters as shell environment variables
///
/// Paths are read from AWS_ENV_PATH as a colon-separated list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Set logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Recursively process parameters on each path
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    recursive: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Exports)]
    format: OutputFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn run(cli: &Cli, paths: &[String]) -> Result<()> {
    let store = SsmStore::from_env()?;
    let options = ExportOptions {
        recursive: cli.recursive,
        format: cli.format,
    };

    let stdout = io::stdout();
    let mut exporter = Exporter::new(&store, options, io::BufWriter::new(stdout.lock()));
    exporter.export_all(paths)?;

    Ok(())
}

fn init_logger(level: LogLevel) {
    // Logs go to stderr so stdout can be eval'd
    env_logger::Builder::new()
        .filter_level(level.to_filter())
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn main() {
    // Without AWS_ENV_PATH nothing runs, whatever the flags say
    let paths = match Activation::from_env() {
        Activation::Disabled => {
            init_logger(LogLevel::Info);
            info!("aws-env running locally, without {}", config::PATH_VAR);
            return;
        }
        Activation::Configured(paths) => paths,
    };

    let cli = Cli::parse_from(utils::normalize_legacy_flags(env::args()));
    init_logger(cli.log_level);

    debug!("CLI arguments: {:#?}", cli);
    debug!("Exporting parameters from: {:?}", paths);

    if let Err(err) = run(&cli, &paths) {
        error!("{:#}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(utils::normalize_legacy_flags(
            args.iter().map(|arg| arg.to_string()),
        ))
    }

    #[test]
    fn test_cli_defaults() {
        let cli = parse(&["aws-env"]).unwrap();

        assert!(!cli.recursive);
        assert_eq!(cli.format, OutputFormat::Exports);
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_cli_recursive_flag() {
        assert!(parse(&["aws-env", "--recursive"]).unwrap().recursive);
        assert!(parse(&["aws-env", "-recursive"]).unwrap().recursive);
    }

    #[test]
    fn test_cli_recursive_with_value() {
        assert!(parse(&["aws-env", "-recursive=true"]).unwrap().recursive);
        assert!(!parse(&["aws-env", "-recursive=false"]).unwrap().recursive);
        assert!(!parse(&["aws-env", "--recursive=false", "-format", "dotenv"])
            .unwrap()
            .recursive);
    }

    #[test]
    fn test_cli_recursive_does_not_take_next_arg() {
        let cli = parse(&["aws-env", "-recursive", "-format", "dotenv"]).unwrap();

        assert!(cli.recursive);
        assert_eq!(cli.format, OutputFormat::Dotenv);
    }

    #[test]
    fn test_cli_rejects_unsupported_format() {
        assert!(parse(&["aws-env", "-format", "yaml"]).is_err());
        assert!(parse(&["aws-env", "--format=json"]).is_err());
    }
}
