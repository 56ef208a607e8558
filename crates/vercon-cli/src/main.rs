mod check;
mod filter;
mod sort;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "vercon")]
#[command(about = "Evaluate operator-prefixed version constraints such as \">=1.2.3\"")]
#[command(version)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a version satisfies a constraint (exit 0 if it does, 1 if not)
    Check(check::CheckArgs),

    /// Print the versions that satisfy a constraint
    Filter(filter::FilterArgs),

    /// Print versions sorted by precedence
    Sort(sort::SortArgs),
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Check(args) => check::execute(args),
        Commands::Filter(args) => filter::execute(args),
        Commands::Sort(args) => sort::execute(args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            // Print the error chain for debugging
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let args = Args::try_parse_from(["vercon", "-vv", "check", ">=1.2.3", "1.5.0"]).unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Commands::Check(check) => {
                assert_eq!(check.constraint, ">=1.2.3");
                assert_eq!(check.version, "1.5.0");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_constraint() {
        let args = Args::try_parse_from(["vercon", "check", "", "1.0.0"]).unwrap();
        assert!(matches!(args.command, Commands::Check(ref c) if c.constraint.is_empty()));
    }

    #[test]
    fn test_parse_sort_reverse() {
        let args = Args::try_parse_from(["vercon", "sort", "-r", "1.0", "2.0", "--verbose"]).unwrap();
        assert_eq!(args.verbose, 1);
        match args.command {
            Commands::Sort(sort) => {
                assert!(sort.reverse);
                assert_eq!(sort.versions, vec!["1.0", "2.0"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_filter_requires_versions() {
        assert!(Args::try_parse_from(["vercon", "filter", "<2.0"]).is_err());
    }
}
