use anyhow::Result;
use clap::Args;

use vercon_semver::Semver;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort; ones that fail to parse are dropped
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Sort newest first
    #[arg(short, long)]
    pub reverse: bool,
}

/// Sort the parseable versions, dropping the rest
pub fn sort(args: &SortArgs) -> Vec<String> {
    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    let sorted = if args.reverse {
        Semver::rsort(&versions)
    } else {
        Semver::sort(&versions)
    };

    if sorted.len() < versions.len() {
        log::warn!("Dropped {} unparsable version(s)", versions.len() - sorted.len());
    }

    sorted
}

pub fn execute(args: SortArgs) -> Result<i32> {
    for version in sort(&args) {
        println!("{}", version);
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(versions: &[&str], reverse: bool) -> SortArgs {
        SortArgs {
            versions: versions.iter().map(|v| v.to_string()).collect(),
            reverse,
        }
    }

    #[test]
    fn test_sort_drops_unparsable() {
        let sorted = sort(&args(&["2.0.0", "dev-main", "1.10.0", "1.9.0"], false));
        assert_eq!(sorted, vec!["1.9.0", "1.10.0", "2.0.0"]);
    }

    #[test]
    fn test_sort_reverse() {
        let sorted = sort(&args(&["1.0.0-beta", "1.0.0", "0.9"], true));
        assert_eq!(sorted, vec!["1.0.0", "1.0.0-beta", "0.9"]);
    }

    #[test]
    fn test_execute() {
        assert_eq!(execute(args(&["1.0", "nope"], false)).unwrap(), 0);
    }
}
