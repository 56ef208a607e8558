use anyhow::{Context, Result};
use clap::Args;

use vercon_semver::Semver;

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Constraint to test against, e.g. "<2.0"
    #[arg(value_name = "CONSTRAINT")]
    pub constraint: String,

    /// Candidate versions; ones that fail to parse are skipped
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,
}

/// Keep the versions allowed by the constraint, in the order given
pub fn filter(args: &FilterArgs) -> Result<Vec<String>> {
    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    Semver::satisfied_by(&versions, &args.constraint)
        .with_context(|| format!("Invalid constraint \"{}\"", args.constraint))
}

pub fn execute(args: FilterArgs) -> Result<i32> {
    for version in filter(&args)? {
        println!("{}", version);
    }
    Ok(0)
}
