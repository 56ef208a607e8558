use anyhow::{Context, Result};
use clap::Args;

use vercon_semver::{Version, VersionComparator};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Constraint to test against, e.g. ">=1.2.3" (an empty string matches anything)
    #[arg(value_name = "CONSTRAINT")]
    pub constraint: String,

    /// Candidate version
    #[arg(value_name = "VERSION")]
    pub version: String,
}

/// Evaluate the constraint against the candidate version
pub fn check(args: &CheckArgs) -> Result<bool> {
    let comparator = VersionComparator::parse(&args.constraint)
        .with_context(|| format!("Invalid constraint \"{}\"", args.constraint))?;
    let version = Version::parse(&args.version).context("Invalid candidate version")?;

    let allowed = comparator.allows(&version)?;
    log::debug!(
        "{} {} \"{}\"",
        version,
        if allowed { "satisfies" } else { "does not satisfy" },
        comparator
    );

    Ok(allowed)
}

pub fn execute(args: CheckArgs) -> Result<i32> {
    let allowed = check(&args)?;
    println!("{}", allowed);
    Ok(if allowed { 0 } else { 1 })
}
