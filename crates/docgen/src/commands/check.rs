//! Check command - report out-of-date targets without writing

use crate::context::Context;
use crate::output::print_text;
use anyhow::{Result, bail};
use colored::Colorize;
use docgen_core::pipeline::check_project;
use std::path::PathBuf;

/// Fails when at least one target would be rewritten by `generate`
pub fn run(config: Option<PathBuf>, strict: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(config)?;
    let options = ctx.render_options(strict);

    let reports = check_project(&ctx.project, &options)?;
    let stale: Vec<_> = reports.iter().filter(|r| r.changed).collect();

    for report in &reports {
        let target = ctx.display_path(&report.target);
        if report.changed {
            print_text(&format!("{} Out of date: {}", "!".yellow().bold(), target))?;
        } else if verbose {
            print_text(&format!("{} Up to date: {}", "✓".green(), target))?;
        }
    }

    if !stale.is_empty() {
        bail!(
            "{} target(s) out of date; run `docgen generate`",
            stale.len()
        );
    }

    print_text(&format!(
        "{} All {} target(s) up to date",
        "✓".green().bold(),
        reports.len()
    ))?;
    Ok(())
}
