//! Generate command - render templates and write changed targets

use crate::context::Context;
use crate::output::print_text;
use anyhow::Result;
use colored::Colorize;
use docgen_core::pipeline::sync_project;
use std::path::PathBuf;

/// Render every configured template and update changed targets
///
/// # Arguments
///
/// * `config` - Optional explicit docgen.toml path
/// * `strict` - Fail on placeholders without a value
/// * `verbose` - Enable verbose output if true
pub fn run(config: Option<PathBuf>, strict: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(config)?;
    let options = ctx.render_options(strict);

    if verbose {
        print_text(&format!(
            "{} Rendering {} template(s)",
            "→".cyan(),
            ctx.project.config.templates.len()
        ))?;
    }

    let reports = sync_project(&ctx.project, &options)?;

    for report in &reports {
        let target = ctx.display_path(&report.target);
        if report.changed {
            print_text(&format!("{} Updated {}", "✓".green().bold(), target))?;
        } else {
            print_text(&format!("{} Unchanged {}", "=".dimmed(), target))?;
        }
    }

    let updated = reports.iter().filter(|r| r.changed).count();
    print_text(&format!(
        "\n{} {} updated, {} unchanged",
        "✓".green().bold(),
        updated,
        reports.len() - updated
    ))?;

    Ok(())
}
