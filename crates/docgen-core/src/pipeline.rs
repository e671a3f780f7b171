//! Rendering pipeline: template + values → document → diff-gated write

use crate::banner::banner_for;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::project::Project;
use crate::template::{Expressions, MissingKeyPolicy, Template, TemplateEngine};
use crate::text::TextBuilder;
use crate::values::load_values;
use crate::write::{needs_write, write_if_changed};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Per-run rendering settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub missing_keys: MissingKeyPolicy,
    /// Prepend the banner to templates that qualify for one
    pub banner: bool,
    /// Time stamped into the banner
    pub timestamp: DateTime<Utc>,
}

impl RenderOptions {
    /// Defaults: keep unknown placeholders, banners enabled
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            missing_keys: MissingKeyPolicy::Keep,
            banner: true,
            timestamp,
        }
    }

    pub fn from_config(render: &RenderConfig, timestamp: DateTime<Utc>) -> Self {
        Self {
            missing_keys: render.missing_keys,
            banner: render.banner,
            timestamp,
        }
    }
}

/// Render one document
///
/// Layout: `[banner line]` + `\n` (both only when a banner applies), then
/// the interpolated body followed by a line break.
pub fn render_document(
    template: &Template,
    expressions: &Expressions,
    options: &RenderOptions,
) -> Result<String> {
    let engine = TemplateEngine::with_policy(options.missing_keys);
    let mut sb = TextBuilder::new();

    if options.banner {
        if let Some(banner) = banner_for(template.name(), options.timestamp) {
            sb.write_block(&banner);
            sb.newline();
        }
    }

    let body = engine.render(template.text(), expressions)?;
    sb.write_line(&body);

    Ok(sb.build())
}

/// What happened (or would happen) to one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairReport {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Target was written (`sync_project`) or is stale (`check_project`)
    pub changed: bool,
}

/// Render every configured pair and write the targets that changed
///
/// Pairs are processed in config order; the first error stops the run.
pub fn sync_project(project: &Project, options: &RenderOptions) -> Result<Vec<PairReport>> {
    let filter = project.config.filter.to_filter();
    run_pairs(project, options, |target, text| {
        Ok(write_if_changed(target, text, &filter)?.is_written())
    })
}

/// Render every configured pair and report stale targets without writing
pub fn check_project(project: &Project, options: &RenderOptions) -> Result<Vec<PairReport>> {
    let filter = project.config.filter.to_filter();
    run_pairs(project, options, |target, text| {
        let stale = needs_write(target, text, &filter)?;
        if stale {
            log::info!("Stale {}", target.display());
        }
        Ok(stale)
    })
}

fn run_pairs<F>(
    project: &Project,
    options: &RenderOptions,
    mut apply: F,
) -> Result<Vec<PairReport>>
where
    F: FnMut(&Path, &str) -> Result<bool>,
{
    let expressions = load_values(project.values_path())?;
    let mut reports = Vec::new();

    for pair in project.pairs() {
        let template = Template::from_file(&pair.source)?;
        let text = render_document(&template, &expressions, options)?;
        let changed = apply(&pair.target, &text)?;

        reports.push(PairReport {
            source: pair.source,
            target: pair.target,
            changed,
        });
    }

    Ok(reports)
}
