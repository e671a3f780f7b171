//! Change detection under a line filter
//!
//! Two texts are "meaningfully equal" when their line sequences match after
//! each side drops the lines its [`LineFilter`] ignores. Indices handed to the
//! filter are positions in that side's unfiltered text, so a structural region
//! (e.g. the banner at the top) is filtered the same way on both sides.

/// Marker that starts every autogeneration banner line
pub const AUTOGEN_MARKER: &str = "[//]: # (Auto-generated";

/// Default number of leading lines searched for the banner
pub const DEFAULT_BANNER_LINES: usize = 5;

/// Decides whether a line is ignored when comparing texts
pub trait LineFilter {
    /// `index` is zero-based within the whole, unfiltered text
    fn ignore(&self, line: &str, index: usize) -> bool;
}

impl<F> LineFilter for F
where
    F: Fn(&str, usize) -> bool,
{
    fn ignore(&self, line: &str, index: usize) -> bool {
        self(line, index)
    }
}

/// Compares every line
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl LineFilter for NoFilter {
    fn ignore(&self, _line: &str, _index: usize) -> bool {
        false
    }
}

/// Ignores banner lines near the top of the text
///
/// A line is ignored when its index is below `max_lines` and it starts with
/// `marker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerFilter {
    marker: String,
    max_lines: usize,
}

impl BannerFilter {
    pub fn new(marker: impl Into<String>, max_lines: usize) -> Self {
        Self {
            marker: marker.into(),
            max_lines,
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }
}

impl Default for BannerFilter {
    fn default() -> Self {
        Self::new(AUTOGEN_MARKER, DEFAULT_BANNER_LINES)
    }
}

impl LineFilter for BannerFilter {
    fn ignore(&self, line: &str, index: usize) -> bool {
        index < self.max_lines && line.starts_with(&self.marker)
    }
}

/// Lines of `text` that survive `filter`
///
/// `\r\n` is read as `\n`; a trailing line break does not add an empty line.
fn filtered_lines<'a, L>(text: &'a str, filter: &'a L) -> impl Iterator<Item = &'a str> + 'a
where
    L: LineFilter + ?Sized + 'a,
{
    text.lines()
        .enumerate()
        .filter(move |(index, line)| !filter.ignore(line, *index))
        .map(|(_, line)| line)
}

/// Whether `old` and `new` differ once ignored lines are dropped
pub fn differs<L>(old: &str, new: &str, filter: &L) -> bool
where
    L: LineFilter + ?Sized,
{
    !filtered_lines(old, filter).eq(filtered_lines(new, filter))
}

/// Like [`differs`], for a target that may not exist yet
///
/// An absent target differs from every new text, including an empty one.
pub fn differs_from_existing<L>(old: Option<&str>, new: &str, filter: &L) -> bool
where
    L: LineFilter + ?Sized,
{
    match old {
        Some(old) => differs(old, new, filter),
        None => true,
    }
}
