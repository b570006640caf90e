//! The annotation pipeline turning raw notes into highlighted HTML

use crate::markup::escape;
use crate::rendering::Render;

mod figures;
mod keywords;
mod period;

pub use figures::annotate_figures;
pub use keywords::{prepare_keywords, underline};
pub use period::annotate_periods;

/// Bounds on the work done for a single piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Keywords beyond this many (after removing blanks and duplicates)
    /// are ignored.
    pub max_keywords: usize,
    /// Numeric runs longer than this are not tinted.
    pub max_figure_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_keywords: 32,
            max_figure_len: 20,
        }
    }
}

/// Convert raw, untrusted text into markup safe to insert into a page as
/// is. The order of the passes matters: escaping happens exactly once and
/// first, then date ranges are badged, then numbers tinted, and finally
/// keywords underlined in the text between the tags the earlier passes
/// introduced.
///
/// Running this over its own output escapes the markup of the first run;
/// it is meant to be applied once.
pub fn highlight<S: AsRef<str>>(
    raw: &str,
    keywords: &[S],
    renderer: &impl Render,
    limits: &Limits,
) -> String {
    let html = escape(raw);
    let html = annotate_periods(&html, renderer);
    let html = annotate_figures(&html, renderer, limits);
    let html = underline(&html, keywords, renderer, limits);

    html.into_owned()
}
