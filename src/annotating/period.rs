//! Badges around parenthesised date ranges

use regex::Captures;

use crate::markup::escape_fragment;
use crate::rendering::{Render, Syntax};

/// Wrap every parenthesised run that opens with a `YYYY.MM` date, such as
/// `(2021.03 - 2022.01)` or `(2019.11~)`, in a period badge. Expects text
/// that has already been escaped; the match is escaped again without
/// disturbing existing entity references.
pub fn annotate_periods(html: &str, renderer: &impl Render) -> String {
    let re = regex!(r"\((?:19|20)[0-9]{2}\.[0-9]{2}[^)]*\)");

    re.replace_all(html, |caps: &Captures| {
        renderer.style(Syntax::Period, &escape_fragment(&caps[0]))
    })
    .into_owned()
}
