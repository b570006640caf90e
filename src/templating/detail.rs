//! Line oriented rendering of a notes field

use serde::Serialize;
use tinytemplate::TinyTemplate;

use super::RenderingError;
use crate::annotating::{highlight, Limits};
use crate::markup::{escape, split_once};
use crate::rendering::{Render, Syntax};

pub(super) static TEMPLATE: &'static str = r#"{{ for row in rows }}<div class="detail">{{ if row.title }}{row.title | unescaped} {{ endif }}{row.body | unescaped}</div>
{{ endfor }}"#;

/// One non-blank line of notes. The title, when the line had one, is
/// escaped text; `html` is the highlighted remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub title: Option<String>,
    pub html: String,
}

/// Break notes into rows, one per non-blank line. Lines of the form
/// `title - body` get a title; the highlighting only applies to the body.
pub fn detail_rows<S: AsRef<str>>(
    details: &str,
    keywords: &[S],
    renderer: &impl Render,
    limits: &Limits,
) -> Vec<DetailRow> {
    details
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let line = split_once(line);
            DetailRow {
                title: if line.is_titled() {
                    Some(escape(line.head).into_owned())
                } else {
                    None
                },
                html: highlight(line.body, keywords, renderer, limits),
            }
        })
        .collect()
}

#[derive(Serialize)]
pub(super) struct Row {
    title: Option<String>,
    body: String,
}

pub(super) fn styled_rows<S: AsRef<str>>(
    details: &str,
    keywords: &[S],
    renderer: &impl Render,
    limits: &Limits,
) -> Vec<Row> {
    detail_rows(details, keywords, renderer, limits)
        .into_iter()
        .map(|row| Row {
            title: row
                .title
                .map(|title| renderer.style(Syntax::Title, &title)),
            body: renderer.style(Syntax::Body, &row.html),
        })
        .collect()
}

#[derive(Serialize)]
struct Context {
    rows: Vec<Row>,
}

/// Render notes as a sequence of `<div class="detail">` rows.
pub fn render_details<S: AsRef<str>>(
    details: &str,
    keywords: &[S],
    renderer: &impl Render,
    limits: &Limits,
) -> Result<String, RenderingError> {
    let context = Context {
        rows: styled_rows(details, keywords, renderer, limits),
    };

    let mut tt = TinyTemplate::new();
    tt.add_template("details", TEMPLATE)?;

    Ok(tt.render("details", &context)?)
}
