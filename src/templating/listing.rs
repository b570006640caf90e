//! A full listing of experience entries

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use super::detail::{styled_rows, Row, TEMPLATE as DETAILS};
use super::RenderingError;
use crate::annotating::Limits;
use crate::experience::Experience;
use crate::markup::escape;
use crate::rendering::{Render, Syntax};

static TEMPLATE: &'static str = r#"<ul class="experiences">
{{ for entry in entries }}<li id="experience-{entry.code}">
<header><strong>{entry.name}</strong>{{ for label in entry.labels }} {label | unescaped}{{ endfor }}</header>
{{ if entry.has_chips }}<div class="stack">{{ for chip in entry.chips }}{chip | unescaped}{{ endfor }}</div>
{{ endif }}<div class="details">
{{ call details with entry }}</div>
<footer>{{ if entry.has_period }}<span>Period: {entry.period}</span>{{ endif }}{{ if entry.has_keywords }}<span>Keywords: {entry.keywords}</span>{{ endif }}</footer>
</li>
{{ endfor }}</ul>
"#;

#[derive(Serialize)]
struct Entry {
    code: String,
    name: String,
    labels: Vec<String>,
    has_chips: bool,
    chips: Vec<String>,
    rows: Vec<Row>,
    has_period: bool,
    period: String,
    has_keywords: bool,
    keywords: String,
}

#[derive(Serialize)]
struct Context {
    entries: Vec<Entry>,
}

fn entry(experience: &Experience, renderer: &impl Render, limits: &Limits) -> Entry {
    let keywords = experience.keyword_list();

    let labels = [
        (Syntax::Label, &experience.period),
        (Syntax::Company, &experience.company),
    ]
    .into_iter()
    .filter(|(_, label)| !label.is_empty())
    .map(|(syntax, label)| renderer.style(syntax, &escape(label)))
    .collect();

    let chips: Vec<String> = experience
        .technologies()
        .into_iter()
        .map(|tech| renderer.style(Syntax::Chip, &escape(tech)))
        .collect();

    Entry {
        code: experience
            .code
            .clone(),
        name: if experience.name.is_empty() {
            "(untitled)".to_string()
        } else {
            experience
                .name
                .clone()
        },
        labels,
        has_chips: !chips.is_empty(),
        chips,
        rows: styled_rows(&experience.details, &keywords, renderer, limits),
        has_period: !experience.period.is_empty(),
        period: experience
            .period
            .clone(),
        has_keywords: !keywords.is_empty(),
        keywords: keywords.join(", "),
    }
}

/// Render experience entries as an HTML list: a header with the name,
/// period and company, the tech stack as chips, the highlighted notes, and
/// a footer repeating the period and keywords. Plain fields are escaped by
/// the template.
pub fn render_experiences(
    experiences: &[Experience],
    renderer: &impl Render,
    limits: &Limits,
) -> Result<String, RenderingError> {
    debug!("Rendering {} experiences", experiences.len());

    let context = Context {
        entries: experiences
            .iter()
            .map(|experience| entry(experience, renderer, limits))
            .collect(),
    };

    let mut tt = TinyTemplate::new();
    tt.add_template("details", DETAILS)?;
    tt.add_template("listing", TEMPLATE)?;

    Ok(tt.render("listing", &context)?)
}
