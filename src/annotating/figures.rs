//! Emphasis on counts, amounts, and percentages

use super::Limits;
use crate::markup::{entity_ranges, tokenize, Token};
use crate::rendering::{Render, Syntax};

/// Tint numeric tokens: comma grouped integers like `1,200,000`, or plain
/// numbers with an optional fraction and percent sign. Only text between
/// tags is considered, so class attributes of earlier annotations stay
/// intact, and digits of numeric entity references such as `&#39;` are
/// skipped. Matches longer than `limits.max_figure_len` are left alone.
pub fn annotate_figures(html: &str, renderer: &impl Render, limits: &Limits) -> String {
    let re = regex!(r"[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+(?:\.[0-9]+)?%?");

    let mut result = String::with_capacity(html.len());

    for token in tokenize(html) {
        match token {
            Token::Tag(tag) => result.push_str(tag),
            Token::Text(text) => {
                let entities = entity_ranges(text);
                let mut last = 0;

                for m in re.find_iter(text) {
                    if m.as_str().len() > limits.max_figure_len {
                        continue;
                    }
                    if entities
                        .iter()
                        .any(|e| e.start < m.end() && m.start() < e.end)
                    {
                        continue;
                    }
                    result.push_str(&text[last..m.start()]);
                    result.push_str(&renderer.style(Syntax::Figure, m.as_str()));
                    last = m.end();
                }
                result.push_str(&text[last..]);
            }
        }
    }

    result
}
