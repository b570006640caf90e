//! HTML renderers, differing only in the class names they emit

use super::{Render, Syntax};

/// Utility classes for pages styled with Tailwind.
pub struct Tailwind;

impl Render for Tailwind {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        let class = match syntax {
            Syntax::Period => {
                "inline-block align-[2px] rounded-full bg-neutral-100 px-2 py-0.5 text-[12px] \
                 text-neutral-600 border border-neutral-200 ml-2"
            }
            Syntax::Figure => "font-semibold text-sky-700",
            Syntax::Keyword => "underline decoration-sky-300 underline-offset-2",
            Syntax::Title => "text-[15px] font-semibold text-neutral-900",
            Syntax::Body => "text-[15px] leading-7 text-neutral-800",
            Syntax::Label => {
                "rounded-full bg-neutral-100 px-2 py-0.5 text-[11px] text-neutral-600 ring-1 \
                 ring-inset ring-neutral-200"
            }
            Syntax::Company => {
                "rounded-full bg-sky-50 px-2 py-0.5 text-[11px] text-sky-700 ring-1 ring-inset \
                 ring-sky-200"
            }
            Syntax::Chip => {
                "inline-flex items-center gap-1 rounded-full bg-neutral-50 text-neutral-700 ring-1 \
                 ring-inset ring-neutral-200 px-2.5 py-1 text-[12px] leading-none"
            }
        };
        markup(class, content)
    }
}

/// Short, meaningful class names for consumers who bring their own
/// stylesheet.
pub struct Semantic;

impl Render for Semantic {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        let class = match syntax {
            Syntax::Period => "period",
            Syntax::Figure => "figure",
            Syntax::Keyword => "keyword",
            Syntax::Title => "title",
            Syntax::Body => "body",
            Syntax::Label => "label",
            Syntax::Company => "company",
            Syntax::Chip => "chip",
        };
        markup(class, content)
    }
}

fn markup(class: &str, content: &str) -> String {
    let mut result = String::with_capacity(20 + class.len() + content.len());
    result.push_str("<span class=\"");
    result.push_str(class);
    result.push_str("\">");
    result.push_str(content);
    result.push_str("</span>");
    result
}
