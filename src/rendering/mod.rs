//! Renderers deciding what markup wraps each annotation

mod html;
mod syntax;

pub use html::{Semantic, Tailwind};
pub use syntax::{Render, Syntax};

/// The renderers selectable by name, for configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Renderer {
    #[default]
    Tailwind,
    Semantic,
}

impl Renderer {
    pub const NAMES: [&'static str; 2] = ["tailwind", "semantic"];

    pub fn lookup(name: &str) -> Option<Renderer> {
        match name {
            "tailwind" => Some(Renderer::Tailwind),
            "semantic" => Some(Renderer::Semantic),
            _ => None,
        }
    }
}

impl Render for Renderer {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match self {
            Renderer::Tailwind => Tailwind.style(syntax, content),
            Renderer::Semantic => Semantic.style(syntax, content),
        }
    }
}
