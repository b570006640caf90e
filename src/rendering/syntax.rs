//! The kinds of annotation a renderer can be asked to wrap

/// Types of content that can be rendered with different styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Period, // date range badge
    Figure, // counts, amounts, percentages
    Keyword,
    Title,
    Body,
    Label,
    Company,
    Chip,
}

/// Trait for the different ways of marking up annotations. The content
/// handed over is already safe markup; implementations only wrap it.
pub trait Render {
    /// Apply styling to content with the specified syntax type
    fn style(&self, syntax: Syntax, content: &str) -> String;
}
