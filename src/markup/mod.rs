//! Plain text and markup primitives: escaping, tag-aware tokenizing, and
//! splitting note lines.

mod escape;
mod line;
mod token;

// Re-export all public symbols
pub use escape::*;
pub use line::*;
pub use token::*;
