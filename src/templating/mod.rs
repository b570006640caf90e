//! Templates assembling highlighted notes into HTML fragments

mod detail;
mod error;
mod listing;

pub use detail::{detail_rows, render_details, DetailRow};
pub use error::RenderingError;
pub use listing::render_experiences;
