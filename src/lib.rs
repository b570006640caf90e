//! Safe, annotated HTML for free-form project notes: raw text is escaped,
//! date ranges badged, figures tinted, and keywords underlined without
//! disturbing the markup added along the way.

#[macro_use]
mod regex;

pub mod annotating;
pub mod experience;
pub mod loading;
pub mod markup;
pub mod rendering;
pub mod templating;
