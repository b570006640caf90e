// Process-wide cache of compiled patterns

#[macro_use]
mod cache;
