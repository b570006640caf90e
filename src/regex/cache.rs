/// Compile a pattern once and hand back the same `Regex` on every later
/// call from the same site. Patterns are literals, so a bad one is a
/// programming error and panics on first use.
#[macro_export]
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
