//! Splitting a line of notes into a title and its body

/// One line of notes. `head` is empty when the line had no title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'i> {
    pub head: &'i str,
    pub body: &'i str,
}

impl Line<'_> {
    pub fn is_titled(&self) -> bool {
        !self.head.is_empty()
    }
}

/// Split a line at the first ` - `, ` — `, or ` : ` separator. The
/// separator and any whitespace surrounding it are dropped. Without a
/// separator the whole line is the body.
pub fn split_once(line: &str) -> Line<'_> {
    let re = regex!(r"\s*(?:\s-\s|\s—\s|\s:\s)\s*");

    match re.find(line) {
        Some(m) => Line {
            head: &line[..m.start()],
            body: &line[m.end()..],
        },
        None => Line {
            head: "",
            body: line,
        },
    }
}

/// Split a delimited list on runs of commas, semicolons, and newlines,
/// trimming each entry and dropping the empty ones.
pub fn parse_list(raw: &str) -> Vec<&str> {
    let re = regex!(r"[,;\n]+");

    re.split(raw)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
