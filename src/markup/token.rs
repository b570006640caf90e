//! Splitting partially marked-up text into tags and the text between them

use std::fmt;

/// A piece of an HTML string. Tags are whole `<...>` constructs; text is
/// everything in between, possibly empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'i> {
    Tag(&'i str),
    Text(&'i str),
}

impl<'i> Token<'i> {
    pub fn as_str(&self) -> &'i str {
        match *self {
            Token::Tag(s) | Token::Text(s) => s,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Token::Tag(_))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split markup into alternating text and tag tokens. The sequence always
/// begins and ends with a text token, and adjacent tags have an empty text
/// token between them, so joining the tokens gives back the input.
///
/// A `<` with no closing `>` after it does not start a tag.
pub fn tokenize(html: &str) -> Vec<Token<'_>> {
    let re = regex!(r"<[^>]+>");

    let mut tokens = Vec::new();
    let mut last = 0;

    for m in re.find_iter(html) {
        tokens.push(Token::Text(&html[last..m.start()]));
        tokens.push(Token::Tag(m.as_str()));
        last = m.end();
    }
    tokens.push(Token::Text(&html[last..]));

    tokens
}
