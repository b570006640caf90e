//! Underlining caller supplied keywords in the text between tags

use std::borrow::Cow;
use std::collections::HashSet;
use std::ops::Range;

use regex::Regex;
use tracing::debug;

use super::Limits;
use crate::markup::{entity_ranges, escape, tokenize, Token};
use crate::rendering::{Render, Syntax};

/// Tidy a keyword list for matching: entries are trimmed, blank entries
/// and case-insensitive duplicates dropped, the list capped at
/// `limits.max_keywords`, and what remains ordered longest first. Keywords
/// of equal length keep their original order.
pub fn prepare_keywords<'k, S: AsRef<str>>(keywords: &'k [S], limits: &Limits) -> Vec<&'k str> {
    let mut seen = HashSet::new();

    let mut result: Vec<&str> = keywords
        .iter()
        .map(|k| k.as_ref().trim())
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.to_lowercase()))
        .collect();

    if result.len() > limits.max_keywords {
        debug!(
            "Ignoring {} keywords beyond the limit of {}",
            result.len() - limits.max_keywords,
            limits.max_keywords
        );
        result.truncate(limits.max_keywords);
    }

    result.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
    });

    result
}

/// The two ways a keyword is looked for: bounded by (ASCII) word
/// boundaries, or anywhere at all.
struct Pattern {
    word: Regex,
    loose: Regex,
}

impl Pattern {
    fn new(keyword: &str) -> Option<Pattern> {
        // text tokens are escaped, so the keyword has to be as well
        let literal = regex::escape(&escape(keyword));

        let word = Regex::new(&format!(r"(?i)(?-u:\b){}(?-u:\b)", literal));
        let loose = Regex::new(&format!(r"(?i){}", literal));

        match (word, loose) {
            (Ok(word), Ok(loose)) => Some(Pattern { word, loose }),
            (Err(error), _) | (_, Err(error)) => {
                debug!(?error, "Skipping keyword {:?}", keyword);
                None
            }
        }
    }
}

/// Wrap occurrences of the keywords found in text tokens with an underline,
/// preserving the matched text as written. Tags pass through untouched.
///
/// Longer keywords are applied first. For each keyword a whole-word match
/// is preferred; only when a text token has none at all, claimed or not,
/// does a match inside a larger word count (CJK text, compounds). Text already
/// claimed by an earlier keyword is never matched again, so underlines do
/// not nest, and entity references are never split.
pub fn underline<'h, S: AsRef<str>>(
    html: &'h str,
    keywords: &[S],
    renderer: &impl Render,
    limits: &Limits,
) -> Cow<'h, str> {
    if keywords.is_empty() {
        return Cow::Borrowed(html);
    }

    let patterns: Vec<Pattern> = prepare_keywords(keywords, limits)
        .into_iter()
        .filter_map(Pattern::new)
        .collect();

    if patterns.is_empty() {
        return Cow::Borrowed(html);
    }

    let mut result = String::with_capacity(html.len() + 64);

    for token in tokenize(html) {
        match token {
            Token::Tag(tag) => result.push_str(tag),
            Token::Text(text) => underline_text(&mut result, text, &patterns, renderer),
        }
    }

    Cow::Owned(result)
}

fn underline_text(result: &mut String, text: &str, patterns: &[Pattern], renderer: &impl Render) {
    let entities = entity_ranges(text);
    let mut claimed: Vec<Range<usize>> = Vec::new();

    for pattern in patterns {
        // whole words taken by a longer keyword still rule out the loose pass
        let re = if pattern.word.is_match(text) {
            &pattern.word
        } else {
            &pattern.loose
        };
        let found = find_unclaimed(re, text, &claimed, &entities);
        claimed.extend(found);
    }

    claimed.sort_by_key(|range| range.start);

    let mut last = 0;
    for range in claimed {
        result.push_str(&text[last..range.start]);
        result.push_str(&renderer.style(Syntax::Keyword, &text[range.clone()]));
        last = range.end;
    }
    result.push_str(&text[last..]);
}

/// Matches of `re` in `text` that neither overlap a claimed range nor cut
/// through an entity reference.
fn find_unclaimed(
    re: &Regex,
    text: &str,
    claimed: &[Range<usize>],
    entities: &[Range<usize>],
) -> Vec<Range<usize>> {
    let mut found = Vec::new();
    let mut at = 0;

    while let Some(m) = re.find_at(text, at) {
        let range = m.range();

        let overlaps_claim = claimed
            .iter()
            .any(|c| overlaps(c, &range));
        let splits_entity = entities
            .iter()
            .any(|e| overlaps(e, &range) && !(range.start <= e.start && e.end <= range.end));

        if overlaps_claim || splits_entity {
            // retry from the next character
            at = range.start
                + text[range.start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
            continue;
        }

        at = range.end;
        found.push(range);
    }

    found
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}
