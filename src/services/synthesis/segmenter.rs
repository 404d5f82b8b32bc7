/// Paragraphs must be longer than this to be kept.
pub const MIN_PARAGRAPH_CHARS: usize = 50;
/// Sentences must be strictly longer than this...
pub const MIN_SENTENCE_CHARS: usize = 20;
/// ...and strictly shorter than this.
pub const MAX_SENTENCE_CHARS: usize = 200;

/// Only periods end a sentence; `!` and `?` stay inside it.
const SENTENCE_TERMINATOR: char = '.';

/// Article body split into usable paragraphs and sentences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    pub paragraphs: Vec<String>,
    pub sentences: Vec<String>,
}

impl Segment {
    pub fn from_body(body: &str) -> Self {
        Segment {
            paragraphs: split_paragraphs(body),
            sentences: split_sentences(body),
        }
    }
}

pub fn split_paragraphs(body: &str) -> Vec<String> {
    body.split("\n\n")
        .map(str::trim)
        .filter(|p| char_len(p) > MIN_PARAGRAPH_CHARS)
        .map(str::to_string)
        .collect()
}

/// Sentences are cut across the whole body, not per paragraph.
pub fn split_sentences(body: &str) -> Vec<String> {
    body.split(SENTENCE_TERMINATOR)
        .map(str::trim)
        .filter(|s| {
            let len = char_len(s);
            len > MIN_SENTENCE_CHARS && len < MAX_SENTENCE_CHARS
        })
        .map(str::to_string)
        .collect()
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Cuts `s` to at most `max` characters without splitting a code point.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
