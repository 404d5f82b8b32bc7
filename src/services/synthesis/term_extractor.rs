use std::collections::HashSet;

use crate::services::synthesis::segmenter::char_len;

/// Only the leading sentences are scanned for terms.
pub const TERM_SCAN_SENTENCES: usize = 8;
pub const MAX_KEY_TERMS: usize = 15;
/// Terms must be longer than this many characters.
pub const MIN_TERM_CHARS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenKind {
    Word,
    Gap,
}

/// A byte range of a sentence: either a run of word characters or the text between two runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Token {
    kind: TokenKind,
    start: usize,
    end: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn tokenize(sentence: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    for (idx, c) in sentence.char_indices() {
        let kind = if is_word_char(c) {
            TokenKind::Word
        } else {
            TokenKind::Gap
        };
        let end = idx + c.len_utf8();
        match tokens.last_mut() {
            Some(last) if last.kind == kind => last.end = end,
            _ => tokens.push(Token {
                kind,
                start: idx,
                end,
            }),
        }
    }
    tokens
}

/// One ASCII capital followed by one or more ASCII lowercase letters, nothing else.
fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let rest = chars.as_str();
            !rest.is_empty() && rest.chars().all(|c| c.is_ascii_lowercase())
        }
        _ => false,
    }
}

/// Runs of capitalized words joined by whitespace, in sentence order.
pub fn capitalized_phrases(sentence: &str) -> Vec<&str> {
    let mut phrases = Vec::new();
    let mut current: Option<(usize, usize)> = None;
    let mut joinable = false;

    for token in tokenize(sentence) {
        let text = &sentence[token.start..token.end];
        match token.kind {
            TokenKind::Word if is_capitalized(text) => {
                current = match current {
                    Some((start, _)) if joinable => Some((start, token.end)),
                    previous => {
                        if let Some((start, end)) = previous {
                            phrases.push(&sentence[start..end]);
                        }
                        Some((token.start, token.end))
                    }
                };
                joinable = false;
            }
            TokenKind::Word => {
                if let Some((start, end)) = current.take() {
                    phrases.push(&sentence[start..end]);
                }
            }
            TokenKind::Gap => {
                joinable = current.is_some() && text.chars().all(char::is_whitespace);
            }
        }
    }
    if let Some((start, end)) = current {
        phrases.push(&sentence[start..end]);
    }
    phrases
}

/// Ordered, de-duplicated candidate terms. May be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyTerms(Vec<String>);

impl KeyTerms {
    pub fn extract(sentences: &[String], title: &str) -> Self {
        let title_lower = title.to_lowercase();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut terms: Vec<String> = Vec::new();

        for sentence in sentences.iter().take(TERM_SCAN_SENTENCES) {
            for phrase in capitalized_phrases(sentence) {
                if char_len(phrase) <= MIN_TERM_CHARS || phrase.to_lowercase() == title_lower {
                    continue;
                }
                if seen.insert(phrase) {
                    terms.push(phrase.to_string());
                }
            }
        }

        terms.truncate(MAX_KEY_TERMS);
        KeyTerms(terms)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// The term at `index` wrapping around, or `None` when there are no terms.
    pub fn cycled(&self, index: usize) -> Option<&str> {
        if self.0.is_empty() {
            None
        } else {
            self.get(index % self.0.len())
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for KeyTerms {
    fn from(terms: Vec<String>) -> Self {
        KeyTerms(terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn consecutive_capitalized_words_form_one_phrase() {
        assert_eq!(
            capitalized_phrases("The Amazon River flows through Brazil and Peru"),
            vec!["The Amazon River", "Brazil", "Peru"]
        );
    }

    #[test]
    fn punctuation_breaks_a_phrase() {
        assert_eq!(
            capitalized_phrases("Paris, France hosts the Louvre"),
            vec!["Paris", "France", "Louvre"]
        );
    }

    #[test]
    fn mixed_case_and_acronyms_are_not_capitalized_words() {
        assert_eq!(capitalized_phrases("McDonald sells to NASA and Nasa"), vec!["Nasa"]);
        assert!(capitalized_phrases("Café culture").is_empty());
    }

    #[test]
    fn trailing_digits_end_the_phrase() {
        assert_eq!(capitalized_phrases("Hello World2 today"), vec!["Hello"]);
    }

    #[test]
    fn possessive_keeps_the_name() {
        assert_eq!(capitalized_phrases("Darwin's theory"), vec!["Darwin"]);
    }

    #[test]
    fn title_is_excluded_case_insensitively() {
        let terms = KeyTerms::extract(
            &sentences(&["Photosynthesis happens in Chloroplast structures"]),
            "photosynthesis",
        );
        assert_eq!(terms.as_slice(), &["Chloroplast".to_string()]);
    }

    #[test]
    fn short_terms_and_duplicates_are_dropped() {
        let terms = KeyTerms::extract(
            &sentences(&[
                "the Sun and Moon orbit near Earth",
                "Earth is studied by Galileo",
            ]),
            "Astronomy",
        );
        assert_eq!(
            terms.as_slice(),
            &[
                "Moon".to_string(),
                "Earth".to_string(),
                "Galileo".to_string()
            ]
        );
    }

    #[test]
    fn only_leading_sentences_are_scanned() {
        let mut input = vec!["plain lowercase sentence here".to_string(); TERM_SCAN_SENTENCES];
        input.push("Late Term appears".to_string());

        assert!(KeyTerms::extract(&input, "Title").is_empty());
    }

    #[test]
    fn terms_are_capped() {
        let words = [
            "Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India",
            "Juliet", "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec",
        ];
        let sentence = words.join(", ");
        let terms = KeyTerms::extract(&[sentence], "Alphabet");

        assert_eq!(terms.len(), MAX_KEY_TERMS);
        assert_eq!(terms.get(0), Some("Alpha"));
    }

    #[test]
    fn cycled_wraps_and_handles_empty() {
        let terms = KeyTerms::from(vec!["Alpha".to_string(), "Bravo".to_string()]);
        assert_eq!(terms.cycled(3), Some("Bravo"));
        assert_eq!(KeyTerms::default().cycled(3), None);
    }
}
