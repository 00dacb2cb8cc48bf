use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Characters stripped from the end of a token. Nothing else counts as punctuation.
pub const PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

lazy_static! {
    static ref ALPHABETIC: Regex = Regex::new(r"^\p{L}+$").expect("valid regex");
}

/// Words excluded from indexing, stored lower-cased so lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(lowercase_letters(word))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: AsRef<str>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut noise = NoiseWords::new();
        for w in iter {
            noise.insert(w.as_ref());
        }
        noise
    }
}

/// Turn a raw whitespace-delimited token into a keyword.
///
/// Trailing punctuation is stripped, then the remainder must be letters only.
/// Interior punctuation ("can't", "co-op"), digits, and noise words yield `None`.
pub fn normalize(raw: &str, noise: &NoiseWords) -> Option<String> {
    let stripped = raw.trim_end_matches(PUNCTUATION);
    if stripped.is_empty() { return None; }
    if !ALPHABETIC.is_match(stripped) { return None; }
    let word = lowercase_letters(stripped);
    if noise.contains(&word) { return None; }
    Some(word)
}

// Lower-case one char at a time, keeping only the leading char of each
// expansion so a letter never gains a combining mark ('İ' -> 'i').
fn lowercase_letters(word: &str) -> String {
    word.chars().filter_map(|c| c.to_lowercase().next()).collect()
}

/// Split text on whitespace and yield every token that normalizes to a keyword.
pub fn keywords<'a>(text: &'a str, noise: &'a NoiseWords) -> impl Iterator<Item = String> + 'a {
    text.split_whitespace().filter_map(move |tok| normalize(tok, noise))
}
