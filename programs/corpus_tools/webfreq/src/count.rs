use compact_str::CompactString;
use std::collections::HashMap;

/// Whitespace as the page splitter sees it: unicode White_Space plus the
/// ASCII file/group/record/unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trims ASCII punctuation off both ends and lower-cases ASCII letters.
/// Inner punctuation stays, so "don't" is still "don't".
pub fn normalise(raw: &str) -> CompactString {
    let trimmed = raw.trim_matches(|c: char| c.is_ascii_punctuation());
    CompactString::from(trimmed.to_ascii_lowercase())
}

/// Splits `text` into normalised tokens. Tokens made only of punctuation come
/// out empty, they are not skipped here.
pub fn tokens(text: &str) -> impl Iterator<Item = CompactString> + '_ {
    text.split(is_separator)
        .filter(|w| !w.is_empty())
        .map(normalise)
}

/// Token counts that remember the order in which each token was first seen.
#[derive(Debug, Clone, Default)]
pub struct WordCount {
    index: HashMap<CompactString, usize>,
    entries: Vec<(CompactString, usize)>,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: impl Into<CompactString>, n: usize) {
        let token = token.into();
        if let Some(&i) = self.index.get(&token) {
            self.entries[i].1 += n;
        } else {
            self.index.insert(token.clone(), self.entries.len());
            self.entries.push((token, n));
        }
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// First-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sums both counts. Tokens that `self` has never seen are appended in
    /// the order `other` saw them.
    pub fn merge(mut self, other: WordCount) -> WordCount {
        for (token, n) in other.entries {
            self.add(token, n);
        }
        self
    }
}

impl PartialEq for WordCount {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for WordCount {}

impl FromIterator<CompactString> for WordCount {
    fn from_iter<I: IntoIterator<Item = CompactString>>(iter: I) -> Self {
        let mut counts = WordCount::new();
        iter.into_iter().for_each(|token| counts.add(token, 1));
        counts
    }
}

pub fn count_words(text: &str) -> WordCount {
    tokens(text).collect()
}
