use crate::count::WordCount;
use compact_str::CompactString;
use once_cell::sync::Lazy;
use regex::Regex;

static ASCII_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

/// (token, count) pairs, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranked {
    entries: Vec<(CompactString, usize)>,
}

impl Ranked {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn retain(mut self, keep: impl Fn(&str, usize) -> bool) -> Ranked {
        self.entries.retain(|(k, v)| keep(k.as_str(), *v));
        self
    }
}

/// Sorts by count, descending. The sort is stable, so equal counts keep the
/// order the tokens were first seen in.
pub fn rank(counts: &WordCount) -> Ranked {
    let mut entries: Vec<_> = counts
        .iter()
        .map(|(k, v)| (CompactString::from(k), v))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    Ranked { entries }
}

/// Keeps entries seen at least `min_count` times.
pub fn at_least(ranked: Ranked, min_count: usize) -> Ranked {
    ranked.retain(|_, count| count >= min_count)
}

pub fn is_ascii_word(token: &str) -> bool {
    ASCII_WORD.is_match(token)
}

/// Keeps entries whose token is nothing but ASCII letters.
pub fn alphabetic_only(ranked: Ranked) -> Ranked {
    ranked.retain(|token, _| is_ascii_word(token))
}
