use crate::{Error, Result};
use rand::Rng;
use std::collections::BTreeSet;

/// Filtered and deduplicated collection of candidate words.
///
/// Every word has a length (in characters) within the bounds
/// given to [WordCatalog::build] and does not start with a
/// repeated character. A catalog is never empty.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    words: Vec<String>,
}

impl WordCatalog {
    /// Build a catalog from a sequence of words.
    ///
    /// Duplicates are removed, words outside the inclusive
    /// length range are discarded as are words whose first
    /// two characters are equal.
    ///
    /// Words are kept in sorted order so a seeded random
    /// source always selects the same words.
    pub fn build<I, S>(
        source: I,
        min_word_len: usize,
        max_word_len: usize,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if min_word_len > max_word_len {
            return Err(Error::InvalidWordLength {
                min: min_word_len,
                max: max_word_len,
            });
        }

        let unique: BTreeSet<String> = source
            .into_iter()
            .map(|word| word.as_ref().to_owned())
            .collect();
        let total = unique.len();

        let words: Vec<String> = unique
            .into_iter()
            .filter(|word| {
                let len = word.chars().count();
                len >= min_word_len && len <= max_word_len
            })
            .filter(|word| !has_repeated_start(word))
            .collect();

        tracing::debug!(
            min = min_word_len,
            max = max_word_len,
            unique = total,
            retained = words.len(),
            "catalog::build",
        );

        if words.is_empty() {
            return Err(Error::EmptyCatalog {
                min: min_word_len,
                max: max_word_len,
            });
        }

        Ok(Self { words })
    }

    /// Build a catalog from whitespace separated text.
    pub fn from_text(
        text: &str,
        min_word_len: usize,
        max_word_len: usize,
    ) -> Result<Self> {
        Self::build(text.split_whitespace(), min_word_len, max_word_len)
    }

    /// Pick a word uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }

    /// Number of words in the catalog.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false, construction fails for an empty catalog.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Determine if the catalog contains a word.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|candidate| candidate.as_str().cmp(word))
            .is_ok()
    }

    /// Words in sorted order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate the words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

// Single character words have nothing to compare.
fn has_repeated_start(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => first == second,
        _ => false,
    }
}
