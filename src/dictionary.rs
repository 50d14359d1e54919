use std::cmp::Reverse;
use std::collections::HashSet;
use std::fs;
use std::hash::Hash;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::histogram::{Histogram, MatchStatus};
use crate::word::Word;

pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;

    let mut words = vec![];
    for line in contents.lines() {
        let word = line.trim();
        if word.is_empty() { continue }
        words.push(word.to_owned());
    }

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Keeps the words made only of characters that occur in `target`.
/// Empty words can never advance a search and are dropped too.
pub fn filter_alphabet<'a, I>(words: I, target: &Histogram) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .filter(|word| !word.is_empty() && word.chars().all(|c| target.contains(c)))
        .collect()
}

/// First occurrence wins.
pub fn deduplicate<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

pub fn filter_overflow<'a, I>(words: I, target: &Histogram) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .map(Word::new)
        .filter(|word| word.histogram().compare(target) != MatchStatus::Overflow)
        .collect()
}

/// Alphabet filter, dedup and overflow filter, in that order, then sorted
/// longest first.
pub fn prepare<I, S>(words: I, target: &Histogram) -> Candidates
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let raw: Vec<S> = words.into_iter().collect();
    let usable = filter_alphabet(raw.iter().map(|word| word.as_ref()), target);
    let in_alphabet = usable.len();
    let unique = deduplicate(usable);
    let mut fitting = filter_overflow(unique.iter().copied(), target);
    fitting.sort_by_key(|word| Reverse(word.len()));

    debug!(
        "prepared {} candidates ({} raw, {} in alphabet, {} unique)",
        fitting.len(),
        raw.len(),
        in_alphabet,
        unique.len(),
    );
    Candidates { words: fitting }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    words: Vec<Word>,
}

impl Candidates {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn restrict_letters(&mut self, minletters: usize, maxletters: usize) {
        self.words.retain(|word| {
            let len = word.len();
            len >= minletters && len <= maxletters
        });
    }
}

impl<'a> IntoIterator for &'a Candidates {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(candidates: &Candidates) -> Vec<&str> {
        candidates.iter().map(Word::as_str).collect()
    }

    #[test]
    fn deduplicate_keeps_first_seen_order() {
        let initial = vec![
            "aaa", "aaa",
            "one",
            "bbb", "bbb", "bbb",
            "two",
            "ccc", "ccc",
        ];
        assert_eq!(deduplicate(initial), vec!["aaa", "one", "bbb", "two", "ccc"]);
    }

    #[test]
    fn alphabet_filter_rejects_foreign_letters() {
        let target = Histogram::from_text("a lamb");
        let kept = filter_alphabet(vec!["lamb", "lambs", "", "balm", "ba m"], &target);
        assert_eq!(kept, vec!["lamb", "balm"]);
    }

    #[test]
    fn overflow_filter_rejects_greedy_words() {
        let target = Histogram::from_text("a lamb");
        let kept = filter_overflow(vec!["alabama", "lama", "ball"], &target);
        let kept: Vec<&str> = kept.iter().map(Word::as_str).collect();
        assert_eq!(kept, vec!["lama"]);
    }

    #[test]
    fn prepare_sorts_longest_first() {
        let target = Histogram::from_text("rail safety");
        let words = ["ty", "safe", "fairy", "safe", "fear", "tales", "zebra", "fairyy"];
        let candidates = prepare(words, &target);
        assert_eq!(texts(&candidates), vec!["fairy", "tales", "safe", "fear", "ty"]);
    }

    #[test]
    fn prepare_empty_input() {
        let target = Histogram::from_text("rail safety");
        let words: Vec<String> = vec![];
        assert!(prepare(&words, &target).is_empty());
    }

    #[test]
    fn restrict_letters_bounds_lengths() {
        let target = Histogram::from_text("rail safety");
        let mut candidates = prepare(["fairy", "tales", "safe", "ty"], &target);
        candidates.restrict_letters(3, 4);
        assert_eq!(texts(&candidates), vec!["safe"]);
    }
}
