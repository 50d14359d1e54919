use std::ops::ControlFlow;

use log::{debug, info};

use crate::dictionary::{self, Candidates};
use crate::histogram::{Histogram, MatchStatus};
use crate::permutation;
use crate::word::Word;

pub trait PhraseSink {
    /// Returns [`ControlFlow::Break`] to end the whole search.
    fn accept(&mut self, phrase: &str) -> ControlFlow<()>;
}

impl<F> PhraseSink for F
where
    F: FnMut(&str) -> ControlFlow<()>,
{
    fn accept(&mut self, phrase: &str) -> ControlFlow<()> {
        self(phrase)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Exhausted,
    Stopped,
}

pub struct AnagramSearcher<S> {
    candidates: Candidates,
    target: Histogram,
    sink: S,
}

impl<S: PhraseSink> AnagramSearcher<S> {
    pub fn new<I, W>(words: I, phrase: &str, sink: S) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let target = Histogram::from_text(phrase);
        let candidates = dictionary::prepare(words, &target);
        AnagramSearcher::from_candidates(candidates, target, sink)
    }

    /// Searches an already prepared candidate list. `candidates` must have
    /// been prepared against `target`.
    pub fn from_candidates(candidates: Candidates, target: Histogram, sink: S) -> Self {
        AnagramSearcher {
            candidates,
            target,
            sink,
        }
    }

    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Reports every ordering of every combination of at most `max_words`
    /// candidates whose letters match the phrase. Words are chosen at or
    /// after the index of the previous word, so each combination is found
    /// once while a word may still repeat within it.
    pub fn search(&mut self, max_words: usize) -> SearchOutcome {
        if max_words == 0 || self.target.is_empty() {
            return SearchOutcome::Exhausted;
        }

        info!(
            "searching {} candidates for phrases of up to {} words",
            self.candidates.len(),
            max_words
        );

        let mut walk = Walk {
            words: self.candidates.as_slice(),
            target: &self.target,
            sink: &mut self.sink,
            max_words,
            // no phrase can hold more words than the target has letters
            phrase: Vec::with_capacity(max_words.min(self.target.total() as usize)),
            histogram: Histogram::new(),
            combinations: 0,
        };
        let flow = walk.descend(0);
        debug_assert!(walk.phrase.is_empty());
        debug!("found {} matching combinations", walk.combinations);

        match flow {
            ControlFlow::Continue(()) => SearchOutcome::Exhausted,
            ControlFlow::Break(()) => {
                info!("search stopped by consumer");
                SearchOutcome::Stopped
            }
        }
    }
}

// Phrase and histogram are restored on every return from `descend`,
// breaks included.
struct Walk<'a, S> {
    words: &'a [Word],
    target: &'a Histogram,
    sink: &'a mut S,
    max_words: usize,
    phrase: Vec<&'a Word>,
    histogram: Histogram,
    combinations: usize,
}

impl<'a, S: PhraseSink> Walk<'a, S> {
    fn descend(&mut self, start: usize) -> ControlFlow<()> {
        let words = self.words;
        for (index, word) in words.iter().enumerate().skip(start) {
            self.histogram += word.histogram();
            let flow = match self.histogram.compare(self.target) {
                MatchStatus::Valid => {
                    self.combinations += 1;
                    self.phrase.push(word);
                    let flow = permutation::emit(&self.phrase, &mut *self.sink);
                    self.phrase.pop();
                    flow
                }
                MatchStatus::Incomplete if self.phrase.len() + 1 >= self.max_words => {
                    ControlFlow::Continue(())
                }
                MatchStatus::Incomplete => {
                    self.phrase.push(word);
                    let flow = self.descend(index);
                    self.phrase.pop();
                    flow
                }
                MatchStatus::Overflow => ControlFlow::Continue(()),
            };
            self.histogram -= word.histogram();
            flow?;
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(words: &[&str], phrase: &str, max_words: usize) -> Vec<String> {
        let mut found = vec![];
        let mut searcher = AnagramSearcher::new(words, phrase, |p: &str| {
            found.push(p.to_owned());
            ControlFlow::Continue(())
        });
        assert_eq!(searcher.search(max_words), SearchOutcome::Exhausted);
        drop(searcher);
        found
    }

    #[test]
    fn finds_single_two_word_combination() {
        let found = collect(&["safe", "fairy", "fear", "ty", "tales"], "rail safety", 3);
        assert_eq!(found, ["fairy tales", "tales fairy"]);
    }

    #[test]
    fn single_word_anagram() {
        let found = collect(&["listen", "silent", "tin", "les"], "enlist", 1);
        assert_eq!(found, ["listen", "silent"]);
    }

    #[test]
    fn max_words_caps_depth() {
        let words = ["tin", "les", "listen"];
        assert_eq!(collect(&words, "enlist", 1), ["listen"]);
        assert_eq!(collect(&words, "enlist", 2).len(), 1 + 2);
    }

    #[test]
    fn same_word_may_repeat() {
        let found = collect(&["ab", "abab"], "abab ab", 3);
        // "abab ab" both ways, then "ab ab ab" six times
        assert_eq!(found.len(), 2 + 6);
        assert_eq!(found.iter().filter(|p| *p == "ab ab ab").count(), 6);
    }

    #[test]
    fn degenerate_inputs_emit_nothing() {
        assert!(collect(&[], "rail safety", 3).is_empty());
        assert!(collect(&["safe", "fairy"], "", 3).is_empty());
        assert!(collect(&["fairy", "tales"], "rail safety", 0).is_empty());
    }

    #[test]
    fn unbounded_word_count() {
        let words = ["safe", "fairy", "fear", "ty", "tales"];
        assert_eq!(collect(&words, "rail safety", usize::MAX).len(), 2);
        assert_eq!(collect(&words, "rail safety", usize::MAX / 2).len(), 2);
    }

    #[test]
    fn break_unwinds_every_frame() {
        let mut calls = 0;
        let words = ["ab", "a", "b"];
        let mut searcher = AnagramSearcher::new(words, "aabb", |_: &str| {
            calls += 1;
            ControlFlow::Break(())
        });
        assert_eq!(searcher.search(4), SearchOutcome::Stopped);
        drop(searcher);
        assert_eq!(calls, 1);
    }

    #[test]
    fn search_can_run_twice() {
        let mut calls = 0;
        let mut searcher = AnagramSearcher::new(["fairy", "tales"], "rail safety", |_: &str| {
            calls += 1;
            ControlFlow::Break(())
        });
        assert_eq!(searcher.search(2), SearchOutcome::Stopped);
        assert_eq!(searcher.search(2), SearchOutcome::Stopped);
        drop(searcher);
        assert_eq!(calls, 2);
    }
}
