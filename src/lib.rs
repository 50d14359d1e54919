//! Find the anagrams of a phrase that hash to a known digest.
//!
//! A word list is pruned against the letters of the phrase
//! ([`dictionary::prepare`]), then [`AnagramSearcher`] combines the
//! remaining words depth first until their letters exactly match. Every
//! ordering of a match is passed to a [`PhraseSink`]; [`MatchVerifier`] is
//! the sink that hashes phrases and stops once enough digests were hit.
//!
//! ```
//! use std::ops::ControlFlow;
//! use anagram_hunt::{AnagramSearcher, SearchOutcome};
//!
//! let mut phrases = vec![];
//! let mut searcher = AnagramSearcher::new(["safe", "fairy", "tales"], "rail safety", |p: &str| {
//!     phrases.push(p.to_owned());
//!     ControlFlow::Continue(())
//! });
//! assert_eq!(searcher.search(3), SearchOutcome::Exhausted);
//! drop(searcher);
//! assert_eq!(phrases, ["fairy tales", "tales fairy"]);
//! ```

pub mod dictionary;
pub mod error;
pub mod histogram;
pub mod permutation;
pub mod search;
pub mod verifier;
pub mod word;

pub use dictionary::{load_word_list, prepare, Candidates};
pub use error::{Error, Result};
pub use histogram::{Histogram, MatchStatus};
pub use search::{AnagramSearcher, PhraseSink, SearchOutcome};
pub use verifier::MatchVerifier;
pub use word::Word;
