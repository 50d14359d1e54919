use std::ops::ControlFlow;

use itertools::Itertools;
use log::trace;

use crate::search::PhraseSink;
use crate::word::Word;

pub fn join_phrase<W: AsRef<str>>(words: &[W]) -> String {
    let mut phrase = String::new();
    for word in words {
        let word = word.as_ref().trim();
        if word.is_empty() { continue }
        if !phrase.is_empty() {
            phrase.push(' ');
        }
        phrase.push_str(word);
    }
    phrase
}

/// Hands every ordering of `combination` to `sink`, stopping as soon as the
/// sink asks to.
///
/// Orderings are generated by position, so a word that occurs twice yields
/// value-identical phrases; they are all passed on.
pub fn emit<S: PhraseSink + ?Sized>(combination: &[&Word], sink: &mut S) -> ControlFlow<()> {
    for ordering in combination.iter().permutations(combination.len()) {
        let phrase = join_phrase(&ordering);
        trace!("emitting {:?}", phrase);
        sink.accept(&phrase)?;
    }
    ControlFlow::Continue(())
}
