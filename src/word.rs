use std::fmt;

use crate::histogram::Histogram;

/// A dictionary word together with its letter histogram, computed once when
/// the word list is prepared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: Box<str>,
    histogram: Histogram,
}

impl Word {
    pub fn new(text: &str) -> Self {
        Word {
            text: text.into(),
            histogram: Histogram::from_text(text),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_text_and_counts() {
        let word = Word::new("safety");
        assert_eq!(word.to_string(), "safety");
        assert_eq!(word.len(), 6);
        assert_eq!(word.histogram().count('a'), 1);
        assert!(!word.is_empty());
        assert!(Word::new("").is_empty());
        assert_eq!(Word::new("über").len(), 4);
    }
}
