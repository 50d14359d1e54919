use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{AddAssign, SubAssign};

const ASCII_SLOTS: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    Valid,
    Incomplete,
    Overflow,
}

/// Counts of every non-whitespace character in some text. ASCII goes in a
/// flat table so the search never allocates; anything else spills into a map.
#[derive(Clone, PartialEq, Eq)]
pub struct Histogram {
    ascii: [u32; ASCII_SLOTS],
    // Never holds a zero count, so derived equality stays exact.
    wide: BTreeMap<char, u32>,
}

impl Histogram {
    pub fn new() -> Self {
        Histogram {
            ascii: [0; ASCII_SLOTS],
            wide: BTreeMap::new(),
        }
    }

    /// Counts every character of `text` except whitespace.
    pub fn from_text(text: &str) -> Self {
        let mut histogram = Histogram::new();
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            histogram.add_char(c, 1);
        }
        histogram
    }

    fn add_char(&mut self, c: char, n: u32) {
        if c.is_ascii() {
            self.ascii[c as usize] += n;
        } else {
            *self.wide.entry(c).or_insert(0) += n;
        }
    }

    fn remove_char(&mut self, c: char, n: u32) {
        if c.is_ascii() {
            let slot = &mut self.ascii[c as usize];
            debug_assert!(*slot >= n, "removing more {:?} than counted", c);
            *slot -= n;
        } else if let Some(count) = self.wide.get_mut(&c) {
            debug_assert!(*count >= n, "removing more {:?} than counted", c);
            *count -= n;
            if *count == 0 {
                self.wide.remove(&c);
            }
        }
    }

    pub fn count(&self, c: char) -> u32 {
        if c.is_ascii() {
            self.ascii[c as usize]
        } else {
            self.wide.get(&c).copied().unwrap_or(0)
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.count(c) > 0
    }

    pub fn is_empty(&self) -> bool {
        self.ascii.iter().all(|&n| n == 0) && self.wide.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.ascii.iter().sum::<u32>() + self.wide.values().sum::<u32>()
    }

    /// Characters with a non-zero count, ASCII first, each in code point order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        let ascii = self
            .ascii
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(code, &n)| (char::from(code as u8), n));
        ascii.chain(self.wide.iter().map(|(&c, &n)| (c, n)))
    }

    pub fn combine(&self, other: &Histogram) -> Histogram {
        let mut sum = self.clone();
        sum += other;
        sum
    }

    /// Only characters present in `target` are examined, so words must
    /// already be restricted to the target's alphabet.
    pub fn compare(&self, target: &Histogram) -> MatchStatus {
        let mut incomplete = false;
        for (c, wanted) in target.iter() {
            match self.count(c).cmp(&wanted) {
                Ordering::Greater => return MatchStatus::Overflow,
                Ordering::Less => incomplete = true,
                Ordering::Equal => {}
            }
        }
        if incomplete {
            MatchStatus::Incomplete
        } else {
            MatchStatus::Valid
        }
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Histogram::new()
    }
}

impl<'a> AddAssign<&'a Histogram> for Histogram {
    fn add_assign(&mut self, other: &'a Histogram) {
        for (slot, n) in self.ascii.iter_mut().zip(other.ascii.iter()) {
            *slot += n;
        }
        for (&c, &n) in &other.wide {
            self.add_char(c, n);
        }
    }
}

impl<'a> SubAssign<&'a Histogram> for Histogram {
    fn sub_assign(&mut self, other: &'a Histogram) {
        for (slot, n) in self.ascii.iter_mut().zip(other.ascii.iter()) {
            debug_assert!(*slot >= *n);
            *slot -= n;
        }
        for (&c, &n) in &other.wide {
            self.remove_char(c, n);
        }
    }
}

impl fmt::Debug for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
