use std::collections::HashSet;
use std::marker::PhantomData;
use std::num::NonZeroUsize;
use std::ops::ControlFlow;
use std::path::Path;

use digest::Digest;
use log::{debug, info};
use md5::Md5;

use crate::dictionary::load_word_list;
use crate::error::{Error, Result};
use crate::search::PhraseSink;

pub fn digest_hex<D: Digest>(phrase: &str) -> String {
    hex::encode(D::digest(phrase.as_bytes()))
}

/// Normalises a target digest to lowercase and checks that it is the hex
/// form of a `D` output.
pub fn parse_digest<D: Digest>(value: &str) -> Result<String> {
    let expected = <D as Digest>::output_size() * 2;
    let normalised = value.trim().to_ascii_lowercase();
    match hex::decode(&normalised) {
        Ok(bytes) if bytes.len() * 2 == expected => Ok(normalised),
        _ => Err(Error::InvalidDigest {
            value: value.to_owned(),
            expected,
        }),
    }
}

pub fn load_digests<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    load_word_list(path)
}

/// Hashes every phrase it is given and reports those whose digest is one of
/// the targets. Once `stop_after` matches have been reported it asks the
/// search to stop.
pub struct MatchVerifier<R, D = Md5> {
    targets: HashSet<String>,
    enough: Option<NonZeroUsize>,
    found: usize,
    report: R,
    digest: PhantomData<D>,
}

impl<R: FnMut(&str)> MatchVerifier<R, Md5> {
    pub fn new<I, H>(digests: I, report: R) -> Result<Self>
    where
        I: IntoIterator<Item = H>,
        H: AsRef<str>,
    {
        MatchVerifier::with_digest(digests, report)
    }
}

impl<R: FnMut(&str), D: Digest> MatchVerifier<R, D> {
    pub fn with_digest<I, H>(digests: I, report: R) -> Result<Self>
    where
        I: IntoIterator<Item = H>,
        H: AsRef<str>,
    {
        let targets = digests
            .into_iter()
            .map(|value| parse_digest::<D>(value.as_ref()))
            .collect::<Result<HashSet<_>>>()?;
        debug!("verifier holds {} target digests", targets.len());

        Ok(MatchVerifier {
            targets,
            enough: None,
            found: 0,
            report,
            digest: PhantomData,
        })
    }

    /// Stop the search once `enough` matches were found; 0 never stops.
    pub fn stop_after(mut self, enough: usize) -> Self {
        self.enough = NonZeroUsize::new(enough);
        self
    }

    pub fn found(&self) -> usize {
        self.found
    }

    pub fn is_satisfied(&self) -> bool {
        self.enough.map_or(false, |enough| self.found >= enough.get())
    }

    pub fn check(&mut self, phrase: &str) -> ControlFlow<()> {
        if !self.targets.contains(&digest_hex::<D>(phrase)) {
            return ControlFlow::Continue(());
        }

        self.found += 1;
        info!("match #{}: {:?}", self.found, phrase);
        (self.report)(phrase);

        if self.is_satisfied() {
            info!("found {} matches, stopping", self.found);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

impl<R: FnMut(&str), D: Digest> PhraseSink for MatchVerifier<R, D> {
    fn accept(&mut self, phrase: &str) -> ControlFlow<()> {
        self.check(phrase)
    }
}
