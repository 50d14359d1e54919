use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid target digest {value:?}: expected {expected} hex characters")]
    InvalidDigest { value: String, expected: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
