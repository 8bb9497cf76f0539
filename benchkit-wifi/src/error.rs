use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WifiError>;

#[derive(Debug, Error)]
pub enum WifiError {
    #[error("random source unavailable: {0}")]
    Entropy(String),

    #[error("passphrase length {length} exceeds the maximum of {max} bytes")]
    PassphraseTooLong { length: usize, max: usize },

    #[error("cannot encode provisioning code: {0}")]
    Encode(String),

    #[error("cannot write {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
