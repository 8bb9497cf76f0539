//! Capture file layout.
//!
//! Sessions are grouped by product under the base (home) directory:
//!
//! ```text
//! ~ -+- general   -+- host1_2022-03-29_10:15:00.capture
//!    |             +- host9_2022-03-29_11:02:41.capture
//!    |
//!    +- projectXY -+- host11_2022-03-30_08:00:12.capture
//! ```
//!
//! The clock and the base directory are parameters; nothing in this module
//! reads the environment except [`home_dir`], which callers resolve once.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{CoreError, Result};

pub const DEFAULT_PRODUCT: &str = "general";
pub const CAPTURE_EXTENSION: &str = "capture";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

// ════════════════════════════════════════════════════════════════════
// Data types
// ════════════════════════════════════════════════════════════════════

/// Who is being captured, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    host_name: String,
    product: String,
    timestamp: NaiveDateTime,
}

impl SessionIdentity {
    pub fn new(
        host_name: impl Into<String>,
        product: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            host_name: host_name.into(),
            product: product.into(),
            timestamp,
        }
    }

    /// Identity stamped with the local wall-clock time.
    pub fn now(host_name: impl Into<String>, product: impl Into<String>) -> Self {
        Self::new(host_name, product, chrono::Local::now().naive_local())
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePath {
    pub directory: PathBuf,
    pub file_name: String,
}

impl CapturePath {
    pub fn full_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Outcome of [`ensure_directory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    AlreadyExists,
}

// ════════════════════════════════════════════════════════════════════
// Path building
// ════════════════════════════════════════════════════════════════════

/// Derive `<base_dir>/<product>/<host>_<YYYY-MM-DD>_<HH:MM:SS>.capture`.
pub fn build_capture_path(identity: &SessionIdentity, base_dir: &Path) -> CapturePath {
    let directory = base_dir.join(&identity.product);
    let file_name = format!(
        "{}_{}_{}.{}",
        identity.host_name,
        identity.timestamp.format(DATE_FORMAT),
        identity.timestamp.format(TIME_FORMAT),
        CAPTURE_EXTENSION
    );

    tracing::debug!(
        directory = %directory.display(),
        file_name = %file_name,
        "derived capture path"
    );

    CapturePath {
        directory,
        file_name,
    }
}

// ════════════════════════════════════════════════════════════════════
// Directory provisioning
// ════════════════════════════════════════════════════════════════════

/// Make sure `directory` exists. Only the last component is created; the
/// parent has to be there already.
pub fn ensure_directory(directory: &Path) -> Result<Provisioned> {
    if directory.is_dir() {
        return Ok(Provisioned::AlreadyExists);
    }

    match std::fs::create_dir(directory) {
        Ok(()) => {
            tracing::info!(directory = %directory.display(), "created capture directory");
            Ok(Provisioned::Created)
        }
        // Lost a race with another process creating the same directory.
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && directory.is_dir() => {
            Ok(Provisioned::AlreadyExists)
        }
        Err(source) => Err(CoreError::Filesystem {
            path: directory.to_path_buf(),
            source,
        }),
    }
}

/// The current user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(CoreError::HomeDirUnavailable)
}
