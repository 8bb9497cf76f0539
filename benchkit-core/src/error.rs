use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cannot create directory {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}", describe_code(.code))]
    ExternalProcess { program: String, code: Option<i32> },
}

impl CoreError {
    /// Process exit code the CLI should terminate with.
    ///
    /// A failing emulator's own code is passed through when it fits in a
    /// process exit status; everything else maps to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            CoreError::ExternalProcess {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "no exit status (terminated by signal)".to_string(),
    }
}
