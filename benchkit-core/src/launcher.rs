//! Session launcher.
//!
//! Builds the terminal-emulator command line for a capture session and hands
//! it to a [`TerminalRunner`]. The emulator owns the terminal and writes the
//! capture file itself; this module never reads it back.

use std::borrow::Cow;
use std::process::Command;

use benchkit_io::DeviceConfig;

use crate::capture::CapturePath;
use crate::error::{CoreError, Result};

pub const DEFAULT_EMULATOR: &str = "minicom";

/// A fully assembled emulator command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl TerminalInvocation {
    /// `<program> -D <device> -b <baud> -C <capture file> <session name>`
    pub fn new(
        program: impl Into<String>,
        device: &DeviceConfig,
        capture: &CapturePath,
        session_name: &str,
    ) -> Self {
        let args = vec![
            "-D".to_string(),
            device.device_path.clone(),
            "-b".to_string(),
            device.baud_rate.to_string(),
            "-C".to_string(),
            capture.full_path().to_string_lossy().into_owned(),
            session_name.to_string(),
        ];

        Self {
            program: program.into(),
            args,
        }
    }
}

/// Renders as a POSIX shell command line that can be pasted back as-is.
impl std::fmt::Display for TerminalInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

fn shell_quote(arg: &str) -> Cow<'_, str> {
    let needs_quotes = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\' | '$' | '`'));
    if !needs_quotes {
        return Cow::Borrowed(arg);
    }
    // Single quotes: close, escaped quote, reopen.
    Cow::Owned(format!("'{}'", arg.replace('\'', r#"'\''"#)))
}

/// Runs an emulator to completion and reports its exit code.
///
/// `Ok(None)` means the child ended without an exit code (killed by a signal).
pub trait TerminalRunner {
    fn run(&self, invocation: &TerminalInvocation) -> std::io::Result<Option<i32>>;
}

impl<R: TerminalRunner + ?Sized> TerminalRunner for &R {
    fn run(&self, invocation: &TerminalInvocation) -> std::io::Result<Option<i32>> {
        (**self).run(invocation)
    }
}

/// Spawns the emulator as a real child process with the caller's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl TerminalRunner for ProcessRunner {
    fn run(&self, invocation: &TerminalInvocation) -> std::io::Result<Option<i32>> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()?;
        Ok(status.code())
    }
}

#[derive(Debug)]
pub struct SessionLauncher<R> {
    program: String,
    runner: R,
}

impl SessionLauncher<ProcessRunner> {
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_runner(program, ProcessRunner)
    }
}

impl<R: TerminalRunner> SessionLauncher<R> {
    pub fn with_runner(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn invocation(
        &self,
        device: &DeviceConfig,
        capture: &CapturePath,
        host_name: &str,
    ) -> TerminalInvocation {
        TerminalInvocation::new(self.program.clone(), device, capture, host_name)
    }

    /// Run one capture session. Blocks until the user quits the emulator.
    pub fn launch(
        &self,
        device: &DeviceConfig,
        capture: &CapturePath,
        host_name: &str,
    ) -> Result<()> {
        let invocation = self.invocation(device, capture, host_name);
        tracing::info!(command = %invocation, "starting capture session");

        let code = self
            .runner
            .run(&invocation)
            .map_err(|source| CoreError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        match code {
            Some(0) => {
                tracing::info!("capture session ended");
                Ok(())
            }
            code => {
                tracing::warn!(?code, "terminal emulator exited abnormally");
                Err(CoreError::ExternalProcess {
                    program: invocation.program,
                    code,
                })
            }
        }
    }
}
