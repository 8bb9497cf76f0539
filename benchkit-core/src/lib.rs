pub mod capture;
pub mod error;
pub mod launcher;

// Re-export the pieces the binaries wire together.
pub use capture::{
    CapturePath, DEFAULT_PRODUCT, Provisioned, SessionIdentity, build_capture_path,
    ensure_directory, home_dir,
};
pub use error::{CoreError, Result};
pub use launcher::{
    DEFAULT_EMULATOR, ProcessRunner, SessionLauncher, TerminalInvocation, TerminalRunner,
};

pub use benchkit_io::DeviceConfig;
