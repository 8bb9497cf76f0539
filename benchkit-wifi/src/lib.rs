//! # benchkit Wi-Fi
//!
//! Passphrase generation and QR provisioning codes for wireless networks.
//!
//! Flow: [`generate_passphrase`] (unless the caller brings one) →
//! [`build_payload`] → [`PayloadEncoder::encode`] → [`write_code`].

pub mod credential;
pub mod encoder;
pub mod error;
pub mod payload;

pub use credential::{DEFAULT_PASSPHRASE_LENGTH, MAX_PASSPHRASE_LENGTH, generate_passphrase};
pub use encoder::{PayloadEncoder, QrPngEncoder, code_file_name, write_code};
pub use error::{Result, WifiError};
pub use payload::{DEFAULT_PROTOCOL, ProvisioningPayload, WifiCredential, build_payload};

/// Use the supplied passphrase verbatim, or generate one of `length` bytes
/// when none (or an empty one) was given.
pub fn resolve_passphrase<F>(supplied: Option<String>, length: usize, generate: F) -> Result<String>
where
    F: FnOnce(usize) -> Result<String>,
{
    match supplied {
        Some(passphrase) if !passphrase.is_empty() => Ok(passphrase),
        _ => generate(length),
    }
}
