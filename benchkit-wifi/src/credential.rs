use crate::error::{Result, WifiError};

pub const DEFAULT_PASSPHRASE_LENGTH: usize = 16;

/// Largest byte count whose hex passphrase still fits a QR payload.
pub const MAX_PASSPHRASE_LENGTH: usize = 1024;

/// Draw `length` bytes from the OS random source and render them as
/// lowercase hex, so the passphrase is `2 * length` characters long.
pub fn generate_passphrase(length: usize) -> Result<String> {
    if length > MAX_PASSPHRASE_LENGTH {
        return Err(WifiError::PassphraseTooLong {
            length,
            max: MAX_PASSPHRASE_LENGTH,
        });
    }

    let mut bytes = vec![0u8; length];
    getrandom::fill(&mut bytes).map_err(|e| WifiError::Entropy(e.to_string()))?;
    Ok(hex::encode(bytes))
}
