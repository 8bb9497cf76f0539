//! QR rendering.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;

use crate::error::{Result, WifiError};

/// Pixels per QR module.
const MODULE_SIZE: u32 = 10;

/// Turns a provisioning string into image bytes.
pub trait PayloadEncoder {
    fn encode(&self, text: &str) -> Result<Vec<u8>>;
}

/// Black-on-white PNG QR code with the standard four-module quiet zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrPngEncoder;

impl PayloadEncoder for QrPngEncoder {
    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let code = QrCode::new(text.as_bytes()).map_err(|e| WifiError::Encode(e.to_string()))?;

        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(MODULE_SIZE, MODULE_SIZE)
            .build();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| WifiError::Encode(e.to_string()))?;

        tracing::debug!(bytes = png.len(), "rendered QR code");
        Ok(png)
    }
}

/// `<ssid>.png`
pub fn code_file_name(ssid: &str) -> String {
    format!("{}.png", ssid)
}

/// Write the encoded image to `<dir>/<ssid>.png`, replacing any existing file.
pub fn write_code(dir: &Path, ssid: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(code_file_name(ssid));
    std::fs::write(&path, bytes).map_err(|source| WifiError::Filesystem {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote provisioning code");
    Ok(path)
}
