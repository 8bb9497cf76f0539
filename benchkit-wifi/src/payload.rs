//! Provisioning payload.
//!
//! The grammar read by phone cameras and most QR scanners:
//!
//! ```text
//! WIFI:S:<SSID>;T:<WEP|WPA|blank>;P:<PASSWORD>;H:<true|false>;;
//! ```
//!
//! Values are inserted verbatim. An SSID or passphrase containing `;`, `:`,
//! `"` or `\` produces a payload scanners will misread.

pub const DEFAULT_PROTOCOL: &str = "WPA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredential {
    pub ssid: String,
    pub security_protocol: String,
    pub passphrase: String,
    pub hidden: bool,
}

/// Wire form of a [`WifiCredential`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningPayload(String);

impl ProvisioningPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ProvisioningPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn build_payload(credential: &WifiCredential) -> ProvisioningPayload {
    ProvisioningPayload(format!(
        "WIFI:S:{};T:{};P:{};H:{};;",
        credential.ssid, credential.security_protocol, credential.passphrase, credential.hidden
    ))
}
