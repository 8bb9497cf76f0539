//! `qrcode-wifi` — passphrase + QR provisioning code for a wireless network.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clap::builder::RangedU64ValueParser;

use benchkit_wifi::{
    DEFAULT_PASSPHRASE_LENGTH, DEFAULT_PROTOCOL, MAX_PASSPHRASE_LENGTH, PayloadEncoder,
    WifiCredential, build_payload, code_file_name, resolve_passphrase, write_code,
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "qrcode-wifi",
    version,
    about = "Generate a passphrase and QR code for a wireless network"
)]
pub struct WifiArgs {
    /// The service set identifier, the name of the wireless network
    #[arg(value_name = "NAME")]
    pub ssid: String,

    /// Security protocol like WEP, WPA, et cetera
    #[arg(short = 'p', long, value_name = "PROTO", default_value = DEFAULT_PROTOCOL)]
    pub protocol: String,

    /// The passphrase of the wireless network (generated when omitted)
    #[arg(short = 'P', long, value_name = "PASS")]
    pub passphrase: Option<String>,

    /// Number of random bytes in a generated passphrase
    #[arg(
        short = 'l',
        long,
        value_name = "N",
        default_value_t = DEFAULT_PASSPHRASE_LENGTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_PASSPHRASE_LENGTH as u64)
    )]
    pub length: usize,

    /// Whether the wireless network is hidden
    #[arg(long)]
    pub hidden: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    pub ssid: String,
    pub protocol: String,
    pub passphrase: Option<String>,
    pub length: usize,
    pub hidden: bool,
    pub output_dir: PathBuf,
}

impl ProvisionConfig {
    pub fn new(args: WifiArgs, output_dir: PathBuf) -> Self {
        Self {
            ssid: args.ssid,
            protocol: args.protocol,
            passphrase: args.passphrase,
            length: args.length,
            hidden: args.hidden,
            output_dir,
        }
    }
}

/// What gets printed after the code is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub ssid: String,
    pub passphrase: String,
    pub payload: String,
    pub file_name: String,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SSID         : {}", self.ssid)?;
        writeln!(f, "Passphrase   : {}", self.passphrase)?;
        writeln!(f, "QR Code      : {}", self.payload)?;
        writeln!(f, "QR Code file : {}", self.file_name)
    }
}

/// CredentialGenerator → ProvisioningPayloadBuilder → PayloadEncoder → file.
pub fn provision<G, E>(config: ProvisionConfig, generate: G, encoder: &E) -> Result<Report>
where
    G: FnOnce(usize) -> benchkit_wifi::Result<String>,
    E: PayloadEncoder,
{
    let passphrase = resolve_passphrase(config.passphrase, config.length, generate)?;

    let credential = WifiCredential {
        ssid: config.ssid,
        security_protocol: config.protocol,
        passphrase,
        hidden: config.hidden,
    };
    let payload = build_payload(&credential);
    tracing::debug!(payload = %payload, "built provisioning payload");

    let png = encoder.encode(payload.as_str())?;
    write_code(&config.output_dir, &credential.ssid, &png)?;

    Ok(Report {
        file_name: code_file_name(&credential.ssid),
        ssid: credential.ssid,
        passphrase: credential.passphrase,
        payload: payload.into_string(),
    })
}
