//! `console` — run minicom against a serial device and keep its capture log
//! under `~/<product>/`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use benchkit_core::{
    CapturePath, CoreError, DEFAULT_EMULATOR, DEFAULT_PRODUCT, DeviceConfig, Provisioned,
    SessionIdentity, SessionLauncher, TerminalRunner, build_capture_path, ensure_directory,
};
use benchkit_io::{DEFAULT_BAUD_RATE, DEFAULT_DEVICE};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "console",
    version,
    about = "Capture serial console output with minicom",
    long_about = "Runs minicom against a serial device and stores the capture as \
                  ~/<product>/<name>_<YYYY-MM-DD>_<HH:MM:SS>.capture"
)]
pub struct ConsoleArgs {
    /// Machine name
    #[arg(required_unless_present = "list_devices")]
    pub name: Option<String>,

    /// Product or platform
    #[arg(short = 'p', long, default_value = DEFAULT_PRODUCT)]
    pub product: String,

    /// Set device name
    #[arg(short = 'D', long, default_value = DEFAULT_DEVICE)]
    pub device: String,

    /// Set baudrate
    #[arg(short = 'b', long, default_value_t = DEFAULT_BAUD_RATE)]
    pub baudrate: u32,

    /// Terminal emulator to run
    #[arg(long, env = "BENCHKIT_TERMINAL", default_value = DEFAULT_EMULATOR)]
    pub emulator: String,

    /// Print the command line instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// List serial ports and exit
    #[arg(long)]
    pub list_devices: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything one capture session needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    pub identity: SessionIdentity,
    pub base_dir: PathBuf,
    pub device: DeviceConfig,
    pub emulator: String,
    pub dry_run: bool,
}

impl CaptureConfig {
    pub fn new(args: ConsoleArgs, identity: SessionIdentity, base_dir: PathBuf) -> Self {
        Self {
            identity,
            base_dir,
            device: DeviceConfig::new(args.device, args.baudrate),
            emulator: args.emulator,
            dry_run: args.dry_run,
        }
    }
}

/// Entry point used by the binary: resolves the clock and home directory,
/// then runs the session with the real child-process runner.
pub fn run(args: ConsoleArgs, out: &mut impl Write) -> Result<()> {
    if args.list_devices {
        return list_devices(out);
    }

    let Some(name) = args.name.clone() else {
        anyhow::bail!("a machine name is required");
    };
    let identity = SessionIdentity::now(name, args.product.clone());
    let base_dir = benchkit_core::home_dir()?;
    let config = CaptureConfig::new(args, identity, base_dir);

    let launcher = SessionLauncher::new(config.emulator.clone());
    capture(&config, &launcher, out)
}

/// PathBuilder → DirectoryProvisioner → SessionLauncher.
pub fn capture<R: TerminalRunner>(
    config: &CaptureConfig,
    launcher: &SessionLauncher<R>,
    out: &mut impl Write,
) -> Result<()> {
    let capture: CapturePath = build_capture_path(&config.identity, &config.base_dir);
    let host_name = config.identity.host_name();

    if config.dry_run {
        writeln!(out, "Capture file : {}", capture.full_path().display())?;
        writeln!(
            out,
            "Command      : {}",
            launcher.invocation(&config.device, &capture, host_name)
        )?;
        return Ok(());
    }

    if ensure_directory(&capture.directory)? == Provisioned::AlreadyExists {
        writeln!(out, "Directory {} exists.", capture.directory.display())?;
    }
    out.flush()?;

    launcher.launch(&config.device, &capture, host_name)?;
    Ok(())
}

fn list_devices(out: &mut impl Write) -> Result<()> {
    let ports = benchkit_io::available_ports().context("cannot list serial ports")?;
    if ports.is_empty() {
        writeln!(out, "No serial ports found.")?;
    }
    for port in ports {
        writeln!(out, "{}", port)?;
    }
    Ok(())
}

/// Exit code for a failed run; an emulator's own failure code is preserved.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CoreError>()
        .map(CoreError::exit_code)
        .unwrap_or(1)
}
