//! # benchkit IO
//!
//! The Hardware Bridge.
//! Describes which serial device a capture session talks to and lists the
//! ports the host currently exposes. The byte stream itself is owned by the
//! external terminal emulator; nothing here opens a port.

use serialport::SerialPortType;

pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Configuration for a Serial Connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    pub device_path: String,
    pub baud_rate: u32,
}

impl DeviceConfig {
    pub fn new(device_path: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            device_path: device_path.into(),
            baud_rate,
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE, DEFAULT_BAUD_RATE)
    }
}

/// What kind of bus a discovered port sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortKind {
    Usb {
        vid: u16,
        pid: u16,
        product: Option<String>,
    },
    Pci,
    Bluetooth,
    Unknown,
}

impl std::fmt::Display for PortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortKind::Usb { vid, pid, product } => {
                write!(f, "usb {:04x}:{:04x}", vid, pid)?;
                if let Some(product) = product {
                    write!(f, " {}", product)?;
                }
                Ok(())
            }
            PortKind::Pci => f.write_str("pci"),
            PortKind::Bluetooth => f.write_str("bluetooth"),
            PortKind::Unknown => f.write_str("unknown"),
        }
    }
}

impl From<SerialPortType> for PortKind {
    fn from(kind: SerialPortType) -> Self {
        match kind {
            SerialPortType::UsbPort(info) => PortKind::Usb {
                vid: info.vid,
                pid: info.pid,
                product: info.product,
            },
            SerialPortType::PciPort => PortKind::Pci,
            SerialPortType::BluetoothPort => PortKind::Bluetooth,
            SerialPortType::Unknown => PortKind::Unknown,
        }
    }
}

/// One serial port advertised by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSummary {
    pub name: String,
    pub kind: PortKind,
}

impl std::fmt::Display for PortSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  {}", self.name, self.kind)
    }
}

/// Scan the host for serial ports, sorted by name.
pub fn available_ports() -> anyhow::Result<Vec<PortSummary>> {
    let ports = serialport::available_ports()
        .map_err(|e| anyhow::anyhow!("Scan failed: {}", e))?;

    let mut summaries: Vec<PortSummary> = ports
        .into_iter()
        .map(|p| PortSummary {
            name: p.port_name,
            kind: p.port_type.into(),
        })
        .collect();
    summaries.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!(count = summaries.len(), "serial port scan finished");
    Ok(summaries)
}
