pub mod console;
pub mod logging;
pub mod wifi_qr;
