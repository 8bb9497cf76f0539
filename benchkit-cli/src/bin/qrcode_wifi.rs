use std::process::ExitCode;

use clap::Parser;

use benchkit_cli::logging::init_logging;
use benchkit_cli::wifi_qr::{ProvisionConfig, WifiArgs, provision};
use benchkit_wifi::{QrPngEncoder, generate_passphrase};

fn main() -> ExitCode {
    let args = WifiArgs::parse();
    init_logging(args.verbose);

    let config = ProvisionConfig::new(args, ".".into());
    match provision(config, generate_passphrase, &QrPngEncoder) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{:#}", err), "run failed");
            eprintln!("Whoops! {:#}", err);
            ExitCode::FAILURE
        }
    }
}
