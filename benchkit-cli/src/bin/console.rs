use std::process::ExitCode;

use clap::Parser;

use benchkit_cli::console::{self, ConsoleArgs};
use benchkit_cli::logging::init_logging;

fn main() -> ExitCode {
    let args = ConsoleArgs::parse();
    init_logging(args.verbose);

    let mut stdout = std::io::stdout().lock();
    match console::run(args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{:#}", err), "run failed");
            eprintln!("Whoops! {:#}", err);
            ExitCode::from(console::exit_code(&err))
        }
    }
}
