use clap::Parser;
use imgfetch_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible.
    logging::init_logging(cli.verbose);

    let code = match cli.run() {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("imgfetch error: {:#}", err);
            cli::EXIT_NO_URL
        }
    };
    std::process::exit(code);
}
