mod cli;

use clap::Parser;
use cli::Cli;

fn main() {
    env_logger::init();

    if let Err(e) = cli::run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
