use clap::Parser;
use std::process::ExitCode;
use xwc_cli::args::Args;
use xwc_cli::config::{Config, PresentationOptions};
use xwc_cli::{error, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let presentation = PresentationOptions::from(&args);
    // Convert args to engine::Config
    let config = Config::from(args);

    match xwc_cli::run(&config, &presentation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("xwc: {}", error::report(&e));
            ExitCode::FAILURE
        }
    }
}
