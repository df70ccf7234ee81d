use std::{io, process};

use clap::Parser;
use perfgate::cli::{Args, run};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    let stdout = io::stdout();
    let code = match run(&args, &mut stdout.lock()) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };
    process::exit(code);
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
