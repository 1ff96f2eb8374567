use clap::Parser;
use taskmark::cli::commands::Cli;
use taskmark::cli::handlers;

fn main() {
    taskmark::logging::init();
    let cli = Cli::parse();

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
