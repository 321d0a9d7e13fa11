use clap::Parser;
use sprig::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = sprig::tui::run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
