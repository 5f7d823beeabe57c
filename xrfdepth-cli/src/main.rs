mod cli;
mod commands;

use clap::Parser;
use colored::Colorize;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
