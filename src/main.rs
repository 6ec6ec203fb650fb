//! docindex CLI binary entry point.
//! Resolves configuration, runs generation, and prints results.

use clap::Parser;
use docindex::cli::{Cli, Commands, GenerateArgs};
use docindex::models::Status;
use docindex::{config, generate, output, utils};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Some(Commands::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Generate(args)) => run(args),
        None => run(GenerateArgs::default()),
    }
}

fn run(args: GenerateArgs) {
    let eff = match config::resolve_effective(&args.into()) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };
    if eff.output != "json" && eff.config_file.is_none() {
        eprintln!(
            "{} No docindex.toml found; using defaults.",
            utils::note_prefix()
        );
    }
    let result = match generate::run_generate(&eff) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };
    output::print_generate(&result, &eff.output);
    if result.status == Status::Stale {
        std::process::exit(1);
    }
}
