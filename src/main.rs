use clap::Parser;
use targetreturn::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
