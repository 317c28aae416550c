mod cmd;
mod repo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fetch/check/test/fmt/clippy/build, then a smoke run).
    Preflight,
    /// Run the release binary against a build directory and check the JSON report.
    Smoke {
        /// Build directory to inspect (defaults to a scratch directory with a sample build)
        #[arg(long, value_name = "PATH")]
        dist: Option<std::path::PathBuf>,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight => {
            cmd::preflight::run()?;
        }
        Command::Smoke { dist } => {
            cmd::smoke::run(dist)?;
        }
    }
    Ok(())
}
