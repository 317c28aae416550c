//! Entry point for dist-status.
use std::process::ExitCode;

use clap::Parser;
use dist_status::{
    cli::{execute_report, ReportArgs, RuntimeExit},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let profile = ReportArgs::parse().into_profile();

    let outcome = execute_report(&profile).map_err(RuntimeExit::from_error)?;
    print!("{}", outcome.output);
    if !outcome.output.ends_with('\n') {
        println!();
    }

    if profile.require_build && !outcome.build_found {
        return Err(RuntimeExit::build_missing());
    }
    Ok(())
}
