//! Entry point for the writer daemon.

use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match datawriterd::run_daemon() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(io::stderr(), "datawriterd: {error}");
            ExitCode::FAILURE
        }
    }
}
