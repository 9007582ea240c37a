//! `compute-probe` entry point.
//!
//! Acquires and releases a GPU handle once, then prints the greeting the
//! probe hands back. A GPU that cannot be initialised is reported in the
//! status line and still exits 0.

use std::process::ExitCode;

use nativeprobe_cli::{guard, handlers, init_tracing, report};

fn main() -> ExitCode {
    init_tracing();
    dotenvy::dotenv().ok();

    match guard(|| Ok(handlers::probe::execute())) {
        Ok(greeting) => {
            println!("{greeting}");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}
