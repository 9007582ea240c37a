//! `display-image` entry point - the composition root.
//!
//! Decodes the image named by the single positional argument and shows it
//! until a key is pressed or the window is closed.

use std::process::ExitCode;

use nativeprobe_cli::{CliConfig, guard, handlers, init_tracing, report};

fn main() -> ExitCode {
    init_tracing();

    // Load environment variables
    dotenvy::dotenv().ok();

    println!("Starting...");

    let args: Vec<String> = std::env::args().collect();
    let result = guard(|| handlers::display::execute(&args, CliConfig::from_env));

    match result {
        Ok(_) => {
            println!("Exiting successfully!");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}
