//! # Stockroom Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           stockroom                                     │
//! │                                                                         │
//! │  main.rs ────► logging, argument parsing, exit code                    │
//! │  lib.rs ─────► startup (connect, migrate, seed, refresh) and commands  │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                  stockroom.db (SQLite, WAL mode)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::process::ExitCode;

use stockroom_lib::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    stockroom_lib::init_tracing();

    let cli = Cli::parse();
    match stockroom_lib::run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err.message);
            ExitCode::FAILURE
        }
    }
}
