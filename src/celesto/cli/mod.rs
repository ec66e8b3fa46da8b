//! # CLI Layer
//!
//! This module is **one possible UI client** for celesto. It is the only place
//! in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing and `.env` loading
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Flow
//!
//! 1. Parse arguments (`setup.rs`)
//! 2. Load the env file named by `--env`, or `./.env` if there is one, then
//!    install the tracing subscriber so `CELESTO_LOG` can come from that file
//! 3. Build `CelestoApi` with the OpenAI provider, the file store and a
//!    `ConsoleNarrator` honoring `--verbose`
//! 4. Dispatch and print the result (`render.rs`)
//!
//! Running with no subcommand prints the banner and help.

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
