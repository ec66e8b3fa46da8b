//! # Celesto CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only starts the runtime, invokes `cli::run()` and handles process
//! termination. Everything from `celesto::api` inward is UI agnostic; see the
//! library docs for the layering.
//!
//! The runtime is single threaded. A run issues at most one generation
//! request and awaits each step in order.

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
