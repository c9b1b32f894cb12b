//! # Specfilter CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/specfilter-cli/src/cli/)                 │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - logging, config and catalog wiring (mod.rs)              │
//! │  - text / JSON rendering (render.rs)                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/specfilter/src/api.rs)                   │
//! │  - Builds specifications from Criteria                      │
//! │  - Returns structured `Selection` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI layer owns every user-facing concern: argument parsing, logging
//! setup, config resolution, error reporting and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
