//! # newday
//!
//! Creates today's dated note (`MM-DD-YYYY.typ`) in a notes directory and
//! registers it in the index file with an `#include` directive.
//!
//! ## Layers
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                   │
//! │  - flags, config loading, logging, colored output, exit   │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                             │
//! │  - holds the working directory and config                 │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                 │
//! │  - directory guard, note generation, index appending      │
//! │  - explicit inputs, `Result<CmdResult>` out, no printing  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The clock and the working directory are read once, in `main.rs`, and
//! passed down. Everything below the binary is deterministic given its
//! arguments and the filesystem.
//!
//! ## Soft conditions vs errors
//!
//! Running outside the notes directory, finding today's note already on disk,
//! or finding the include line already in the index are reported as
//! [`commands::CmdMessage`]s. Filesystem failures, including a missing index
//! file, are [`error::NewDayError`]s and end the run with a non-zero status.
//!
//! ## Module Overview
//!
//! - [`api`]: facade used by the binary
//! - [`commands`]: guard, generate and include
//! - [`format`]: date key, heading and directive text
//! - [`config`]: `config.json` handling
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
