//! # Housing CLI
//!
//! The operator-facing side of the tool: argument parsing, the interactive menu
//! session and everything that writes to the terminal.
//!
//! * **[`commands`]**: command line definition and the menu [`commands::session::Session`].
//! * **[`terminal`]**: colours, printing helpers and the log formatter.

pub mod commands;
pub mod terminal;
