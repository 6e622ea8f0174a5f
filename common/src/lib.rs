//! Shared building blocks for the housing workspace.
//!
//! * **[`config`]**: runtime configuration and the ledger policy knobs.
//! * **[`error`]**: the operator input error taxonomy.
//!
//! The crate also exports the [`success!`] logging macro, a thin wrapper around
//! `tracing::info!` that tags events with [`SUCCESS_TARGET`] so the terminal
//! formatter can give them their own symbol.

pub mod config;
pub mod error;

#[doc(hidden)]
pub use tracing as __tracing;

/// Target attached to events emitted through [`success!`].
pub const SUCCESS_TARGET: &str = "housing::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::SUCCESS_TARGET, $($arg)*)
    };
}
