//! # Operator Input Errors
//!
//! Every way a line typed at the menu can be rejected. None of these are fatal:
//! the session prints the message and either re-prompts or returns to the menu.
//! The `Display` text of each variant is exactly what the operator sees.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Name cannot be empty.")]
    EmptyName,

    /// Menu input that is not a single digit.
    #[error("Enter a number from 1 to 4.")]
    InvalidMenuChoice,

    /// A single digit outside of the menu range.
    #[error("Unknown option {0}. Try again.")]
    UnknownMenuChoice(u32),

    /// Service selector with anything other than an integer on the line.
    #[error("Invalid input. Please enter a number only.")]
    NotANumber,

    #[error("Invalid service choice {0}. Try again.")]
    UnknownService(i64),

    #[error("Amount must be a number. Try again.")]
    InvalidAmount,

    #[error("Amount must be positive and no greater than {max}. Try again.")]
    AmountOutOfRange { max: u32 },
}
