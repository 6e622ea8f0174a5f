//! # Operator Input Validation
//!
//! Pure parse-and-validate functions, one per prompt of the menu. Each takes the
//! line as typed (line ending already removed with [`trim_line_ending`]) and either
//! returns the parsed value or the [`InputError`] to show. The session decides
//! whether an error re-prompts or returns to the menu.

use std::str::FromStr;

use housing_common::error::InputError;
use rust_decimal::Decimal;

use crate::service::ServiceKind;

/// Largest amount accepted for a single service entry.
pub const MAX_AMOUNT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddResident,
    AddService,
    ResidentBill,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::AddResident,
        MenuChoice::AddService,
        MenuChoice::ResidentBill,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u32 {
        match self {
            MenuChoice::AddResident => 1,
            MenuChoice::AddService => 2,
            MenuChoice::ResidentBill => 3,
            MenuChoice::Exit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddResident => "Add resident",
            MenuChoice::AddService => "Add service",
            MenuChoice::ResidentBill => "Get resident bill",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Strips a trailing `\n` or `\r\n`, nothing else.
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Accepts exactly one ASCII digit naming a menu entry.
pub fn parse_menu_choice(line: &str) -> Result<MenuChoice, InputError> {
    let mut chars = line.chars();
    let digit = match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).ok_or(InputError::InvalidMenuChoice)?,
        _ => return Err(InputError::InvalidMenuChoice),
    };

    MenuChoice::ALL
        .into_iter()
        .find(|choice| choice.number() == digit)
        .ok_or(InputError::UnknownMenuChoice(digit))
}

pub fn validate_name(line: &str) -> Result<&str, InputError> {
    if line.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(line)
}

/// Leading whitespace is skipped; anything after the number makes the line invalid.
pub fn parse_service_selector(line: &str) -> Result<ServiceKind, InputError> {
    let selector: i64 = line
        .trim_start()
        .parse()
        .map_err(|_| InputError::NotANumber)?;

    ServiceKind::from_selector(selector).ok_or(InputError::UnknownService(selector))
}

/// Accepts a plain decimal number in `(0, MAX_AMOUNT]`: digits with at most one
/// `.`, optionally preceded by `-` so negatives are reported as out of range.
pub fn parse_amount(line: &str) -> Result<Decimal, InputError> {
    if !is_plain_decimal(line) {
        return Err(InputError::InvalidAmount);
    }
    let amount = Decimal::from_str(line).map_err(|_| InputError::InvalidAmount)?;

    if amount <= Decimal::ZERO || amount > Decimal::from(MAX_AMOUNT) {
        return Err(InputError::AmountOutOfRange { max: MAX_AMOUNT });
    }
    Ok(amount)
}

fn is_plain_decimal(line: &str) -> bool {
    let digits = line.strip_prefix('-').unwrap_or(line);
    digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().filter(|c| *c == '.').count() <= 1
        && digits.chars().any(|c| c.is_ascii_digit())
}
