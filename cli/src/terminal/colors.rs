use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MONEY: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;
