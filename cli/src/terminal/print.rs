use std::fmt::Display;
use std::io::{self, Write};

use crate::terminal::colors;
use colored::*;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

/// Prepares the console: ANSI sequences on Windows, plain text when stdout is
/// not a terminal.
pub fn initialize() {
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);

    if !console::Term::stdout().is_term() {
        colored::control::set_override(false);
    }
}

pub fn banner(out: &mut impl Write, no_banner: bool) -> io::Result<()> {
    if no_banner {
        return Ok(());
    }

    let text_content: String = format!("⟦ HOUSING v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    writeln!(out, "{}{}{}", sep, text, sep)
}

pub fn header(out: &mut impl Write, msg: &str) -> io::Result<()> {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    writeln!(out, "{}", line)
}

pub fn fat_separator(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR))
}

pub fn menu_entry(out: &mut impl Write, number: u32, label: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}{} {}",
        number.to_string().color(colors::ACCENT),
        ".".color(colors::SEPARATOR),
        label.color(colors::TEXT_DEFAULT)
    )
}

/// Writes `msg` without a line break and flushes, leaving the cursor after it.
pub fn prompt(out: &mut impl Write, msg: &str) -> io::Result<()> {
    write!(out, "{} {}", ">".color(colors::SEPARATOR), msg.color(colors::TEXT_DEFAULT))?;
    out.flush()
}

pub fn success(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "[+]".green().bold(), msg.color(colors::TEXT_DEFAULT))
}

pub fn error<E: Display>(out: &mut impl Write, err: &E) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}",
        "[-]".color(colors::ERROR).bold(),
        "Error:".color(colors::ERROR),
        err.to_string().color(colors::TEXT_DEFAULT)
    )
}

pub fn aligned_line<V>(out: &mut impl Write, key_width: usize, key: &str, value: V) -> io::Result<()>
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.chars().count()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    writeln!(
        out,
        "{} {}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        colon,
        value
    )
}

pub fn as_tree_one_level(out: &mut impl Write, key_value_pair: Vec<(String, ColoredString)>) -> io::Result<()> {
    let key_width: usize = key_value_pair
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(key_width - key.chars().count());
        writeln!(
            out,
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        )?;
    }
    Ok(())
}
