//! Icon-prefixed, coloured one-line messages.
//! `info`, `success` and `header` print to stdout; `warning` and `error`
//! print to stderr.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

/// The text printed for `msg` at `level`, without the trailing newline.
pub fn line<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=========== {}{}\n", Level::Info.color(), BOLD, msg, RESET);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_is_icon_then_plain_message() {
        let l = line(Level::Warning, "Failed to save goal weight");
        assert!(l.starts_with("\x1b[33m\x1b[1m⚠️"));
        assert!(l.ends_with("\x1b[0m Failed to save goal weight"));
    }

    #[test]
    fn each_level_has_its_own_colour() {
        let colours: Vec<&str> = [Level::Info, Level::Success, Level::Warning, Level::Error]
            .into_iter()
            .map(Level::color)
            .collect();
        for (i, c) in colours.iter().enumerate() {
            assert!(!colours[i + 1..].contains(c));
        }
    }
}
