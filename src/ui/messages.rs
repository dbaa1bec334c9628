//! Console output of the CLI commands. The web server logs through `tracing`.

use std::fmt::Display;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }

    fn line(self, msg: &dyn Display) -> String {
        let (color, icon) = self.style();
        format!("{color}{BOLD}{icon} {RESET}{msg}")
    }
}

pub fn info(msg: impl Display) {
    println!("{}", Level::Info.line(&msg));
}

pub fn success(msg: impl Display) {
    println!("{}", Level::Success.line(&msg));
}

pub fn warning(msg: impl Display) {
    println!("{}", Level::Warning.line(&msg));
}

/// Errors go to stderr so `kmlog ... | less` keeps them visible.
pub fn error(msg: impl Display) {
    eprintln!("{}", Level::Error.line(&msg));
}

/// Section title above listings such as `kmlog log --print`.
pub fn header(title: impl Display) {
    println!("{BOLD}\x1b[34m── {title} ──{RESET}\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_keeps_message_after_reset() {
        let line = Level::Error.line(&"Invalid date: 32012014");
        assert!(line.ends_with(&format!("{RESET}Invalid date: 32012014")));
        assert!(line.starts_with("\x1b[31m"));
    }
}
