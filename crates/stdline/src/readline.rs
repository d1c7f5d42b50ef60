//! Interactive line input: prompting, confirmation, menus, password
//! input, and prompt history.
//!
//! Everything here is a thin layer over [`crate::read_line`], so the
//! newline-stripping and UTF-8-repair contract is identical. All calls
//! block; end-of-stream comes back as `None` (or a refusal, for
//! [`confirm`]).

use crate::error::Error;
use crate::read_line;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

// ── prompt(text) -> Option<String> ──

/// Show prompt text, read one stripped line from stdin (blocking).
pub fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().ok();
    read_line(true)
}

// ── confirm(text) -> bool ──

/// Prompt with " (y/n) " appended; `y`/`yes` (any case) confirms.
///
/// End-of-stream counts as a refusal.
pub fn confirm(text: &str) -> bool {
    match prompt(&format!("{} (y/n) ", text)) {
        Some(answer) => parse_confirm(&answer),
        None => false,
    }
}

// ── select(text, options) -> Option<usize> ──

/// Display a numbered list of options, prompt for a choice, return the
/// 0-based index. `None` for an invalid or absent answer.
pub fn select(text: &str, options: &[&str]) -> Option<usize> {
    println!("{}", text);
    for (i, opt) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, opt);
    }
    let answer = prompt("Choice: ")?;
    parse_choice(&answer, options.len())
}

// ── password(text) -> Option<String> ──

/// Prompt for input with echo disabled (raw mode via termios). Blocking.
#[cfg(unix)]
pub fn password(text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().ok();

    // SAFETY: tcgetattr/tcsetattr are safe with valid fd (stdin=0)
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) != 0 {
            // Not a terminal — fall back to a normal read
            return read_line(true);
        }

        let original = termios;
        termios.c_lflag &= !(libc::ECHO);
        libc::tcsetattr(0, libc::TCSANOW, &termios);

        let line = read_line(true);

        // Restore echo
        libc::tcsetattr(0, libc::TCSANOW, &original);
        println!(); // newline after hidden input

        line
    }
}

/// Prompt for input. Echo suppression is Unix-only; elsewhere this is a
/// plain visible prompt.
#[cfg(not(unix))]
pub fn password(text: &str) -> Option<String> {
    prompt(text)
}

fn parse_confirm(answer: &str) -> bool {
    let trimmed = answer.trim().to_lowercase();
    trimmed == "y" || trimmed == "yes"
}

fn parse_choice(answer: &str, len: usize) -> Option<usize> {
    match answer.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Some(n - 1),
        _ => None,
    }
}

// ── Readline: prompt history ──

/// A prompting session with history.
///
/// History is an owned, in-memory list; [`Readline::load_history`] and
/// [`Readline::save_history`] persist it one line per entry.
#[derive(Debug, Default)]
pub struct Readline {
    history: Vec<String>,
}

impl Readline {
    /// Create a session with empty history.
    pub fn new() -> Self {
        Readline::default()
    }

    /// Show prompt text, read one stripped line (blocking). Non-empty
    /// answers are recorded in history.
    pub fn prompt(&mut self, text: &str) -> Option<String> {
        let answer = prompt(text)?;
        if !answer.is_empty() {
            self.history.push(answer.clone());
        }
        Some(answer)
    }

    /// Add a line to the history.
    pub fn add_history(&mut self, line: impl Into<String>) {
        self.history.push(line.into());
    }

    /// Load history from a file, one line per entry, appending to
    /// whatever is already recorded.
    pub fn load_history(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::History {
            path: PathBuf::from(path),
            source,
        })?;
        for line in content.lines() {
            self.history.push(line.to_string());
        }
        Ok(())
    }

    /// Save history to a file, one line per entry.
    pub fn save_history(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let content = self.history.join("\n");
        std::fs::write(path, content).map_err(|source| Error::History {
            path: PathBuf::from(path),
            source,
        })
    }

    /// Clear all history entries.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Number of history entries.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The recorded history, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    // Note: the prompting paths (prompt, confirm, select, password) are
    // excluded because they block waiting for stdin. Answer parsing and
    // history are tested directly.

    use super::*;

    #[test]
    fn test_parse_confirm_accepts_y_and_yes() {
        assert!(parse_confirm("y"));
        assert!(parse_confirm("Y"));
        assert!(parse_confirm("yes"));
        assert!(parse_confirm("  YES "));
        assert!(!parse_confirm("n"));
        assert!(!parse_confirm("yeah"));
        assert!(!parse_confirm(""));
    }

    #[test]
    fn test_parse_choice_is_one_based_in_range() {
        assert_eq!(parse_choice("1", 3), Some(0));
        assert_eq!(parse_choice(" 3 ", 3), Some(2));
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("x", 3), None);
        assert_eq!(parse_choice("", 3), None);
    }

    #[test]
    fn test_history_add_clear_len() {
        let mut rl = Readline::new();
        assert_eq!(rl.history_len(), 0);
        rl.add_history("one");
        rl.add_history("two".to_string());
        assert_eq!(rl.history(), ["one", "two"]);
        rl.clear_history();
        assert_eq!(rl.history_len(), 0);
    }

    #[test]
    fn test_history_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history");

        let mut rl = Readline::new();
        rl.add_history("first");
        rl.add_history("second");
        rl.save_history(&path).unwrap();

        let mut loaded = Readline::new();
        loaded.add_history("preexisting");
        loaded.load_history(&path).unwrap();
        assert_eq!(loaded.history(), ["preexisting", "first", "second"]);
    }

    #[test]
    fn test_load_history_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");

        let mut rl = Readline::new();
        let err = rl.load_history(&path).unwrap_err();
        assert!(err.to_string().contains("absent"));
        assert_eq!(rl.history_len(), 0);
    }
}
