//! Line-oriented prompts over any buffered reader.

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Reads answers from the player. Once input runs out, every prompt
/// returns `None`.
pub struct Console<R> {
    input: R,
    closed: bool,
}

impl<R: BufRead> Console<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            closed: false,
        }
    }

    /// Print `prompt` and read one trimmed line.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        if self.closed {
            return None;
        }
        print!("{prompt} ");
        if let Err(err) = io::stdout().flush() {
            tracing::warn!("stdout: {err}");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                println!();
                self.closed = true;
                None
            }
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                tracing::warn!("stdin: {err}");
                self.closed = true;
                None
            }
        }
    }

    /// Ask for an integer in `lo..=hi`, re-prompting until one is given.
    pub fn ask_int(&mut self, prompt: &str, lo: usize, hi: usize) -> Option<usize> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<usize>() {
                Ok(n) if (lo..=hi).contains(&n) => return Some(n),
                _ => println!(
                    "{}",
                    format!("Enter a number between {lo} and {hi}.").yellow()
                ),
            }
        }
    }

    /// Ask for a non-empty name.
    pub fn ask_name(&mut self, prompt: &str) -> Option<String> {
        loop {
            let line = self.read_line(prompt)?;
            if !line.is_empty() {
                return Some(line);
            }
            println!("{}", "The name cannot be empty.".yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(text: &str) -> Console<Cursor<Vec<u8>>> {
        Console::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn ask_int_reprompts_until_in_range() {
        let mut c = console("abc\n9\n0\n2\n");
        assert_eq!(c.ask_int(">", 1, 3), Some(2));
    }

    #[test]
    fn eof_ends_every_prompt() {
        let mut c = console("x\n");
        assert_eq!(c.ask_int(">", 1, 3), None);
        assert_eq!(c.read_line(">"), None);
    }

    #[test]
    fn ask_name_skips_blank_lines() {
        let mut c = console("\n   \n  Ana  \n");
        assert_eq!(c.ask_name("Name:"), Some("Ana".to_string()));
    }
}
