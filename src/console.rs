// src/console.rs
use std::io::{self, BufRead, Write};

/// The user-facing side of a run: status lines out, answers in.
/// The binary uses [`StdConsole`]; tests drive the runner with canned answers.
pub trait Console {
    /// Print one status or error line.
    fn say(&mut self, msg: &str);

    /// Show `prompt` and read one line of input, without the trailing newline.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn say(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        let mut out = io::stdout().lock();
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = s!();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
        }
        Ok(s!(line.trim_end_matches(['\r', '\n'])))
    }
}
