//! Console capability.
//!
//! The game core never touches stdin/stdout directly; it talks to a
//! [`Console`] handed in by the host. The host owns the real terminal
//! for the process lifetime; tests substitute [`ScriptedConsole`] with
//! canned responses.

use std::collections::VecDeque;
use std::io;

pub trait Console {
    /// Writes one line of output. Non-suspending.
    fn write_line(&mut self, line: &str);

    /// Prompts and blocks until a full input line is available.
    /// Returns the line without its trailing newline.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Deterministic console for tests: feeds queued responses and records
/// everything written.
pub struct ScriptedConsole {
    responses: VecDeque<String>,
    pub output: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.responses
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "response script exhausted"))
    }
}
