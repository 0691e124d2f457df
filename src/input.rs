use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, Write};

/// What came back from one read at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// Ctrl+C while waiting for input.
    Interrupted,
    /// The input stream was closed.
    Eof,
}

pub trait LineSource {
    /// Shows `prompt` and blocks until a full line (or a signal) arrives.
    fn read_line(&mut self, prompt: &str) -> io::Result<Line>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> io::Result<Line> {
        match self.readline(prompt) {
            Ok(line) => Ok(Line::Text(line)),
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::other(e)),
        }
    }
}

/// Line source over a plain reader, echoing prompts to `writer`.
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> LineSource for Prompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Line> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(Line::Eof);
        }

        let input = input.strip_suffix('\n').unwrap_or(&input);
        let input = input.strip_suffix('\r').unwrap_or(input);
        Ok(Line::Text(input.to_string()))
    }
}
