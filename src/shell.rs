use crate::command::{Context, Executable, Flow};
use crate::config::ShellConfig;
use crate::error::{ErrorKind, ShellError};
use crate::input::{Line, LineSource};
use crate::parser::parse_command;
use crate::session::Session;
use crate::style::{Color, Palette};
use std::io::Write;

const FAREWELL: &str = "Goodbye!";
const INTERRUPT_HINT: &str = "Use \"exit\" to leave.";

/// How the loop came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exit,
    EndOfInput,
}

/// The read-dispatch loop. One line is read, parsed and run to completion
/// before the next prompt is shown.
pub struct Shell<L: LineSource, W: Write> {
    input: L,
    out: W,
    session: Session,
    palette: Palette,
}

impl<L: LineSource, W: Write> Shell<L, W> {
    pub fn new(input: L, out: W, session: Session, config: &ShellConfig) -> Self {
        Shell {
            input,
            out,
            session,
            palette: Palette::new(config.colorize),
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (L, W) {
        (self.input, self.out)
    }

    pub fn run(&mut self) -> anyhow::Result<Termination> {
        log::info!("session started in {}", self.session.cwd().display());

        let termination = loop {
            // The line editor writes its prompt straight to the terminal.
            self.out.flush()?;
            let prompt = self.session.prompt(&self.palette);
            match self.input.read_line(&prompt)? {
                Line::Text(line) => {
                    if self.dispatch(&line)? == Flow::Exit {
                        break Termination::Exit;
                    }
                }
                Line::Interrupted => self.say(Color::Red, INTERRUPT_HINT)?,
                Line::Eof => break Termination::EndOfInput,
            }
        };

        let color = match termination {
            Termination::Exit => Color::Red,
            Termination::EndOfInput => Color::Blue,
        };
        self.say(color, FAREWELL)?;
        log::info!("session terminated: {termination:?}");
        Ok(termination)
    }

    fn dispatch(&mut self, line: &str) -> anyhow::Result<Flow> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                log::trace!("blank line");
                return Ok(Flow::Continue);
            }
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };

        log::debug!("dispatching {}", command.name());
        let mut ctx = Context {
            session: &mut self.session,
            palette: self.palette,
            out: &mut self.out,
            input: &mut self.input,
        };

        match command.execute(&mut ctx) {
            Ok(flow) => Ok(flow),
            Err(ShellError::Console(e)) => Err(e.into()),
            Err(e) => {
                self.report(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn report(&mut self, err: &ShellError) -> anyhow::Result<()> {
        log::debug!("{:?} error: {err}", err.kind());
        let color = match err.kind() {
            ErrorKind::NotFound if matches!(err, ShellError::UnknownCommand(_)) => Color::Yellow,
            _ => Color::Red,
        };

        self.say(color, &err.to_string())
    }

    fn say(&mut self, color: Color, text: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}", self.palette.paint(color, text))?;
        self.out.flush()?;
        Ok(())
    }
}
