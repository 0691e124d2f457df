use crate::error::ShellError;
use crate::input::{Line, LineSource};
use crate::session::Session;
use crate::style::{codes, Color, Palette};
use crate::utils::{local_timestamp, resolve_path};
use std::fs::{self, OpenOptions};
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Ls,
    Pwd,
    Cd { dir: String },
    Cat { file: String },
    Echo { text: String },
    Touch { file: String },
    Rm { file: String },
    Date,
    Mkdir { dir: String },
    Color,
    Exit,
}

/// What the loop does once a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

const HELP: &[(&str, &str)] = &[
    ("help", "Show this help message."),
    ("exit", "Exit the terminal."),
    ("clear", "Clear the terminal screen."),
    ("ls", "List files in the current directory."),
    ("pwd", "Show the current directory path."),
    ("cd <dir>", "Change to the specified directory."),
    ("cat <file>", "Display contents of a file."),
    ("echo <text>", "Display text."),
    ("touch <file>", "Create a new file."),
    ("rm <file>", "Remove a file."),
    ("date", "Show the current date and time."),
    ("mkdir <dir>", "Create a new directory."),
    ("color", "Change terminal color scheme."),
];

/// Everything a handler may touch while it runs.
pub struct Context<'a> {
    pub session: &'a mut Session,
    pub palette: Palette,
    pub out: &'a mut dyn Write,
    pub input: &'a mut dyn LineSource,
}

impl Context<'_> {
    fn say(&mut self, color: Color, text: &str) -> Result<(), ShellError> {
        writeln!(self.out, "{}", self.palette.paint(color, text))?;
        Ok(())
    }
}

pub trait Executable {
    fn execute(&self, ctx: &mut Context<'_>) -> Result<Flow, ShellError>;
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Clear => "clear",
            Command::Ls => "ls",
            Command::Pwd => "pwd",
            Command::Cd { .. } => "cd",
            Command::Cat { .. } => "cat",
            Command::Echo { .. } => "echo",
            Command::Touch { .. } => "touch",
            Command::Rm { .. } => "rm",
            Command::Date => "date",
            Command::Mkdir { .. } => "mkdir",
            Command::Color => "color",
            Command::Exit => "exit",
        }
    }
}

impl Executable for Command {
    fn execute(&self, ctx: &mut Context<'_>) -> Result<Flow, ShellError> {
        match self {
            Command::Help => {
                writeln!(ctx.out, "\nAvailable Commands:")?;
                for (usage, description) in HELP {
                    writeln!(ctx.out, "- {:<14}: {description}", format!("'{usage}'"))?;
                }
            }
            Command::Clear => {
                write!(ctx.out, "{}", codes::CLEAR_SCREEN)?;
            }
            Command::Ls => {
                let mut names = fs::read_dir(ctx.session.cwd())
                    .and_then(|entries| {
                        entries
                            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
                            .collect::<Result<Vec<_>, _>>()
                    })
                    .map_err(ShellError::ReadDir)?;
                names.sort();

                for name in names {
                    ctx.say(Color::Green, &name)?;
                }
            }
            Command::Pwd => {
                let cwd = ctx.session.cwd().display().to_string();
                ctx.say(Color::Green, &cwd)?;
            }
            Command::Cd { dir } => {
                let target = resolve_path(ctx.session.cwd(), dir);
                let target = match fs::canonicalize(&target) {
                    Ok(path) if path.is_dir() => path,
                    _ => return Err(ShellError::NoSuchDirectory(dir.clone())),
                };

                ctx.session.set_cwd(target);
                let message = format!("Changed directory to: {}", ctx.session.cwd().display());
                ctx.say(Color::Green, &message)?;
            }
            Command::Cat { file } => {
                let bytes = fs::read(resolve_path(ctx.session.cwd(), file)).map_err(|source| {
                    ShellError::ReadFile {
                        path: file.clone(),
                        source,
                    }
                })?;
                let content = String::from_utf8_lossy(&bytes);

                if !content.is_empty() {
                    let content = content.strip_suffix('\n').unwrap_or(&content);
                    ctx.say(Color::Green, content)?;
                }
            }
            Command::Echo { text } => {
                ctx.say(Color::Green, text)?;
            }
            Command::Touch { file } => {
                // Existing contents are left alone.
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(resolve_path(ctx.session.cwd(), file))
                    .map_err(|source| ShellError::CreateFile {
                        path: file.clone(),
                        source,
                    })?;

                ctx.say(Color::Green, &format!("File {file} created."))?;
            }
            Command::Rm { file } => {
                fs::remove_file(resolve_path(ctx.session.cwd(), file)).map_err(|source| {
                    ShellError::DeleteFile {
                        path: file.clone(),
                        source,
                    }
                })?;

                ctx.say(Color::Green, &format!("File {file} deleted."))?;
            }
            Command::Date => {
                ctx.say(Color::Green, &local_timestamp())?;
            }
            Command::Mkdir { dir } => {
                fs::create_dir_all(resolve_path(ctx.session.cwd(), dir)).map_err(|source| {
                    ShellError::CreateDir {
                        path: dir.clone(),
                        source,
                    }
                })?;

                ctx.say(Color::Green, &format!("Directory {dir} created."))?;
            }
            Command::Color => {
                let question = format!("Select a color scheme ({}): ", Color::CHOICES);
                match ctx.input.read_line(&question)? {
                    Line::Text(choice) => {
                        let color = Color::from_choice(&choice)
                            .ok_or(ShellError::InvalidChoice(choice))?;
                        log::debug!("prompt color {:?} -> {color:?}", ctx.session.prompt_color());
                        ctx.session.set_prompt_color(color);
                    }
                    Line::Interrupted => {}
                    Line::Eof => return Ok(Flow::Exit),
                }
            }
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }
}
