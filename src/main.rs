use std::env;
use std::io::{self, IsTerminal};

use rustyline::DefaultEditor;

mod command;
mod config;
mod error;
mod input;
mod parser;
mod session;
mod shell;
mod style;
mod utils;

use config::ShellConfig;
use input::Prompter;
use session::Session;
use shell::Shell;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let config = ShellConfig::default().with_colorize(io::stdout().is_terminal());
    let session = Session::new(
        utils::current_user(),
        config.host.clone(),
        env::current_dir()?,
        config.prompt_color,
    );

    if io::stdin().is_terminal() {
        let editor = DefaultEditor::new()?;
        Shell::new(editor, io::stdout(), session, &config).run()?;
    } else {
        let prompter = Prompter::new(io::stdin().lock(), io::stdout());
        Shell::new(prompter, io::stdout(), session, &config).run()?;
    }

    Ok(())
}
