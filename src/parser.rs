use crate::command::Command;
use crate::error::ShellError;

/// Parses one input line. A blank line yields `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ShellError> {
    let tokens = tokenize(line);
    match tokens.split_first() {
        None => Ok(None),
        Some((name, args)) => parse(name, args, line.trim()).map(Some),
    }
}

/// Splits on single spaces. Runs of spaces produce empty tokens so that free
/// text keeps its spacing when rejoined.
fn tokenize(input: &str) -> Vec<&str> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }

    input.split(' ').collect()
}

fn operand(name: &'static str, args: &[&str]) -> Result<String, ShellError> {
    args.iter()
        .find(|arg| !arg.is_empty())
        .map(|arg| arg.to_string())
        .ok_or(ShellError::MissingOperand(name))
}

fn parse(name: &str, args: &[&str], input: &str) -> Result<Command, ShellError> {
    let command = match name {
        "help" => Command::Help,
        "clear" => Command::Clear,
        "ls" => Command::Ls,
        "pwd" => Command::Pwd,
        "cd" => Command::Cd {
            dir: operand("cd", args)?,
        },
        "cat" => Command::Cat {
            file: operand("cat", args)?,
        },
        "echo" => Command::Echo {
            text: args.join(" "),
        },
        "touch" => Command::Touch {
            file: operand("touch", args)?,
        },
        "rm" => Command::Rm {
            file: operand("rm", args)?,
        },
        "date" => Command::Date,
        "mkdir" => Command::Mkdir {
            dir: operand("mkdir", args)?,
        },
        "color" => Command::Color,
        "exit" => Command::Exit,
        _ => return Err(ShellError::UnknownCommand(input.to_string())),
    };

    Ok(command)
}
