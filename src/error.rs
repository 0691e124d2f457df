use std::io;

/// Broad classes of handler failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Io,
    InvalidChoice,
    Usage,
}

/// A failure reported to the console by a handler. The `Display` text is the
/// message the user sees.
#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("Command not recognized: {0}")]
    UnknownCommand(String),
    #[error("No such directory: {0}")]
    NoSuchDirectory(String),
    #[error("{0}: missing operand")]
    MissingOperand(&'static str),
    #[error("Error reading directory.")]
    ReadDir(#[source] io::Error),
    #[error("Error reading file: {path}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Error creating file: {path}")]
    CreateFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Error deleting file: {path}")]
    DeleteFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Error creating directory: {path}")]
    CreateDir {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Invalid choice {0:?}, keeping current color.")]
    InvalidChoice(String),
    /// The console itself failed; the loop can't continue past this one.
    #[error("console: {0}")]
    Console(#[from] io::Error),
}

impl ShellError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShellError::UnknownCommand(_) | ShellError::NoSuchDirectory(_) => ErrorKind::NotFound,
            ShellError::ReadFile { source, .. } | ShellError::DeleteFile { source, .. }
                if source.kind() == io::ErrorKind::NotFound =>
            {
                ErrorKind::NotFound
            }
            ShellError::ReadDir(_)
            | ShellError::ReadFile { .. }
            | ShellError::CreateFile { .. }
            | ShellError::DeleteFile { .. }
            | ShellError::CreateDir { .. }
            | ShellError::Console(_) => ErrorKind::Io,
            ShellError::InvalidChoice(_) => ErrorKind::InvalidChoice,
            ShellError::MissingOperand(_) => ErrorKind::Usage,
        }
    }
}
