use chrono::{DateTime, Local, TimeZone};
use nix::unistd::{getuid, User};
use std::path::{Path, PathBuf};

/// Resolves an operand against the session's working directory. Absolute
/// operands are returned as given.
pub fn resolve_path(cwd: &Path, operand: &str) -> PathBuf {
    cwd.join(operand)
}

/// Name of the invoking user from the OS user database, or the numeric uid
/// if the entry can't be read.
pub fn current_user() -> String {
    let uid = getuid();
    match User::from_uid(uid) {
        Ok(Some(user)) => user.name,
        Ok(None) => uid.to_string(),
        Err(e) => {
            log::warn!("user lookup for uid {uid} failed: {e}");
            uid.to_string()
        }
    }
}

pub fn local_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// `M/D/YYYY, h:mm:ss AM`
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
