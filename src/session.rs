use crate::style::{Color, Palette};
use std::path::{Path, PathBuf};

/// Mutable state that lives for the whole loop: who is logged in, where they
/// are, and what colour the prompt is.
#[derive(Debug, Clone)]
pub struct Session {
    user: String,
    host: String,
    cwd: PathBuf,
    prompt_color: Color,
}

impl Session {
    pub fn new(user: String, host: String, cwd: PathBuf, prompt_color: Color) -> Self {
        Session {
            user,
            host,
            cwd,
            prompt_color,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn set_cwd(&mut self, cwd: PathBuf) {
        self.cwd = cwd;
    }

    pub fn prompt_color(&self) -> Color {
        self.prompt_color
    }

    pub fn set_prompt_color(&mut self, color: Color) {
        self.prompt_color = color;
    }

    pub fn prompt(&self, palette: &Palette) -> String {
        let text = format!("{}@{}:{}$ ", self.user, self.host, self.cwd.display());
        palette.paint(self.prompt_color, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(
            "cdg".to_string(),
            "nodezsh".to_string(),
            PathBuf::from("/home/cdg"),
            Color::Green,
        )
    }

    #[test]
    fn test_prompt_plain() {
        let result = session().prompt(&Palette::new(false));
        assert_eq!(result, "cdg@nodezsh:/home/cdg$ ");
    }

    #[test]
    fn test_prompt_tracks_cwd_and_color() {
        let mut session = session();
        session.set_cwd(PathBuf::from("/tmp"));
        session.set_prompt_color(Color::Red);

        let result = session.prompt(&Palette::new(true));
        assert_eq!(result, "\x1b[31mcdg@nodezsh:/tmp$ \x1b[0m");
    }
}
