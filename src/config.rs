use crate::style::Color;

#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Label shown after `user@` in the prompt.
    pub host: String,
    pub colorize: bool,
    pub prompt_color: Color,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            host: "nodezsh".to_string(),
            colorize: true,
            prompt_color: Color::Green,
        }
    }
}

impl ShellConfig {
    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }
}
