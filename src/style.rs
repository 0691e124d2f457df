/// ANSI escape sequences
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[0;0H";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Blue,
    Red,
    Yellow,
}

impl Color {
    pub const CHOICES: &'static str = "1- Green, 2- Blue, 3- Red, 4- Yellow";

    /// Maps a menu answer (`1`..`4`) to its colour.
    pub fn from_choice(choice: &str) -> Option<Color> {
        match choice {
            "1" => Some(Color::Green),
            "2" => Some(Color::Blue),
            "3" => Some(Color::Red),
            "4" => Some(Color::Yellow),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Color::Green => codes::GREEN,
            Color::Blue => codes::BLUE,
            Color::Red => codes::RED,
            Color::Yellow => codes::YELLOW,
        }
    }
}

/// Wraps text in colour codes, or passes it through untouched when colours are off.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled && !text.is_empty() {
            format!("{}{text}{}", color.code(), codes::RESET)
        } else {
            text.to_string()
        }
    }
}
