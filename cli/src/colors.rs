use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn indices(&self, text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
