//! Terminal rendering of markdown output.
//!
//! Rich mode prints headers in blue, colors lines by the habit status they
//! mention and styles the rest with termimad. Plain mode prints the markdown
//! as is.

use anyhow::Result;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize, style},
};

/// Status labels and the color of lines carrying them. `TO_BE_CONFIRMED`
/// comes first so the shorter labels never shadow it.
const STATUS_COLORS: [(&str, Color); 7] = [
    ("TO_BE_CONFIRMED", Color::Yellow),
    ("ONGOING", Color::Cyan),
    ("UPCOMING", Color::Blue),
    ("ACTIVE", Color::Cyan),
    ("DONE", Color::Green),
    ("MISSED", Color::Red),
    ("DEAD", Color::DarkGrey),
];

/// Color for a whole line, if any.
fn line_color(line: &str) -> Option<Color> {
    if line.starts_with("Error:") {
        return Some(Color::Red);
    }
    if line.starts_with("Success:") {
        return Some(Color::Green);
    }
    STATUS_COLORS
        .iter()
        .find(|(label, _)| line.contains(label))
        .map(|(_, color)| *color)
}

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match (line.starts_with('#'), line_color(line)) {
                (true, color) => println!("{}", style(line).with(color.unwrap_or(Color::Blue))),
                (false, Some(color)) => println!("{}", style(line).with(color)),
                (false, None) => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_line_color_by_status() {
        assert_eq!(
            line_color("| 3 | Gym | 2030-01-07 07:00 (Mon) | 00:45:00 | MISSED |"),
            Some(Color::Red)
        );
        assert_eq!(
            line_color("### 4. Gym (TO_BE_CONFIRMED)"),
            Some(Color::Yellow)
        );
        assert_eq!(line_color("Success: Marked 2 habits as done"), Some(Color::Green));
        assert_eq!(line_color("Error: Habit with ID 9 not found"), Some(Color::Red));
        assert_eq!(line_color("- Duration: 00:45:00"), None);
    }
}
