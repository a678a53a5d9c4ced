//! Color theme derived from the configured colors.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ColorsConfig;

// Stock palette, used when a configured value fails to parse.
const FALLBACK_BACKGROUND: Color = Color::Rgb(0x00, 0x08, 0x14);
const FALLBACK_DIE: Color = Color::Rgb(0x00, 0x1d, 0x3d);
const FALLBACK_FONT: Color = Color::Rgb(0xe0, 0xe1, 0xdd);

/// Resolved style set for the whole screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub die: Color,
    pub font: Color,
}

impl Theme {
    /// Build a theme from the configured colors, falling back to the stock
    /// palette for values that do not parse.
    pub fn from_config(colors: &ColorsConfig) -> Self {
        Self {
            background: parse_color(&colors.background).unwrap_or(FALLBACK_BACKGROUND),
            die: parse_color(&colors.die).unwrap_or(FALLBACK_DIE),
            font: parse_color(&colors.font).unwrap_or(FALLBACK_FONT),
        }
    }

    pub fn screen(&self) -> Style {
        Style::default().bg(self.background)
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.font)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn die_card(&self) -> Style {
        Style::default().fg(self.font).bg(self.die)
    }

    pub fn die_border(&self) -> Style {
        Style::default().fg(Color::DarkGray).bg(self.die)
    }

    pub fn die_border_selected(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .bg(self.die)
            .add_modifier(Modifier::BOLD)
    }

    pub fn die_name(&self) -> Style {
        Style::default().fg(self.font).bg(self.die)
    }

    pub fn die_value(&self) -> Style {
        Style::default()
            .fg(self.font)
            .bg(self.die)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_accent(&self) -> Style {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }

    pub fn status_mode(&self) -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }

    pub fn picker_border(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn picker_title(&self) -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn picker_target(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn picker_target_active(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }
}

/// Parse a CSS color string into a terminal RGB color.
pub fn parse_color(value: &str) -> Option<Color> {
    let parsed = csscolorparser::parse(value).ok()?;
    let [r, g, b, _] = parsed.to_rgba8();
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#000814"), Some(Color::Rgb(0x00, 0x08, 0x14)));
        assert_eq!(parse_color("#ffd60a"), Some(Color::Rgb(0xff, 0xd6, 0x0a)));
        assert_eq!(parse_color("not a color"), None);
    }

    #[test]
    fn test_bad_config_falls_back_to_stock_palette() {
        let colors = ColorsConfig {
            background: "definitely broken".into(),
            die: "#003566".into(),
            font: String::new(),
        };
        let theme = Theme::from_config(&colors);
        assert_eq!(theme.background, FALLBACK_BACKGROUND);
        assert_eq!(theme.die, Color::Rgb(0x00, 0x35, 0x66));
        assert_eq!(theme.font, FALLBACK_FONT);
    }
}
