use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const IDLE_LABEL: &str = "Search Jobs";
pub const LOADING_LABEL: &str = "Searching...";

/// Fits the longer of the two labels plus borders.
pub const BUTTON_WIDTH: u16 = 16;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchButton {
    pub loading: bool,
}

impl SearchButton {
    pub fn label(&self) -> &'static str {
        if self.loading {
            LOADING_LABEL
        } else {
            IDLE_LABEL
        }
    }
}

impl Widget for SearchButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.loading {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(self.label())
            .style(style)
            .centered()
            .block(Block::new().borders(Borders::ALL))
            .render(area, buf);
    }
}
