use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const PLACEHOLDER: &str = "Enter hashtags (e.g., bca, fresher, python)";

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub is_focused: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    pub input: String,
    /// Cursor position counted in chars, not bytes.
    pub cursor_position: usize,
}

impl TextInputState {
    pub fn new(input: impl Into<String>) -> Self {
        let input = input.into();
        let cursor_position = input.chars().count();
        Self {
            input,
            cursor_position,
        }
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                let offset = self.byte_offset(self.cursor_position);
                self.input.insert(offset, c);
                self.cursor_position += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let offset = self.byte_offset(self.cursor_position);
                    self.input.remove(offset);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor_position < self.char_len() {
                    let offset = self.byte_offset(self.cursor_position);
                    self.input.remove(offset);
                }
                true
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_len());
                true
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                true
            }
            KeyCode::End => {
                self.cursor_position = self.char_len();
                true
            }
            _ => false,
        }
    }

    /// Byte offset of the first visible char and the cursor column within a
    /// field `width` columns wide.
    ///
    /// Leading text is scrolled out until the cursor fits, keeping one column
    /// free for the cursor itself.
    fn viewport(&self, width: u16) -> (usize, u16) {
        let width = width as usize;
        let prefix = &self.input[..self.byte_offset(self.cursor_position)];

        let mut start = 0;
        let mut column = prefix.width();
        for (offset, c) in prefix.char_indices() {
            if column < width {
                break;
            }
            start = offset + c.len_utf8();
            column -= c.width().unwrap_or(0);
        }

        (start, column as u16)
    }

    /// Terminal cursor position for an input rendered into `area`.
    pub fn cursor(&self, area: Rect) -> Position {
        let inner = Block::new().borders(Borders::ALL).inner(area);
        let (_, column) = self.viewport(inner.width);
        Position::new(inner.x.saturating_add(column), inner.y)
    }
}

impl StatefulWidget for TextInput {
    type State = TextInputState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else if self.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let block = Block::new()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Hashtags");
        let inner = block.inner(area);
        block.render(area, buf);

        let (start, _) = state.viewport(inner.width);
        let visible = &state.input[start..];

        let paragraph = if state.input.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else if self.disabled {
            Paragraph::new(visible).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(visible)
        };

        paragraph.render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(state: &mut TextInputState, code: KeyCode) {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(state: &mut TextInputState, s: &str) {
        for c in s.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_editing() {
        let mut state = TextInputState::default();

        type_str(&mut state, "bca,python");
        press(&mut state, KeyCode::Home);
        press(&mut state, KeyCode::Delete);
        type_str(&mut state, "m");
        press(&mut state, KeyCode::End);
        press(&mut state, KeyCode::Backspace);

        assert_eq!(state.input, "mca,pytho");
        assert_eq!(state.cursor_position, 9);
    }

    #[test]
    fn multibyte_chars() {
        let mut state = TextInputState::default();

        type_str(&mut state, "café");
        press(&mut state, KeyCode::Left);
        type_str(&mut state, "ü");
        press(&mut state, KeyCode::End);
        press(&mut state, KeyCode::Backspace);

        assert_eq!(state.input, "cafü");
        assert_eq!(state.cursor_position, 4);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut state = TextInputState::new("ab");

        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Delete);
        assert_eq!(state.cursor_position, 2);

        press(&mut state, KeyCode::Home);
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.input, "ab");
        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn non_text_keys_are_not_handled() {
        let mut state = TextInputState::default();

        assert!(!state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!state.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 3));
        let mut state = TextInputState::default();

        TextInput::default().render(buf.area, &mut buf, &mut state);

        let lines = crate::buffers::buffer_lines(&buf);
        assert!(lines[1].contains(PLACEHOLDER));
    }

    #[test]
    fn cursor_counts_wide_chars_by_width() {
        let state = TextInputState::new("日本, go");

        assert_eq!(state.cursor(Rect::new(0, 0, 30, 3)), Position::new(1 + 8, 1));
    }

    #[test]
    fn long_input_scrolls_with_cursor() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 3));
        let area = buf.area;
        let mut state = TextInputState::new("abcdefghijklmnop");

        TextInput::default().render(area, &mut buf, &mut state);

        let lines = crate::buffers::buffer_lines(&buf);
        assert_eq!(lines[1], "│hijklmnop │");
        assert_eq!(state.cursor(area), Position::new(10, 1));
    }

    #[test]
    fn scrolled_back_to_start_with_home() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 3));
        let area = buf.area;
        let mut state = TextInputState::new("abcdefghijklmnop");
        press(&mut state, KeyCode::Home);

        TextInput::default().render(area, &mut buf, &mut state);

        let lines = crate::buffers::buffer_lines(&buf);
        assert_eq!(lines[1], "│abcdefghij│");
        assert_eq!(state.cursor(area), Position::new(1, 1));
    }

    #[test]
    fn cursor_follows_input() {
        let state = TextInputState::new("rust");

        assert_eq!(state.cursor(Rect::new(2, 5, 20, 3)), Position::new(7, 6));
    }
}
