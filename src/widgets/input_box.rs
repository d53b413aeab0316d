use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

/// A multi-line text composer with a character cursor.
///
/// Features:
/// - Basic text editing (insert, delete, backspace, paste)
/// - Cursor movement (left/right, line home/end)
/// - Vertical scrolling that keeps the cursor line visible
///
/// The cursor is a character index, never a byte index, so multi-byte input
/// is safe.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    /// The text content of the input box
    content: String,
    /// Current cursor position (character index)
    cursor_position: usize,
}

impl InputBox {
    /// Create a new empty InputBox
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the current cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
    }

    /// Insert a line break at the cursor
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Insert a whole string at the cursor (bracketed paste)
    pub fn insert_str(&mut self, s: &str) {
        // Normalize CRLF from pasted text
        let s = s.replace("\r\n", "\n");
        let at = self.byte_index(self.cursor_position);
        self.content.insert_str(at, &s);
        self.cursor_position += s.chars().count();
    }

    /// Delete the character at the current cursor position (like Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.char_count() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor (like Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    /// Move cursor to the beginning of the current line
    pub fn move_cursor_home(&mut self) {
        let (_, col) = self.cursor_line_col();
        self.cursor_position -= col;
    }

    /// Move cursor to the end of the current line
    pub fn move_cursor_end(&mut self) {
        let rest = self
            .content
            .chars()
            .skip(self.cursor_position)
            .take_while(|c| *c != '\n')
            .count();
        self.cursor_position += rest;
    }

    /// Get the current text content
    pub fn get_content(&self) -> &str {
        &self.content
    }

    /// Get the current cursor position
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Zero-based (line, column) of the cursor, in characters.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.content.chars().take(self.cursor_position) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Set the text content and move the cursor to the end
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.cursor_position = self.char_count();
    }

    /// Clear all content and reset cursor
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length of the content in characters
    pub fn len(&self) -> usize {
        self.char_count()
    }

    /// Render the input box with the given title
    pub fn render_with_title(&self, area: Rect, buf: &mut Buffer, title: &str, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (cursor_line, cursor_col) = self.cursor_line_col();
        let visible_lines = inner.height as usize;
        let scroll = (cursor_line + 1).saturating_sub(visible_lines);

        let text_style = Style::default().fg(Color::White);
        let cursor_style = Style::default().fg(Color::Black).bg(Color::Cyan);

        for (row, line) in self
            .content
            .split('\n')
            .enumerate()
            .skip(scroll)
            .take(visible_lines)
        {
            let y = inner.y + (row - scroll) as u16;
            let mut x = inner.x;
            let right = inner.x + inner.width;

            for (col, c) in line.chars().enumerate() {
                let w = c.width().unwrap_or(0) as u16;
                if x + w > right {
                    break;
                }
                let style = if focused && row == cursor_line && col == cursor_col {
                    cursor_style
                } else {
                    text_style
                };
                buf.set_string(x, y, c.to_string(), style);
                x += w.max(1);
            }

            // Cursor sitting past the last character of its line
            if focused && row == cursor_line && cursor_col >= line.chars().count() && x < right {
                buf.set_string(x, y, " ", cursor_style);
            }
        }
    }
}

/// A renderable wrapper for InputBox that implements the Widget trait
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    focused: bool,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, focused: bool) -> Self {
        Self {
            input_box,
            title,
            focused,
        }
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box.render_with_title(area, buf, self.title, self.focused);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_input_box() {
        let input = InputBox::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_position(), 0);
        assert_eq!(input.get_content(), "");
    }

    #[test]
    fn test_insert_char() {
        let mut input = InputBox::new();
        input.insert_char('H');
        input.insert_char('i');
        assert_eq!(input.get_content(), "Hi");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_backspace() {
        let mut input = InputBox::new();
        input.insert_char('H');
        input.insert_char('i');
        input.backspace();
        assert_eq!(input.get_content(), "H");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_delete_char() {
        let mut input = InputBox::new();
        input.set_content("Hi".to_string());
        input.move_cursor_left();
        input.delete_char();
        assert_eq!(input.get_content(), "H");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputBox::new();
        input.set_content("żółw".to_string());
        input.backspace();
        assert_eq!(input.get_content(), "żół");
        input.move_cursor_left();
        input.insert_char('x');
        assert_eq!(input.get_content(), "żóxł");
        assert_eq!(input.len(), 4);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = InputBox::new();
        input.insert_char('X');

        input.move_cursor_left();
        input.move_cursor_left();
        assert_eq!(input.cursor_position(), 0);

        input.move_cursor_right();
        input.move_cursor_right();
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_home_end_are_line_relative() {
        let mut input = InputBox::new();
        input.set_content("{\n  \"a\":1\n}".to_string());
        // Cursor at end, on line 2 ("}")
        assert_eq!(input.cursor_line_col(), (2, 1));

        input.move_cursor_left();
        input.move_cursor_left();
        assert_eq!(input.cursor_line_col(), (1, 7));

        input.move_cursor_home();
        assert_eq!(input.cursor_line_col(), (1, 0));

        input.move_cursor_end();
        assert_eq!(input.cursor_line_col(), (1, 7));
    }

    #[test]
    fn test_newline_and_line_count() {
        let mut input = InputBox::new();
        input.insert_char('a');
        input.insert_newline();
        input.insert_char('b');
        assert_eq!(input.get_content(), "a\nb");
        assert_eq!(input.line_count(), 2);
    }

    #[test]
    fn test_insert_str_normalizes_crlf() {
        let mut input = InputBox::new();
        input.insert_str("a\r\nb");
        assert_eq!(input.get_content(), "a\nb");
        assert_eq!(input.cursor_position(), 3);
    }

    #[test]
    fn test_set_content_replaces() {
        let mut input = InputBox::new();
        input.set_content("old text".to_string());
        input.set_content("new".to_string());
        assert_eq!(input.get_content(), "new");
        assert_eq!(input.cursor_position(), 3);
    }

    #[test]
    fn test_clear() {
        let mut input = InputBox::new();
        input.set_content("Hello World".to_string());
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_render_shows_text() {
        let mut input = InputBox::new();
        input.set_content("ab\ncd".to_string());

        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        InputBoxWidget::new(&input, "Message", true).render(area, &mut buf);

        assert_eq!(buf[(1, 1)].symbol(), "a");
        assert_eq!(buf[(2, 1)].symbol(), "b");
        assert_eq!(buf[(1, 2)].symbol(), "c");
        assert_eq!(buf[(2, 2)].symbol(), "d");
    }
}
