//! Composer state: text input buffer and cursor management

/// State for the message composer
#[derive(Debug, Default)]
pub struct Composer {
    /// Raw composer text (stored untrimmed)
    pub buffer: String,

    /// Cursor position within `buffer` (byte offset)
    pub cursor: usize,
}

impl Composer {
    /// Create a new composer with default values
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Clear the composer and reset cursor
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Whether the buffer is empty or whitespace-only (the submit guard)
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    /// Set the composer content and move cursor to end
    pub fn set(&mut self, content: String) {
        self.cursor = content.len();
        self.buffer = content;
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a newline at the cursor position (Shift+Enter)
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            // Find the previous character boundary
            let prev_char_boundary = self.buffer[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.buffer.remove(prev_char_boundary);
            self.cursor = prev_char_boundary;
        }
    }

    /// Delete the character at the cursor (delete key)
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the previous word (like many shell/readline editors).
    ///
    /// This removes any whitespace immediately before the cursor, then
    /// removes the contiguous non-whitespace "word" segment.
    pub fn delete_word(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let mut start = self.cursor;
        let mut found_non_whitespace = false;

        for (index, ch) in self.buffer[..self.cursor].char_indices().rev() {
            if !found_non_whitespace {
                if ch.is_whitespace() {
                    start = index;
                    continue;
                }
                found_non_whitespace = true;
                start = index;
                continue;
            }

            if ch.is_whitespace() {
                start = index.saturating_add(ch.len_utf8());
                break;
            }

            start = index;
        }

        self.buffer.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Move cursor left by one character
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.buffer[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move cursor right by one character
    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor = self.buffer[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.buffer.len(), |(i, _)| self.cursor + i);
        }
    }

    /// Move cursor to the start of the buffer
    pub const fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end of the buffer
    pub const fn cursor_end(&mut self) {
        self.cursor = self.buffer.len();
    }
}
