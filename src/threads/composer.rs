/// Pending input of a thread. The cursor is a character index, not a byte index, so editing stays
/// on char boundaries for multi-byte input.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct ComposerState {
    pub input_buffer: String,
    pub cursor_position: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
    /// Text set on behalf of a command and not edited since.
    placed: bool,
    /// Placed text moved aside while a command line is typed over it.
    parked: Option<String>,
}

impl ComposerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn char_count(&self) -> usize {
        self.input_buffer.chars().count()
    }

    // Byte offset of the given character index, clamped to the end of the buffer.
    fn byte_index(&self, char_index: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_index)
            .map_or(self.input_buffer.len(), |(idx, _)| idx)
    }

    pub fn insert(&mut self, c: char) {
        self.placed = false;
        let idx = self.byte_index(self.cursor_position);
        self.input_buffer.insert(idx, c);
        self.cursor_position += 1;
    }

    pub fn delete(&mut self) {
        self.placed = false;
        if self.cursor_position < self.char_count() {
            let idx = self.byte_index(self.cursor_position);
            self.input_buffer.remove(idx);
        }
    }

    pub fn backspace(&mut self) {
        self.placed = false;
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let idx = self.byte_index(self.cursor_position);
            self.input_buffer.remove(idx);
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

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    pub fn move_cursor_start(&mut self) {
        self.cursor_position = 0;
    }

    /// Overwrite the pending text on behalf of a command and put the cursor at its end.
    pub fn set_text(&mut self, text: &str) {
        self.input_buffer = text.to_string();
        self.move_cursor_end();
        self.history_index = None;
        self.placed = true;
    }

    /// Take the pending text out of the composer, leaving it empty. A parked draft stays parked.
    pub fn take(&mut self) -> String {
        self.cursor_position = 0;
        self.history_index = None;
        self.placed = false;
        std::mem::take(&mut self.input_buffer)
    }

    /// Move untouched command-placed text aside so a command line can be typed on an empty
    /// buffer. Returns whether anything was parked.
    pub fn park_placed_text(&mut self) -> bool {
        if !self.placed || self.input_buffer.is_empty() {
            return false;
        }
        let text = self.take();
        self.parked = Some(text);
        true
    }

    /// Put a parked draft back into the buffer. It counts as placed text again.
    pub fn unpark(&mut self) {
        if let Some(text) = self.parked.take() {
            self.set_text(&text);
        }
    }

    pub fn parked(&self) -> Option<&str> {
        self.parked.as_deref()
    }

    pub fn add_to_history(&mut self, line: &str) {
        if !line.trim().is_empty() {
            self.history.push(line.to_string());
            self.history_index = None;
        }
    }

    fn recall(&mut self, index: usize) {
        if let Some(line) = self.history.get(index) {
            self.placed = false;
            self.input_buffer = line.clone();
            self.history_index = Some(index);
            self.move_cursor_end();
        }
    }

    pub fn previous_history(&mut self) {
        match self.history_index {
            Some(index) if index > 0 => self.recall(index - 1),
            Some(_) => {}
            None if !self.history.is_empty() => self.recall(self.history.len() - 1),
            None => {}
        }
    }

    pub fn next_history(&mut self) {
        if let Some(index) = self.history_index {
            if index + 1 < self.history.len() {
                self.recall(index + 1);
            } else {
                // Walking past the newest entry returns to an empty line
                self.input_buffer.clear();
                self.cursor_position = 0;
                self.history_index = None;
            }
        }
    }
}
