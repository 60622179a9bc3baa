//! Transcript and input state
//!
//! The mutable state a user interacts with: the lines on screen, the line
//! being edited, and how many submissions are still waiting for a response.

/// Ordered lines shown in the terminal. Append-only apart from [`clear`].
///
/// [`clear`]: Transcript::clear
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
    revision: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            revision: 0,
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.revision += 1;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Bumped on every change. The view scrolls to the bottom when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Single-line text editor with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    /// Cursor position in characters
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole line and put the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}

/// Transcript, input line and pending-response count.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub transcript: Transcript,
    pub input: InputLine,
    pending: usize,
}

impl Session {
    pub fn new(transcript: Transcript) -> Self {
        Self {
            transcript,
            input: InputLine::new(),
            pending: 0,
        }
    }

    /// True while at least one submission waits for its response.
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Echo a submission and start waiting for its response.
    pub fn begin(&mut self, input: &str) {
        self.transcript.push(format!("> {input}"));
        self.pending += 1;
    }

    /// Record a response: append it, stop waiting, clear the input line.
    pub fn respond(&mut self, response: impl Into<String>) {
        self.transcript.push(response);
        self.finish();
    }

    /// Empty the transcript and reset loading and input.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.pending = 0;
        self.input.clear();
    }

    /// A response arrived that does not add a line.
    pub fn finish(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        self.input.clear();
    }
}
