//! File browser state: directory position, listing, and the editor overlay.

use crate::types::FileEntry;

/// Strip the last path segment; the root stays the root.
pub fn parent_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".into();
    }
    match trimmed.rfind('/') {
        Some(0) | None => "/".into(),
        Some(i) => trimmed[..i].to_string(),
    }
}

#[derive(Debug, Default)]
pub struct FileBrowser {
    pub current_path: String,
    pub entries: Vec<FileEntry>,
    pub selected: usize,
    editing_file: Option<String>,
    editor_buffer: Option<String>,
    cursor: usize,
}

impl FileBrowser {
    pub fn new() -> Self {
        Self {
            current_path: "/".into(),
            ..Self::default()
        }
    }

    pub fn set_entries(&mut self, entries: Vec<FileEntry>) {
        self.entries = entries;
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.selected)
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    /// Descend into a directory. The caller issues the listing load.
    pub fn enter_dir(&mut self, path: &str) {
        self.current_path = path.to_string();
        self.selected = 0;
    }

    /// Go up one segment. Returns false (no listing needed) at the root.
    pub fn up(&mut self) -> bool {
        let parent = parent_path(&self.current_path);
        if parent == self.current_path {
            return false;
        }
        self.current_path = parent;
        self.selected = 0;
        true
    }

    // --- editor overlay ---

    pub fn is_editing(&self) -> bool {
        self.editing_file.is_some()
    }

    pub fn editing_file(&self) -> Option<&str> {
        self.editing_file.as_deref()
    }

    pub fn editor_buffer(&self) -> Option<&str> {
        self.editor_buffer.as_deref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Open the editor with server content; cursor starts at the end.
    pub fn open(&mut self, path: String, content: String) {
        self.cursor = content.len();
        self.editing_file = Some(path);
        self.editor_buffer = Some(content);
    }

    /// What a save would send: (path, buffer). None when no file is open.
    pub fn save_target(&self) -> Option<(&str, &str)> {
        match (&self.editing_file, &self.editor_buffer) {
            (Some(p), Some(b)) => Some((p.as_str(), b.as_str())),
            _ => None,
        }
    }

    /// Close the editor, discarding the buffer unconditionally. Unsaved
    /// edits are not persisted and not confirmed.
    pub fn close(&mut self) {
        self.editing_file = None;
        self.editor_buffer = None;
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(buf) = self.editor_buffer.as_mut() {
            buf.insert(self.cursor, c);
            self.cursor += c.len_utf8();
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buf) = self.editor_buffer.as_mut() {
            if self.cursor > 0 {
                let prev = buf[..self.cursor]
                    .char_indices()
                    .next_back()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                buf.remove(prev);
                self.cursor = prev;
            }
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(buf) = &self.editor_buffer {
            if self.cursor > 0 {
                self.cursor = buf[..self.cursor]
                    .char_indices()
                    .next_back()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
            }
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(buf) = &self.editor_buffer {
            if self.cursor < buf.len() {
                self.cursor += buf[self.cursor..]
                    .chars()
                    .next()
                    .map(|c| c.len_utf8())
                    .unwrap_or(0);
            }
        }
    }
}
