use crate::{
    action::Action,
    command::Command,
    entry::{EntryView, validate_file_name},
};
use std::path::{Path, PathBuf};
use unicode_segmentation::UnicodeSegmentation;

/// Free-text buffer for the new-file prompt. The cursor is a byte offset
/// kept on grapheme-cluster boundaries, so multibyte and combining input
/// edits cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameInput {
    pub text: String,
    pub cursor: usize,
}

impl NameInput {
    fn boundaries(&self) -> Vec<usize> {
        let mut boundaries: Vec<usize> =
            self.text.grapheme_indices(true).map(|(i, _)| i).collect();
        boundaries.push(self.text.len());
        boundaries
    }

    fn boundary_index_at_or_before(boundaries: &[usize], cursor: usize) -> usize {
        match boundaries.binary_search(&cursor) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        }
    }

    fn clamp_to_boundary(&mut self, boundaries: &[usize]) -> usize {
        let cursor = self.cursor.min(self.text.len());
        let idx = Self::boundary_index_at_or_before(boundaries, cursor);
        self.cursor = boundaries.get(idx).copied().unwrap_or(0);
        idx
    }

    /// Insert a character at the cursor position
    pub fn insert(&mut self, c: char) {
        let boundaries = self.boundaries();
        self.clamp_to_boundary(&boundaries);
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the grapheme cluster before the cursor (UTF-8 safe)
    pub fn backspace(&mut self) -> bool {
        let boundaries = self.boundaries();
        let idx = self.clamp_to_boundary(&boundaries);
        if idx == 0 {
            return false;
        }
        let prev = boundaries[idx - 1];
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    /// Move cursor left by one grapheme cluster (UTF-8 safe)
    pub fn cursor_left(&mut self) {
        let boundaries = self.boundaries();
        let idx = self.clamp_to_boundary(&boundaries);
        if idx > 0 {
            self.cursor = boundaries[idx - 1];
        }
    }

    /// Move cursor right by one grapheme cluster (UTF-8 safe)
    pub fn cursor_right(&mut self) {
        let boundaries = self.boundaries();
        let idx = self.clamp_to_boundary(&boundaries);
        if idx + 1 < boundaries.len() {
            self.cursor = boundaries[idx + 1];
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Transient one-line message shown under the listing; cleared on the next
/// accepted key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// What mode the browser is in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    /// Typing the name of a file about to be created
    NamingFile(NameInput),
    /// Single-key yes/no before removing `name`
    ConfirmDelete { name: String },
    /// An external editor owns the terminal; the screen is torn down and no
    /// input is read until the child exits
    Suspended,
}

/// Central browser state. Owned exclusively by the run loop; every accepted
/// input event goes through [`transition`], and every mutating command is
/// followed by a relist through [`BrowserState::replace_entries`].
#[derive(Debug, Clone)]
pub struct BrowserState {
    /// Absolute path of the directory on screen
    pub cwd: PathBuf,
    pub entries: Vec<EntryView>,
    /// Index of the highlighted entry; 0 when the listing is empty
    pub cursor: usize,
    /// Index of the first visible row
    pub scroll_offset: usize,
    pub mode: Mode,
    pub status: Option<StatusLine>,
    viewport_rows: usize,
}

impl BrowserState {
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            entries: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            mode: Mode::Browsing,
            status: None,
            viewport_rows: 10,
        }
    }

    pub fn selected(&self) -> Option<&EntryView> {
        self.entries.get(self.cursor)
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Record how many list rows the terminal currently shows. May be zero
    /// on a tiny terminal; scroll math then degenerates without panicking.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows;
        self.update_scroll_offset();
    }

    /// Swap in a fresh snapshot of the current directory.
    ///
    /// The cursor keeps its index where possible and is clamped to the new
    /// length otherwise. This one rule covers deletion: removing the last
    /// entry lands the cursor on the new last entry, removing a mid-list
    /// entry keeps the index, which now names the next entry. Entries that
    /// vanished externally are handled identically.
    pub fn replace_entries(&mut self, entries: Vec<EntryView>) {
        self.entries = entries;
        self.clamp_cursor();
        self.update_scroll_offset();
    }

    /// Replace the working directory wholesale; selection restarts at the top.
    pub fn enter_directory(&mut self, cwd: PathBuf, entries: Vec<EntryView>) {
        self.cwd = cwd;
        self.entries = entries;
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// The editor handoff is over; the screen is being rebuilt.
    pub fn resume_browsing(&mut self) {
        self.mode = Mode::Browsing;
    }

    fn clamp_cursor(&mut self) {
        self.cursor = match self.entries.len() {
            0 => 0,
            len => self.cursor.min(len - 1),
        };
    }

    fn move_to_top(&mut self) {
        self.cursor = 0;
        self.update_scroll_offset();
    }

    fn move_to_bottom(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = self.entries.len() - 1;
        }
        self.update_scroll_offset();
    }

    /// Move the cursor by delta, clamping to bounds. No wraparound.
    fn move_selection(&mut self, delta: i32) {
        if self.entries.is_empty() {
            return;
        }
        let step = delta.unsigned_abs() as usize;
        self.cursor = if delta > 0 {
            self.cursor.saturating_add(step).min(self.entries.len() - 1)
        } else {
            self.cursor.saturating_sub(step)
        };
        self.update_scroll_offset();
    }

    /// Keep the cursor inside the visible window: a cursor above the window
    /// drags the window up to it, one below pins it to the bottom row.
    fn update_scroll_offset(&mut self) {
        if self.entries.is_empty() || self.viewport_rows == 0 {
            self.scroll_offset = 0;
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + self.viewport_rows {
            self.scroll_offset = self.cursor + 1 - self.viewport_rows;
        }
        let max_offset = self.entries.len().saturating_sub(self.viewport_rows);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

/// Advance the state machine by one input event.
///
/// Pure with respect to the filesystem: effects come back as [`Command`]s
/// for the driver to execute. After any mutating command the driver must
/// relist and call [`BrowserState::replace_entries`] before feeding the
/// next event. Actions that make no sense in the current mode are ignored
/// and cannot disturb cursor or scroll state.
pub fn transition(state: &mut BrowserState, action: Action) -> Vec<Command> {
    match &state.mode {
        Mode::Browsing => transition_browsing(state, action),
        Mode::NamingFile(_) => transition_naming(state, action),
        Mode::ConfirmDelete { .. } => transition_confirm(state, action),
        // The terminal belongs to the child process; the driver reads no
        // input here, but a stray event must not corrupt anything.
        Mode::Suspended => Vec::new(),
    }
}

fn transition_browsing(state: &mut BrowserState, action: Action) -> Vec<Command> {
    match action {
        Action::MoveSelection(delta) => {
            state.move_selection(delta);
            Vec::new()
        }
        Action::MoveTop => {
            state.move_to_top();
            Vec::new()
        }
        Action::MoveBottom => {
            state.move_to_bottom();
            Vec::new()
        }
        Action::PageUp | Action::PageDown => {
            let page: i32 = state.viewport_rows().max(1).try_into().unwrap_or(i32::MAX);
            state.move_selection(if action == Action::PageUp { -page } else { page });
            Vec::new()
        }
        Action::Open => match state.selected() {
            Some(entry) if entry.is_dir() => {
                let target = match entry.name.as_str() {
                    "." => state.cwd.clone(),
                    ".." => state
                        .cwd
                        .parent()
                        .map_or_else(|| state.cwd.clone(), Path::to_path_buf),
                    name => state.cwd.join(name),
                };
                vec![Command::EnterDirectory(target)]
            }
            // Opening a file is `Edit`'s job
            _ => Vec::new(),
        },
        Action::Edit => match state.selected() {
            Some(entry) if entry.is_regular() => {
                let path = state.cwd.join(&entry.name);
                state.mode = Mode::Suspended;
                vec![Command::SpawnEditor(path)]
            }
            _ => Vec::new(),
        },
        Action::PromptNewFile => {
            state.mode = Mode::NamingFile(NameInput::default());
            Vec::new()
        }
        Action::RequestDelete => match state.selected() {
            Some(entry) if entry.is_regular() => {
                state.mode = Mode::ConfirmDelete {
                    name: entry.name.clone(),
                };
                Vec::new()
            }
            Some(entry) => {
                state.status = Some(StatusLine::error(format!(
                    "Cannot delete '{}': only regular files can be deleted",
                    entry.name
                )));
                Vec::new()
            }
            None => Vec::new(),
        },
        Action::Quit => vec![Command::Quit],
        // Prompt and confirmation actions are meaningless while browsing
        _ => Vec::new(),
    }
}

fn transition_naming(state: &mut BrowserState, action: Action) -> Vec<Command> {
    let Mode::NamingFile(input) = &mut state.mode else {
        return Vec::new();
    };
    match action {
        Action::InputPush(c) => {
            input.insert(c);
            Vec::new()
        }
        Action::InputPop => {
            input.backspace();
            Vec::new()
        }
        Action::InputLeft => {
            input.cursor_left();
            Vec::new()
        }
        Action::InputRight => {
            input.cursor_right();
            Vec::new()
        }
        Action::InputCancel => {
            state.mode = Mode::Browsing;
            Vec::new()
        }
        Action::InputSubmit => {
            let name = input.text.clone();
            match validate_file_name(&name) {
                Err(err) => {
                    state.status = Some(StatusLine::error(err.to_string()));
                    state.mode = Mode::Browsing;
                    Vec::new()
                }
                Ok(()) => {
                    // Create-then-edit is one logical user action. If the
                    // create fails the driver skips the editor command.
                    let path = state.cwd.join(&name);
                    state.mode = Mode::Suspended;
                    vec![Command::CreateFile(path.clone()), Command::SpawnEditor(path)]
                }
            }
        }
        Action::Quit => vec![Command::Quit],
        _ => Vec::new(),
    }
}

fn transition_confirm(state: &mut BrowserState, action: Action) -> Vec<Command> {
    match action {
        Action::ConfirmDelete => {
            let Mode::ConfirmDelete { name } = &state.mode else {
                return Vec::new();
            };
            let path = state.cwd.join(name);
            state.mode = Mode::Browsing;
            vec![Command::DeleteFile(path)]
        }
        Action::CancelDelete => {
            state.mode = Mode::Browsing;
            state.status = Some(StatusLine::info("Delete cancelled"));
            Vec::new()
        }
        Action::Quit => vec![Command::Quit],
        // Navigation is ignored while the dialog is up
        _ => Vec::new(),
    }
}
