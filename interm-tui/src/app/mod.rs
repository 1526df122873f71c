use crate::{components, keymap, theme::Theme};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use interm_core::{
    command::Command,
    editor::EditorProvider,
    entry::EntryView,
    error::BrowseError,
    fs::FsProvider,
    state::{BrowserState, Mode, StatusLine, transition},
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// What to do after executing one command from a transition.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Skip the rest of this transition's commands
    Halt,
    /// Hand the terminal to the editor for this path
    Editor(PathBuf),
    Quit,
}

pub fn run(
    terminal: &mut DefaultTerminal,
    state: &mut BrowserState,
    fs: &Arc<dyn FsProvider>,
    editor: &Arc<dyn EditorProvider>,
    theme: &Theme,
) -> Result<()> {
    refresh_entries(state, fs.as_ref());

    loop {
        terminal.draw(|f| draw(f, state, theme))?;

        // One blocking read is the whole event loop: the filesystem is the
        // only other actor and it is consulted strictly between events.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Clear any leftover status from the previous event
        state.status = None;

        let Some(action) = keymap::resolve_action(key, state) else {
            continue;
        };
        log::debug!("action: {action:?}");

        for command in transition(state, action) {
            match execute_command(command, state, fs.as_ref()) {
                Flow::Continue => {}
                Flow::Halt => break,
                Flow::Quit => return Ok(()),
                Flow::Editor(path) => {
                    let result = run_suspended(terminal, editor.as_ref(), &path);
                    finish_editor(state, fs.as_ref(), result);
                    // SpawnEditor is always the last command of a transition
                    break;
                }
            }
        }
    }
}

fn draw(f: &mut Frame, state: &mut BrowserState, theme: &Theme) {
    let (main_area, status_area) = if state.status.is_some() {
        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(f.area());
        (chunks[0], Some(chunks[1]))
    } else {
        (f.area(), None)
    };

    // Movement needs to know how many rows are on screen before the next
    // event is handled.
    state.set_viewport_rows(list_rows(main_area));

    components::browser::draw(f, main_area, state, theme);

    match &state.mode {
        Mode::NamingFile(_) => components::name_prompt::draw(f, state, theme),
        Mode::ConfirmDelete { name } => draw_confirm_delete_dialog(f, main_area, name, theme),
        Mode::Browsing | Mode::Suspended => {}
    }

    if let Some(area) = status_area {
        components::status_bar::draw(f, area, state, theme);
    }
}

/// Rows available to the listing: the frame minus its borders and the footer
/// hint line. Zero on a tiny terminal, which the scroll math tolerates.
fn list_rows(area: Rect) -> usize {
    usize::from(area.height.saturating_sub(3))
}

fn draw_confirm_delete_dialog(f: &mut Frame, area: Rect, name: &str, theme: &Theme) {
    let text = vec![
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(
                format!("\"{name}\""),
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("? This cannot be undone!"),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::raw("confirm ("),
            Span::styled("y", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(") / cancel (any other key)"),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm Delete ")
        .border_style(Style::default().fg(theme.error));

    let centered = components::centered_rect(50, 20, area);
    f.render_widget(Clear, centered);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, centered);
}

fn execute_command(command: Command, state: &mut BrowserState, fs: &dyn FsProvider) -> Flow {
    match command {
        Command::Quit => Flow::Quit,

        Command::EnterDirectory(path) => {
            // Only descend once the target actually lists; otherwise stay
            // put with a warning.
            match fs.list(&path) {
                Ok(names) => {
                    let entries = build_entries(fs, &path, names);
                    state.enter_directory(path, entries);
                }
                Err(err) => {
                    log::warn!("cannot enter directory: {err}");
                    state.status = Some(StatusLine::error(err.to_string()));
                }
            }
            Flow::Continue
        }

        Command::CreateFile(path) => match fs.create_file(&path) {
            Ok(()) => Flow::Continue,
            Err(err) => {
                log::warn!("create failed: {err}");
                // Skip the queued editor handoff; the cursor stays where it was
                state.resume_browsing();
                state.status = Some(StatusLine::error(err.to_string()));
                refresh_entries(state, fs);
                Flow::Halt
            }
        },

        Command::DeleteFile(path) => {
            match fs.remove_file(&path) {
                Ok(()) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    state.status = Some(StatusLine::info(format!("Deleted {name}")));
                }
                Err(err) => {
                    log::warn!("delete failed: {err}");
                    state.status = Some(StatusLine::error(err.to_string()));
                }
            }
            // Successful or stale, the fresh listing is authoritative and the
            // cursor is clamped against it.
            refresh_entries(state, fs);
            Flow::Continue
        }

        Command::SpawnEditor(path) => Flow::Editor(path),
    }
}

/// Tear down raw mode and the alternate screen, hand the tty to the child,
/// rebuild afterwards. Blocks until the editor exits; a hung editor blocks
/// the browser, there is no cancellation.
fn run_suspended(
    terminal: &mut DefaultTerminal,
    editor: &dyn EditorProvider,
    path: &Path,
) -> Result<(), BrowseError> {
    ratatui::restore();
    let result = editor.edit(path);
    *terminal = ratatui::init();
    result
}

fn finish_editor(state: &mut BrowserState, fs: &dyn FsProvider, result: Result<(), BrowseError>) {
    state.resume_browsing();
    if let Err(err) = result {
        log::error!("{err}");
        state.status = Some(StatusLine::error(err.to_string()));
    }
    // The file may have changed or vanished while the screen was away
    refresh_entries(state, fs);
}

/// Relist the current directory. An unreadable directory degrades to an
/// empty listing plus a warning rather than aborting the loop.
fn refresh_entries(state: &mut BrowserState, fs: &dyn FsProvider) {
    let entries = match fs.list(&state.cwd) {
        Ok(names) => build_entries(fs, &state.cwd, names),
        Err(err) => {
            log::warn!("relist failed: {err}");
            state.status = Some(StatusLine::error(err.to_string()));
            Vec::new()
        }
    };
    state.replace_entries(entries);
}

fn build_entries(fs: &dyn FsProvider, dir: &Path, names: Vec<String>) -> Vec<EntryView> {
    names
        .into_iter()
        .map(|name| {
            let kind = fs.classify(dir, &name);
            EntryView { name, kind }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use interm_core::{
        action::Action, editor::MockEditorProvider, entry::EntryKind, fs::MockFsProvider,
    };

    fn state_at(fs: &MockFsProvider, cwd: &str) -> BrowserState {
        let mut state = BrowserState::new(PathBuf::from(cwd));
        refresh_entries(&mut state, fs);
        state
    }

    /// Run one action end to end the way the loop does, minus the terminal:
    /// transition, execute commands, simulate the editor handoff.
    fn drive(
        state: &mut BrowserState,
        fs: &MockFsProvider,
        editor: &MockEditorProvider,
        action: Action,
    ) -> bool {
        state.status = None;
        for command in transition(state, action) {
            match execute_command(command, state, fs) {
                Flow::Continue => {}
                Flow::Halt => break,
                Flow::Quit => return true,
                Flow::Editor(path) => {
                    let result = editor.edit(&path);
                    finish_editor(state, fs, result);
                    break;
                }
            }
        }
        false
    }

    #[test]
    fn test_open_descends_and_resets_selection() {
        let fs = MockFsProvider::with_dir("/start", &["docs", "readme.txt"]);
        fs.insert_dir("/start/docs", &["guide.md"]);
        let editor = MockEditorProvider::default();
        let mut state = state_at(&fs, "/start");

        assert_eq!(state.entries[0].kind, EntryKind::Directory);
        drive(&mut state, &fs, &editor, Action::Open);

        assert_eq!(state.cwd, PathBuf::from("/start/docs"));
        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].name, "guide.md");
    }

    #[test]
    fn test_open_unreadable_directory_stays_put() {
        let fs = MockFsProvider::with_dir("/start", &["broken"]);
        fs.set_kind("/start/broken", EntryKind::Directory);
        let editor = MockEditorProvider::default();
        let mut state = state_at(&fs, "/start");

        drive(&mut state, &fs, &editor, Action::Open);

        assert_eq!(state.cwd, PathBuf::from("/start"));
        assert!(state.status.is_some());
        assert_eq!(state.entries.len(), 1);
    }

    #[test]
    fn test_edit_spawns_editor_and_returns_to_browsing() {
        let fs = MockFsProvider::with_dir("/start", &["notes.txt"]);
        let editor = MockEditorProvider::default();
        let mut state = state_at(&fs, "/start");

        drive(&mut state, &fs, &editor, Action::Edit);

        assert_eq!(
            editor.edited.lock().unwrap().as_slice(),
            &[PathBuf::from("/start/notes.txt")]
        );
        assert_eq!(state.mode, Mode::Browsing);
    }

    #[test]
    fn test_editor_spawn_failure_is_surfaced() {
        let fs = MockFsProvider::with_dir("/start", &["notes.txt"]);
        let editor = MockEditorProvider::default();
        *editor.edit_result.lock().unwrap() = Some(Err(BrowseError::EditorSpawn {
            command: "nano".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }));
        let mut state = state_at(&fs, "/start");

        drive(&mut state, &fs, &editor, Action::Edit);

        assert_eq!(state.mode, Mode::Browsing);
        let status = state.status.expect("spawn failure should be reported");
        assert!(status.text.contains("nano"));
    }

    #[test]
    fn test_create_flow_creates_then_edits() {
        let fs = MockFsProvider::with_dir("/start", &["a.txt"]);
        let editor = MockEditorProvider::default();
        let mut state = state_at(&fs, "/start");

        drive(&mut state, &fs, &editor, Action::PromptNewFile);
        for c in "notes.txt".chars() {
            drive(&mut state, &fs, &editor, Action::InputPush(c));
        }
        drive(&mut state, &fs, &editor, Action::InputSubmit);

        assert_eq!(
            fs.created.lock().unwrap().as_slice(),
            &[PathBuf::from("/start/notes.txt")]
        );
        assert_eq!(
            editor.edited.lock().unwrap().as_slice(),
            &[PathBuf::from("/start/notes.txt")]
        );
        assert_eq!(state.mode, Mode::Browsing);
        assert!(state.entries.iter().any(|e| e.name == "notes.txt"));
    }

    #[test]
    fn test_create_collision_skips_editor() {
        let fs = MockFsProvider::with_dir("/start", &["a.txt", "taken.txt"]);
        let editor = MockEditorProvider::default();
        let mut state = state_at(&fs, "/start");
        drive(&mut state, &fs, &editor, Action::MoveSelection(1));

        drive(&mut state, &fs, &editor, Action::PromptNewFile);
        for c in "taken.txt".chars() {
            drive(&mut state, &fs, &editor, Action::InputPush(c));
        }
        drive(&mut state, &fs, &editor, Action::InputSubmit);

        assert!(editor.edited.lock().unwrap().is_empty());
        assert_eq!(state.mode, Mode::Browsing);
        let status = state.status.expect("collision should be reported");
        assert!(status.text.contains("already exists"));
        // The cursor did not advance
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_delete_last_entry_clamps_cursor_back() {
        let fs = MockFsProvider::with_dir("/work", &["a", "b", "c"]);
        let editor = MockEditorProvider::default();
        let mut state = state_at(&fs, "/work");
        drive(&mut state, &fs, &editor, Action::MoveSelection(2));
        assert_eq!(state.entries[state.cursor].name, "c");

        drive(&mut state, &fs, &editor, Action::RequestDelete);
        drive(&mut state, &fs, &editor, Action::ConfirmDelete);

        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.cursor, 1);
        assert_eq!(state.entries[state.cursor].name, "b");
    }

    #[test]
    fn test_delete_first_entry_keeps_cursor_index() {
        let fs = MockFsProvider::with_dir("/work", &["a", "b", "c"]);
        let editor = MockEditorProvider::default();
        let mut state = state_at(&fs, "/work");

        drive(&mut state, &fs, &editor, Action::RequestDelete);
        drive(&mut state, &fs, &editor, Action::ConfirmDelete);

        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.entries[state.cursor].name, "b");
    }

    #[test]
    fn test_stale_delete_reports_and_relists() {
        let fs = MockFsProvider::with_dir("/work", &["a", "gone.txt"]);
        let editor = MockEditorProvider::default();
        let mut state = state_at(&fs, "/work");
        drive(&mut state, &fs, &editor, Action::MoveSelection(1));
        drive(&mut state, &fs, &editor, Action::RequestDelete);

        // The file vanishes externally between confirmation and unlink
        fs.insert_dir("/work", &["a"]);
        *fs.remove_file_result.lock().unwrap() =
            Some(Err(BrowseError::NotFound(PathBuf::from("/work/gone.txt"))));

        drive(&mut state, &fs, &editor, Action::ConfirmDelete);

        assert_eq!(state.mode, Mode::Browsing);
        let status = state.status.expect("stale delete should be reported");
        assert!(status.text.contains("no longer exists"));
        // The forced relist dropped the vanished entry and clamped the cursor
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_relist_failure_degrades_to_empty_listing() {
        let fs = MockFsProvider::with_dir("/work", &["a"]);
        let editor = MockEditorProvider::default();
        let mut state = state_at(&fs, "/work");
        assert_eq!(state.entries.len(), 1);

        // Directory becomes unreadable, then the editor round-trip forces a
        // relist
        fs.listings.lock().unwrap().clear();
        drive(&mut state, &fs, &editor, Action::Edit);

        assert!(state.entries.is_empty());
        assert_eq!(state.cursor, 0);
        assert!(state.status.is_some());
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let fs = MockFsProvider::with_dir("/work", &[]);
        let editor = MockEditorProvider::default();
        let mut state = state_at(&fs, "/work");
        assert!(drive(&mut state, &fs, &editor, Action::Quit));
    }

    #[test]
    fn test_list_rows_degenerates_on_tiny_terminal() {
        assert_eq!(list_rows(Rect::new(0, 0, 80, 24)), 21);
        assert_eq!(list_rows(Rect::new(0, 0, 80, 3)), 0);
        assert_eq!(list_rows(Rect::new(0, 0, 80, 0)), 0);
    }
}
