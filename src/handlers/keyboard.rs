//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions. Modal dialogs get the
//! key first; only when none is open does it reach the listing.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use arbor::logic::ui::cycle_display_mode;
use arbor::ClipboardIntent;

use crate::state::VimCommandState;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ignore release/repeat events reported by some terminals
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Ctrl-C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.ui.close_all_modals();
        app.ui.should_quit = true;
        return Ok(());
    }

    // Handle text prompt (new folder / rename)
    if let Some(prompt) = &mut app.ui.prompt {
        match key.code {
            KeyCode::Enter => app.submit_prompt(),
            KeyCode::Esc => app.ui.prompt = None,
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c) => prompt.input.push(c),
            _ => {}
        }
        return Ok(());
    }

    // Handle delete confirmation prompt
    if app.ui.confirm_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.ui.confirm_delete = None;
            }
            _ => {}
        }
        return Ok(());
    }

    // Handle properties popup
    if app.ui.properties.is_some() {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('i') | KeyCode::Char('q')
        ) {
            app.ui.properties = None;
        }
        return Ok(());
    }

    // Handle search input
    if app.ui.search_mode {
        match key.code {
            KeyCode::Esc => app.clear_search(),
            KeyCode::Enter => app.accept_search(),
            KeyCode::Backspace => app.search_pop(),
            KeyCode::Char(c) => app.search_push(c),
            KeyCode::Up => app.previous_item(),
            KeyCode::Down => app.next_item(),
            _ => {}
        }
        return Ok(());
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // 'gg' sequence
    if app.ui.vim_mode && key.code == KeyCode::Char('g') {
        if app.ui.vim_command_state == VimCommandState::WaitingForSecondG {
            app.ui.vim_command_state = VimCommandState::None;
            app.jump_to_first();
        } else {
            app.ui.vim_command_state = VimCommandState::WaitingForSecondG;
        }
        return Ok(());
    }
    app.ui.vim_command_state = VimCommandState::None;

    let page = app.ui.page_height.max(1);

    match key.code {
        KeyCode::Char('q') => app.ui.should_quit = true,

        // History
        KeyCode::Left if alt => app.go_back(),
        KeyCode::Right if alt => app.go_forward(),

        // Range selection
        KeyCode::Up if shift => app.extend_selection(false),
        KeyCode::Down if shift => app.extend_selection(true),

        // Vim paging
        KeyCode::Char('d') if app.ui.vim_mode && ctrl => app.page_down(page / 2),
        KeyCode::Char('u') if app.ui.vim_mode && ctrl => app.page_up(page / 2),
        KeyCode::Char('G') if app.ui.vim_mode => app.jump_to_last(),

        KeyCode::Up => app.previous_item(),
        KeyCode::Down => app.next_item(),
        KeyCode::Char('k') if app.ui.vim_mode => app.previous_item(),
        KeyCode::Char('j') if app.ui.vim_mode => app.next_item(),
        KeyCode::PageUp => app.page_up(page),
        KeyCode::PageDown => app.page_down(page),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),

        KeyCode::Enter | KeyCode::Right => app.open_cursor_item(),
        KeyCode::Char('l') if app.ui.vim_mode => app.open_cursor_item(),
        KeyCode::Backspace | KeyCode::Left => app.go_up(),
        KeyCode::Char('h') if app.ui.vim_mode => app.go_up(),
        KeyCode::Char('~') => app.go_home(),

        // Selection
        KeyCode::Char(' ') => {
            app.toggle_cursor_selection();
            app.next_item();
        }
        KeyCode::Char('a') => app.select_all(),
        KeyCode::Esc => {
            if app.explorer.search_query().is_empty() {
                app.clear_selection();
            } else {
                app.clear_search();
            }
        }

        // Mutation
        KeyCode::Char('n') => app.start_new_folder(),
        KeyCode::Char('r') | KeyCode::F(2) => app.start_rename(),
        KeyCode::Char('d') if !ctrl => app.request_delete(),
        KeyCode::Delete => app.request_delete(),
        KeyCode::Char('c') => app.stage(ClipboardIntent::Copy),
        KeyCode::Char('x') => app.stage(ClipboardIntent::Move),
        KeyCode::Char('v') => app.paste(),

        // View
        KeyCode::Char('s') => app.cycle_sort_column(),
        KeyCode::Char('S') => app.toggle_sort_reverse(),
        KeyCode::Char('t') => app.ui.display_mode = cycle_display_mode(app.ui.display_mode),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('f') if ctrl => app.start_search(),
        KeyCode::Char('i') => app.show_properties(),
        KeyCode::F(5) => {
            app.explorer.refresh();
            app.clamp_cursor();
        }
        _ => {}
    }

    Ok(())
}
