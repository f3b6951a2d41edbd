use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use recipehub_core::viewmodel::{NavTab, ViewId};
use recipehub_core::View;

use crate::app::{App, EditorFocus};

/// Poll for keyboard events with timeout
pub fn poll_event(timeout_ms: u64) -> anyhow::Result<Option<Event>> {
    if event::poll(Duration::from_millis(timeout_ms))? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle one terminal event
pub fn handle_event(app: &mut App, event: Event) -> anyhow::Result<()> {
    let Event::Key(key) = event else {
        // Resize handled by ratatui automatically
        return Ok(());
    };
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Ok(());
    }

    // The login modal sits on top of everything else
    if app.controller.login_form().is_some() {
        handle_login(app, key);
        return Ok(());
    }

    if !app.is_signed_in() {
        handle_landing(app, key.code);
        return Ok(());
    }

    if handle_global(app, key.code) {
        return Ok(());
    }

    match app.controller.view_id() {
        ViewId::Dashboard => handle_dashboard(app, key.code),
        ViewId::Create => handle_editor(app, key),
        ViewId::ViewRecipe => handle_viewer(app, key.code),
        ViewId::Collaborations => handle_collaborations(app, key.code),
    }
    Ok(())
}

fn handle_landing(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Char('l') => app.open_login(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_login(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_login_mode()
        }
        KeyCode::Tab | KeyCode::Down => app.login_focus_next(),
        KeyCode::Enter => {
            if app.controller.submit_login().is_ok() {
                app.status = None;
            }
        }
        KeyCode::Esc => app.controller.close_login(),
        KeyCode::Backspace => app.login_backspace(),
        KeyCode::Char(c) => app.login_type(c),
        _ => {}
    }
}

/// Navigation keys available on every screen. Returns true when consumed.
fn handle_global(app: &mut App, code: KeyCode) -> bool {
    let tab = match code {
        KeyCode::F(1) => NavTab::Dashboard,
        KeyCode::F(2) => NavTab::CreateRecipe,
        KeyCode::F(3) => NavTab::Collaborations,
        KeyCode::F(10) => {
            app.controller.logout();
            app.searching = false;
            return true;
        }
        _ => return false,
    };
    let was_editor = matches!(app.controller.view(), View::Editor(_));
    app.controller.change_view(tab);
    if !was_editor && tab == NavTab::CreateRecipe {
        app.reset_editor_focus();
    }
    app.searching = false;
    true
}

fn handle_dashboard(app: &mut App, code: KeyCode) {
    if app.searching {
        let View::Dashboard(dashboard) = app.controller.view_mut() else {
            return;
        };
        match code {
            KeyCode::Enter | KeyCode::Esc => app.searching = false,
            KeyCode::Backspace => dashboard.pop_query_char(),
            KeyCode::Char(c) => dashboard.push_query_char(c),
            _ => {}
        }
        return;
    }

    let visible_len = match app.controller.view() {
        View::Dashboard(dashboard) => dashboard
            .visible(app.controller.book(), app.controller.user_name())
            .len(),
        _ => 0,
    };

    match code {
        KeyCode::Char('/') => app.searching = true,
        KeyCode::Char('n') => {
            app.controller.create_new();
            app.reset_editor_focus();
        }
        KeyCode::Enter => {
            app.controller.select_from_dashboard();
        }
        KeyCode::Char('q') => app.should_quit = true,
        code => {
            let View::Dashboard(dashboard) = app.controller.view_mut() else {
                return;
            };
            match code {
                KeyCode::Up | KeyCode::Char('k') => dashboard.move_up(),
                KeyCode::Down | KeyCode::Char('j') => dashboard.move_down(visible_len),
                KeyCode::Tab => dashboard.cycle_filter(),
                _ => {}
            }
        }
    }
}

fn handle_editor(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => app.save_editor(),
            KeyCode::Char('a') => app.editor_add_row(),
            KeyCode::Char('d') => app.editor_remove_row(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.controller.cancel_edit();
            app.status = None;
        }
        KeyCode::Tab | KeyCode::Down => app.editor_focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.editor_focus_prev(),
        KeyCode::Right => app.editor_step_value(true),
        KeyCode::Left => app.editor_step_value(false),
        KeyCode::Enter if app.editor_focus == EditorFocus::Tags => app.editor_commit_tag(),
        KeyCode::Enter => app.editor_focus_next(),
        KeyCode::Backspace => app.editor_backspace(),
        KeyCode::Char(c) => app.editor_type(c),
        _ => {}
    }
}

fn handle_viewer(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Backspace => {
            app.controller.back_to_dashboard();
            return;
        }
        KeyCode::Char('e') => {
            app.controller.edit_selected();
            app.reset_editor_focus();
            return;
        }
        _ => {}
    }

    let View::Recipe(viewer) = app.controller.view_mut() else {
        return;
    };

    // Any key dismisses a finished-timer notice
    if viewer.notification().is_some() {
        viewer.dismiss_notification();
        return;
    }

    match code {
        KeyCode::Char('+') | KeyCode::Char('=') => viewer.increase_servings(),
        KeyCode::Char('-') => viewer.decrease_servings(),
        KeyCode::Left | KeyCode::Char('h') => {
            viewer.previous_step();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            viewer.next_step();
        }
        KeyCode::Char('t') => {
            viewer.start_timer_for_current_step();
        }
        KeyCode::Char(' ') => {
            viewer.toggle_timer();
        }
        KeyCode::Char('r') => {
            viewer.reset_timer();
        }
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_collaborations(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('c') | KeyCode::Enter => {
            app.controller.create_new();
            app.reset_editor_focus();
        }
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}
