//! Keyboard dispatch for the TUI

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, InputMode};
use crate::core::{Action, Module};
use crate::domain::dashboard::ElementId;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Blocking notifications swallow everything until dismissed.
    if app.current_alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_alert();
        }
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => return app.apply_action(Action::FocusNext),
        KeyCode::BackTab => return app.apply_action(Action::FocusPrev),
        _ => {}
    }

    // The lead field is a text input: printable keys belong to it.
    if app.ctx.focus == ElementId::QuickActionLead {
        let action = app.form.handle_key(key, &mut app.ctx);
        app.apply_action(action);
        return;
    }

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char(':') => Action::OpenCommand,
        KeyCode::Char('r') => Action::RefreshStats,
        _ if app.ctx.focus.is_form_field() => app.form.handle_key(key, &mut app.ctx),
        _ => app.dashboard.handle_key(key, &mut app.ctx),
    };
    app.apply_action(action);
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            if app.command.input.is_empty() {
                app.exit_command();
            } else {
                app.command.input.pop();
            }
        }
        KeyCode::Up => {
            if let Some(last) = app.command.last.clone() {
                app.command.input = last;
            }
        }
        KeyCode::Char(ch) => app.command.input.push(ch),
        _ => {}
    }
}
