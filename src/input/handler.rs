use crate::app::{AppState, InputFormState};
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTask => handle_input_form_mode(app, key),
        UiMode::Settings => handle_settings_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Timer control
        KeyCode::Char(' ') => {
            app.toggle_timer();
            Ok(false)
        }
        KeyCode::Char('r') => {
            app.reset_timer();
            Ok(false)
        }

        // Task actions
        KeyCode::Enter => {
            app.toggle_selected_completed();
            Ok(false)
        }
        KeyCode::Char('a') => {
            app.input_form = Some(InputFormState::blank());
            app.ui_mode = UiMode::AddingTask;
            Ok(false)
        }
        KeyCode::Char('e') => {
            if let Some(task) = app.selected_task() {
                app.input_form = Some(InputFormState::for_item(task));
                app.ui_mode = UiMode::EditingTask;
            }
            Ok(false)
        }
        KeyCode::Char('d') => {
            app.delete_selected();
            Ok(false)
        }
        KeyCode::Char('l') => {
            app.toggle_link_selected();
            Ok(false)
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.increase_selected_estimate();
            Ok(false)
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.decrease_selected_estimate();
            Ok(false)
        }

        // Settings
        KeyCode::Char('o') => {
            app.open_settings();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the add/edit task form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let Some(form) = app.input_form.as_mut() else {
        app.ui_mode = UiMode::Normal;
        return Ok(false);
    };

    match key.code {
        KeyCode::Tab => {
            // 0 = title, 1 = notes, 2 = priority
            form.editing_field = (form.editing_field + 1) % 3;
        }
        KeyCode::BackTab => {
            form.editing_field = (form.editing_field + 2) % 3;
        }
        KeyCode::Left | KeyCode::Right if form.editing_field == 2 => {
            form.priority = form.priority.next();
        }
        KeyCode::Char(c) if form.editing_field == 0 => form.title.push(c),
        KeyCode::Char(c) if form.editing_field == 1 => form.notes.push(c),
        KeyCode::Backspace => match form.editing_field {
            0 => {
                form.title.pop();
            }
            1 => {
                form.notes.pop();
            }
            _ => {}
        },
        KeyCode::Enter => app.apply_input_form(),
        KeyCode::Esc => {
            app.input_form = None;
            app.ui_mode = UiMode::Normal;
        }
        _ => {}
    }

    Ok(false)
}

/// Handle keys while the settings form is open
fn handle_settings_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let Some(form) = app.settings_form.as_mut() else {
        app.ui_mode = UiMode::Normal;
        return Ok(false);
    };

    match key.code {
        KeyCode::Up => form.select_previous(),
        KeyCode::Down => form.select_next(),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => form.increase(),
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('_') => form.decrease(),
        KeyCode::Char('d') => form.reset_to_defaults(),
        KeyCode::Enter => app.apply_settings_form(),
        KeyCode::Esc => app.cancel_settings_form(),
        _ => {}
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use crate::timer::{Phase, TimerConfig};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = AppState::new(TimerConfig::default());
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));
        assert!(!press(&mut app, KeyCode::Char('z')));
    }

    #[test]
    fn test_space_toggles_timer() {
        let mut app = AppState::new(TimerConfig::default());
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.timer.phase(), Phase::Working);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.timer.phase(), Phase::Paused);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.timer.phase(), Phase::Ready);
    }

    #[test]
    fn test_add_task_through_form() {
        let mut app = AppState::new(TimerConfig::default());
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        type_text(&mut app, "Read the RFC");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "sections 3-5");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right); // Medium -> High
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "Read the RFC");
        assert_eq!(app.tasks[0].notes, "sections 3-5");
        assert_eq!(app.tasks[0].priority, Priority::High);
    }

    #[test]
    fn test_form_escape_cancels() {
        let mut app = AppState::new(TimerConfig::default());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_settings_flow() {
        let mut app = AppState::new(TimerConfig::default());
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.ui_mode, UiMode::Settings);

        // Bump work minutes twice, then cadence once.
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Up); // wraps to cadence field
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.timer.config().work_minutes, 27);
        assert_eq!(app.timer.config().intervals_until_long_break, 5);
        assert!(app.needs_settings_save);
    }

    #[test]
    fn test_link_key() {
        let mut app = AppState::new(TimerConfig::default());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Focus");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.timer.linked_task(), Some(app.tasks[0].id));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.timer.linked_task(), None);
    }
}
