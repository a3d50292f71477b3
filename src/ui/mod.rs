pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod settings_pane;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use settings_pane::render_settings_form;
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_task_pane(f, app, layout.list_area);
    render_timer_pane(f, app, layout.timer_area);

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }

    // Render settings form if active
    if app.settings_form.is_some() {
        render_settings_form(f, app, size);
    }
}
