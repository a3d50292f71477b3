use crate::app::AppState;
use crate::timer::Phase;
use crate::ui::styles::{
    border_style, break_style, countdown_style, gauge_style, hint_style, paused_style,
    ready_style, title_style, working_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

fn phase_style(phase: Phase) -> ratatui::style::Style {
    match phase {
        Phase::Working => working_style(),
        Phase::ShortBreak | Phase::LongBreak => break_style(),
        Phase::Paused => paused_style(),
        Phase::Ready => ready_style(),
    }
}

/// Render the timer pane: phase, countdown, progress, completion count,
/// linked task
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Pomodoro ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // phase
            Constraint::Length(1), // countdown
            Constraint::Length(1), // spacer
            Constraint::Length(1), // gauge
            Constraint::Length(1), // spacer
            Constraint::Length(1), // completed count
            Constraint::Length(1), // linked task
            Constraint::Min(0),
        ])
        .split(inner);

    let phase = app.timer.phase();

    let phase_line = Paragraph::new(Line::from(Span::styled(phase.label(), phase_style(phase))))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(phase_line, chunks[1]);

    // While Ready the countdown shows the configured work length, so the
    // user sees what a start would give them.
    let display = if phase == Phase::Ready {
        format!("{:02}:00", app.timer.config().work_minutes)
    } else {
        app.timer.remaining_display()
    };
    let countdown = Paragraph::new(Line::from(Span::styled(display, countdown_style())))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(countdown, chunks[2]);

    if phase != Phase::Ready {
        let gauge = Gauge::default()
            .gauge_style(gauge_style())
            .ratio(app.timer.progress_ratio())
            .label("");
        f.render_widget(gauge, chunks[4]);
    }

    let completed = Paragraph::new(Line::from(vec![
        Span::styled("Completed intervals: ", hint_style()),
        Span::raw(app.timer.completed_intervals().to_string()),
    ]))
    .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(completed, chunks[6]);

    let linked_line = match app.linked_task_title() {
        Some(title) => Line::from(vec![
            Span::styled("Linked: ", hint_style()),
            Span::raw(title.to_string()),
        ]),
        None => Line::from(Span::styled("No linked task — press 'l'", hint_style())),
    };
    let linked = Paragraph::new(linked_line).alignment(ratatui::layout::Alignment::Center);
    f.render_widget(linked, chunks[7]);
}
