use crate::app::AppState;
use crate::timer::config::{
    CADENCE_RANGE, LONG_BREAK_MINUTES_RANGE, SHORT_BREAK_MINUTES_RANGE, WORK_MINUTES_RANGE,
};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, selected_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the settings form modal
pub fn render_settings_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.settings_form {
        let modal_area = create_modal_area(area);
        f.render_widget(Clear, modal_area);

        let rows = [
            (
                "Work",
                form.draft.work_minutes,
                "min",
                format!("{}-{}", WORK_MINUTES_RANGE.start(), WORK_MINUTES_RANGE.end()),
            ),
            (
                "Short break",
                form.draft.short_break_minutes,
                "min",
                format!(
                    "{}-{}",
                    SHORT_BREAK_MINUTES_RANGE.start(),
                    SHORT_BREAK_MINUTES_RANGE.end()
                ),
            ),
            (
                "Long break",
                form.draft.long_break_minutes,
                "min",
                format!(
                    "{}-{}",
                    LONG_BREAK_MINUTES_RANGE.start(),
                    LONG_BREAK_MINUTES_RANGE.end()
                ),
            ),
            (
                "Intervals per long break",
                form.draft.intervals_until_long_break,
                "",
                format!("{}-{}", CADENCE_RANGE.start(), CADENCE_RANGE.end()),
            ),
        ];

        let mut lines = vec![Line::raw("")];
        for (index, (label, value, unit, range)) in rows.iter().enumerate() {
            let style = if index == form.selected_field {
                selected_style()
            } else {
                modal_bg_style()
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:<26}", label), style),
                Span::styled(format!("◂ {:>2} {} ▸", value, unit), style),
                Span::raw(format!("   ({})", range)),
            ]));
            lines.push(Line::raw(""));
        }

        lines.push(Line::raw(
            "↑/↓ field  ·  ←/→ adjust  ·  d defaults  ·  Enter save  ·  Esc cancel",
        ));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Settings ", modal_title_style()))
                .style(modal_bg_style()),
        );

        f.render_widget(paragraph, modal_area);
    }
}
