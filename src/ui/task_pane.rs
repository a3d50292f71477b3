use crate::app::AppState;
use crate::domain::Priority;
use crate::ui::styles::{
    border_style, default_style, done_style, high_priority_style, hint_style, linked_style,
    low_priority_style, medium_priority_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn priority_span(priority: Priority) -> Span<'static> {
    let style = match priority {
        Priority::High => high_priority_style(),
        Priority::Medium => medium_priority_style(),
        Priority::Low => low_priority_style(),
    };
    Span::styled(priority.badge(), style)
}

/// Render the task list pane
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Tasks ", title_style()));

    if app.tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No tasks yet — press 'a' to add one",
            hint_style(),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let linked_id = app.timer.linked_task();

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let selected = index == app.selected_index;

            let checkbox = if task.completed { "[x] " } else { "[ ] " };
            let text_style = if selected {
                selected_style()
            } else if task.completed {
                done_style()
            } else {
                default_style()
            };

            let mut spans = vec![
                Span::raw(checkbox),
                priority_span(task.priority),
                Span::raw(" "),
                Span::styled(task.title.clone(), text_style),
                Span::raw("  "),
                Span::styled(format!("🍅 {}", task.interval_tally()), hint_style()),
            ];

            if linked_id == Some(task.id) {
                spans.push(Span::raw("  "));
                spans.push(Span::styled("⏱ linked", linked_style()));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}
