use crate::domain::{Priority, TodoItem, UiMode};
use crate::notifications;
use crate::timer::config::{
    CADENCE_RANGE, LONG_BREAK_MINUTES_RANGE, SHORT_BREAK_MINUTES_RANGE, WORK_MINUTES_RANGE,
};
use crate::timer::{IntervalTimer, Phase, TimerConfig, TimerEvent};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use uuid::Uuid;

/// Input form state for adding or editing a task
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub title: String,
    pub notes: String,
    pub priority: Priority,
    pub editing_field: usize, // 0 = title, 1 = notes
    /// Some when editing an existing task
    pub editing_id: Option<Uuid>,
}

impl InputFormState {
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            notes: String::new(),
            priority: Priority::Medium,
            editing_field: 0,
            editing_id: None,
        }
    }

    pub fn for_item(item: &TodoItem) -> Self {
        Self {
            title: item.title.clone(),
            notes: item.notes.clone(),
            priority: item.priority,
            editing_field: 0,
            editing_id: Some(item.id),
        }
    }
}

/// Settings form state. Fields are edited by increment/decrement and kept
/// within bounds while editing; the timer re-validates on apply anyway.
#[derive(Debug, Clone)]
pub struct SettingsFormState {
    pub draft: TimerConfig,
    pub selected_field: usize, // 0 work, 1 short break, 2 long break, 3 cadence
}

pub const SETTINGS_FIELD_COUNT: usize = 4;

impl SettingsFormState {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            draft: config,
            selected_field: 0,
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_field = (self.selected_field + SETTINGS_FIELD_COUNT - 1) % SETTINGS_FIELD_COUNT;
    }

    pub fn select_next(&mut self) {
        self.selected_field = (self.selected_field + 1) % SETTINGS_FIELD_COUNT;
    }

    pub fn increase(&mut self) {
        match self.selected_field {
            0 => {
                self.draft.work_minutes =
                    (self.draft.work_minutes + 1).min(*WORK_MINUTES_RANGE.end())
            }
            1 => {
                self.draft.short_break_minutes =
                    (self.draft.short_break_minutes + 1).min(*SHORT_BREAK_MINUTES_RANGE.end())
            }
            2 => {
                self.draft.long_break_minutes =
                    (self.draft.long_break_minutes + 1).min(*LONG_BREAK_MINUTES_RANGE.end())
            }
            _ => {
                self.draft.intervals_until_long_break =
                    (self.draft.intervals_until_long_break + 1).min(*CADENCE_RANGE.end())
            }
        }
    }

    pub fn decrease(&mut self) {
        match self.selected_field {
            0 => {
                self.draft.work_minutes =
                    (self.draft.work_minutes - 1).max(*WORK_MINUTES_RANGE.start())
            }
            1 => {
                self.draft.short_break_minutes =
                    (self.draft.short_break_minutes - 1).max(*SHORT_BREAK_MINUTES_RANGE.start())
            }
            2 => {
                self.draft.long_break_minutes =
                    (self.draft.long_break_minutes - 1).max(*LONG_BREAK_MINUTES_RANGE.start())
            }
            _ => {
                self.draft.intervals_until_long_break =
                    (self.draft.intervals_until_long_break - 1).max(*CADENCE_RANGE.start())
            }
        }
    }

    pub fn reset_to_defaults(&mut self) {
        self.draft = TimerConfig::default();
    }
}

/// Main application state
pub struct AppState {
    pub tasks: Vec<TodoItem>,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub settings_form: Option<SettingsFormState>,
    pub timer: IntervalTimer,
    /// Mailbox fed by the timer's observer subscription, drained each loop
    timer_events: Rc<RefCell<VecDeque<TimerEvent>>>,
    pub needs_settings_save: bool,
}

impl AppState {
    pub fn new(config: TimerConfig) -> Self {
        Self::with_timer(IntervalTimer::new(config))
    }

    pub fn with_timer(mut timer: IntervalTimer) -> Self {
        let timer_events: Rc<RefCell<VecDeque<TimerEvent>>> = Rc::new(RefCell::new(VecDeque::new()));
        let mailbox = timer_events.clone();
        timer.subscribe(move |event| mailbox.borrow_mut().push_back(*event));

        Self {
            tasks: Vec::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            settings_form: None,
            timer,
            timer_events,
            needs_settings_save: false,
        }
    }

    // --- Task list ---

    pub fn selected_task(&self) -> Option<&TodoItem> {
        self.tasks.get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    pub fn add_task(&mut self, title: String, notes: String, priority: Priority) {
        self.tasks.push(TodoItem::new(title, notes, priority));
    }

    /// Submit the input form: adds a new task or applies edits to an
    /// existing one. Forms with an empty title are discarded.
    pub fn apply_input_form(&mut self) {
        let Some(form) = self.input_form.take() else {
            return;
        };
        self.ui_mode = UiMode::Normal;

        let title = form.title.trim().to_string();
        if title.is_empty() {
            return;
        }

        match form.editing_id {
            Some(id) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.title = title;
                    task.notes = form.notes;
                    task.priority = form.priority;
                }
            }
            None => self.add_task(title, form.notes, form.priority),
        }
    }

    pub fn delete_selected(&mut self) {
        if self.selected_index >= self.tasks.len() {
            return;
        }
        let removed = self.tasks.remove(self.selected_index);

        // A deleted task must not keep receiving interval counts.
        if self.timer.linked_task() == Some(removed.id) {
            self.timer.set_linked_task(None);
        }
        if self.selected_index >= self.tasks.len() && self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn toggle_selected_completed(&mut self) {
        if let Some(task) = self.tasks.get_mut(self.selected_index) {
            task.toggle_completed();
            if task.completed {
                notifications::notify_task_done(&task.title);
            }
        }
    }

    /// Link the selected task to the timer, or unlink it if it is already
    /// the linked task.
    pub fn toggle_link_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        if self.timer.linked_task() == Some(task.id) {
            self.timer.set_linked_task(None);
        } else {
            self.timer.set_linked_task(Some(task.id));
        }
    }

    pub fn linked_task_title(&self) -> Option<&str> {
        let id = self.timer.linked_task()?;
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.title.as_str())
    }

    pub fn increase_selected_estimate(&mut self) {
        if let Some(task) = self.tasks.get_mut(self.selected_index) {
            task.estimated_intervals += 1;
        }
    }

    pub fn decrease_selected_estimate(&mut self) {
        if let Some(task) = self.tasks.get_mut(self.selected_index) {
            task.estimated_intervals = task.estimated_intervals.saturating_sub(1).max(1);
        }
    }

    // --- Timer commands ---

    /// Space key: start from Ready, resume from Paused, pause otherwise
    pub fn toggle_timer(&mut self) {
        match self.timer.phase() {
            Phase::Ready | Phase::Paused => self.timer.start(),
            _ => self.timer.pause(),
        }
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    // --- Settings ---

    pub fn open_settings(&mut self) {
        self.settings_form = Some(SettingsFormState::new(*self.timer.config()));
        self.ui_mode = UiMode::Settings;
    }

    /// Apply the settings form to the timer. Marks the settings for saving
    /// when anything changed.
    pub fn apply_settings_form(&mut self) {
        if let Some(form) = self.settings_form.take() {
            if self.timer.update_settings(form.draft) {
                self.needs_settings_save = true;
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_settings_form(&mut self) {
        self.settings_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- Tick ---

    /// Advance the timer and handle everything it emitted.
    pub fn tick(&mut self) {
        self.timer.tick();
        self.drain_timer_events();
    }

    fn drain_timer_events(&mut self) {
        // Collect first: handling an event mutates the task list, and the
        // mailbox borrow must not be held across that.
        let events: Vec<TimerEvent> = self.timer_events.borrow_mut().drain(..).collect();

        for event in events {
            match event {
                TimerEvent::WorkIntervalCompleted { linked_task, .. } => {
                    let task_title = linked_task.and_then(|id| {
                        self.tasks.iter_mut().find(|t| t.id == id).map(|task| {
                            task.increment_completed_intervals();
                            task.title.clone()
                        })
                    });
                    notifications::notify_interval_complete(task_title.as_deref());
                }
                TimerEvent::BreakCompleted => {
                    notifications::notify_break_complete();
                }
                TimerEvent::Tick => {}
            }
        }
    }
}
