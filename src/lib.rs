mod application;
mod domain;
mod infrastructure;

use chrono::Local;

pub use application::commands::{
    AppState, CalendarExportResponse, MAX_TASKS, MAX_WINDOWS, export_calendar_impl,
    generate_schedule_impl, quick_add_links_impl,
};
pub use domain::models::{
    MAX_TASK_MINUTES, MAX_TASK_NAME_CHARS, MIN_TASK_MINUTES, ScheduledItem, Task, TimeWindow,
    minutes_to_time, time_to_minutes,
};
pub use domain::schedule::{interleave, pack};
pub use infrastructure::error::ScheduleError;
pub use infrastructure::ics::{calendar_text, suggested_filename};
pub use infrastructure::quick_add::quick_add_link;

/// Generates a fresh schedule from a snapshot of tasks and windows, using the
/// thread RNG. Deterministic callers use [`interleave`] and [`pack`] (or the
/// `_impl` command layer) with their own RNG.
pub fn generate_schedule(
    state: &AppState,
    tasks: &[Task],
    windows: &[TimeWindow],
) -> Result<Vec<ScheduledItem>, String> {
    generate_schedule_impl(state, tasks, windows, &mut rand::thread_rng())
        .map_err(|error| state.command_error("generate_schedule", &error))
}

/// Renders a schedule as an iCalendar file dated today (local wall clock).
pub fn export_calendar(
    state: &AppState,
    items: &[ScheduledItem],
) -> Result<CalendarExportResponse, String> {
    export_calendar_impl(state, items, Local::now().date_naive(), &mut rand::thread_rng())
        .map_err(|error| state.command_error("export_calendar", &error))
}

/// Builds one Google Calendar quick-add link per scheduled item, dated today.
pub fn quick_add_links(state: &AppState, items: &[ScheduledItem]) -> Result<Vec<String>, String> {
    quick_add_links_impl(items, Local::now().date_naive())
        .map_err(|error| state.command_error("quick_add_links", &error))
}
