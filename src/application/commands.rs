use crate::domain::models::{ScheduledItem, Task, TimeWindow};
use crate::domain::schedule::{interleave, pack};
use crate::infrastructure::error::ScheduleError;
use crate::infrastructure::ics::{calendar_text, suggested_filename};
use crate::infrastructure::quick_add::quick_add_link;
use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

pub const MAX_TASKS: usize = 10;
pub const MAX_WINDOWS: usize = 3;

pub struct AppState {
    logs_dir: PathBuf,
    log_guard: Mutex<()>,
}

impl AppState {
    pub fn new(workspace_root: PathBuf) -> Result<Self, ScheduleError> {
        let logs_dir = workspace_root.join("logs");
        fs::create_dir_all(&logs_dir)?;
        Ok(Self {
            logs_dir,
            log_guard: Mutex::new(()),
        })
    }

    pub fn command_error(&self, command: &str, error: &ScheduleError) -> String {
        self.log_error(command, &error.to_string());
        error.to_string()
    }

    pub fn log_info(&self, command: &str, message: &str) {
        self.append_log("info", command, message);
    }

    pub fn log_error(&self, command: &str, message: &str) {
        self.append_log("error", command, message);
    }

    fn append_log(&self, level: &str, command: &str, message: &str) {
        let Ok(_guard) = self.log_guard.lock() else {
            return;
        };
        let path = self.logs_dir.join("commands.log");
        let payload = serde_json::json!({
            "timestamp": Utc::now().to_rfc3339(),
            "level": level,
            "command": command,
            "message": message,
        });

        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(file, "{}", payload);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarExportResponse {
    pub filename: String,
    pub content: String,
}

/// Validates a snapshot of tasks and windows and produces a fresh schedule.
///
/// Validation covers what the web UI enforces before calling in: per-field
/// task and window sanity, the task and window count limits, and the gross
/// capacity comparison. Tasks that fail to fit a particular window because of
/// fragmentation are still dropped silently by the packer.
pub fn generate_schedule_impl<R: Rng + ?Sized>(
    state: &AppState,
    tasks: &[Task],
    windows: &[TimeWindow],
    rng: &mut R,
) -> Result<Vec<ScheduledItem>, ScheduleError> {
    validate_inputs(tasks, windows)?;

    let requested: u32 = tasks.iter().map(|task| task.duration).sum();
    let available: u32 = windows.iter().map(TimeWindow::capacity_minutes).sum();
    if requested > available {
        return Err(ScheduleError::CapacityExceeded {
            requested,
            available,
        });
    }

    let ordered = interleave(tasks, rng);
    let schedule = pack(&ordered, windows);
    state.log_info(
        "generate_schedule",
        &format!(
            "placed {} of {} tasks across {} windows",
            schedule.len(),
            tasks.len(),
            windows.len()
        ),
    );
    Ok(schedule)
}

pub fn export_calendar_impl<R: Rng + ?Sized>(
    state: &AppState,
    items: &[ScheduledItem],
    date: NaiveDate,
    rng: &mut R,
) -> Result<CalendarExportResponse, ScheduleError> {
    let response = CalendarExportResponse {
        filename: suggested_filename(date),
        content: calendar_text(items, date, rng),
    };
    state.log_info(
        "export_calendar",
        &format!("exported {} events to {}", items.len(), response.filename),
    );
    Ok(response)
}

pub fn quick_add_links_impl(
    items: &[ScheduledItem],
    date: NaiveDate,
) -> Result<Vec<String>, ScheduleError> {
    items.iter().map(|item| quick_add_link(item, date)).collect()
}

fn validate_inputs(tasks: &[Task], windows: &[TimeWindow]) -> Result<(), ScheduleError> {
    if tasks.is_empty() {
        return Err(ScheduleError::InvalidInput(
            "at least one task is required".to_string(),
        ));
    }
    if tasks.len() > MAX_TASKS {
        return Err(ScheduleError::InvalidInput(format!(
            "at most {MAX_TASKS} tasks are supported"
        )));
    }
    if windows.is_empty() {
        return Err(ScheduleError::InvalidInput(
            "at least one time window is required".to_string(),
        ));
    }
    if windows.len() > MAX_WINDOWS {
        return Err(ScheduleError::InvalidInput(format!(
            "at most {MAX_WINDOWS} time windows are supported"
        )));
    }
    for task in tasks {
        task.validate().map_err(ScheduleError::InvalidInput)?;
    }
    for window in windows {
        window.validate().map_err(ScheduleError::InvalidInput)?;
    }
    Ok(())
}
