use serde::{Deserialize, Serialize};

pub const MIN_TASK_MINUTES: u32 = 5;
pub const MAX_TASK_MINUTES: u32 = 480;
pub const MAX_TASK_NAME_CHARS: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub name: String,
    pub duration: u32,
    pub is_outdoor: bool,
}

impl Task {
    pub fn validate(&self) -> Result<(), String> {
        validate_non_empty(&self.name, "task.name")?;
        if self.name.chars().count() > MAX_TASK_NAME_CHARS {
            return Err(format!(
                "task.name must be at most {MAX_TASK_NAME_CHARS} characters"
            ));
        }
        if self.duration < MIN_TASK_MINUTES || self.duration > MAX_TASK_MINUTES {
            return Err(format!(
                "task.duration must be between {MIN_TASK_MINUTES} and {MAX_TASK_MINUTES} minutes"
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
}

impl TimeWindow {
    pub fn validate(&self) -> Result<(), String> {
        validate_non_empty(&self.id, "window.id")?;
        validate_hhmm(&self.start_time, "window.startTime")?;
        validate_hhmm(&self.end_time, "window.endTime")?;
        let (Some(start), Some(end)) = (self.start_minutes(), self.end_minutes()) else {
            return Err("window times must be HH:MM".to_string());
        };
        if end <= start {
            return Err("window.endTime must be after window.startTime".to_string());
        }
        Ok(())
    }

    pub fn start_minutes(&self) -> Option<u32> {
        time_to_minutes(&self.start_time)
    }

    pub fn end_minutes(&self) -> Option<u32> {
        time_to_minutes(&self.end_time)
    }

    /// Minutes available in this window, or zero when the times are malformed.
    pub fn capacity_minutes(&self) -> u32 {
        match (self.start_minutes(), self.end_minutes()) {
            (Some(start), Some(end)) if end > start => end - start,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledItem {
    pub task: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: u32,
}

pub fn time_to_minutes(value: &str) -> Option<u32> {
    let mut split = value.split(':');
    let hour = split.next()?.parse::<u32>().ok()?;
    let minute = split.next()?.parse::<u32>().ok()?;
    if split.next().is_some() || hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field_name} must not be empty"));
    }
    Ok(())
}

fn validate_hhmm(value: &str, field_name: &str) -> Result<(), String> {
    if time_to_minutes(value).is_none() {
        return Err(format!("{field_name} must be HH:MM"));
    }
    Ok(())
}
