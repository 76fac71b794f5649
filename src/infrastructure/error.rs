use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("tasks need {requested} minutes but the windows only hold {available} minutes")]
    CapacityExceeded { requested: u32, available: u32 },
}
