pub mod error;
pub mod ics;
pub mod quick_add;
