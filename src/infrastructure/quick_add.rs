use crate::domain::models::ScheduledItem;
use crate::infrastructure::error::ScheduleError;
use crate::infrastructure::ics::{EVENT_DESCRIPTION, timestamp};
use chrono::NaiveDate;
use url::Url;

const QUICK_ADD_BASE: &str = "https://calendar.google.com/calendar/render";

/// Builds a Google Calendar "quick add" URL that pre-fills one scheduled item.
///
/// The `dates` range reuses the iCalendar timestamp shape (today's date plus
/// wall-clock times with seconds forced to `00`); the task name and the fixed
/// description are percent-encoded by the query serializer.
pub fn quick_add_link(item: &ScheduledItem, date: NaiveDate) -> Result<String, ScheduleError> {
    let date_stamp = date.format("%Y%m%d").to_string();
    let range = format!(
        "{}/{}",
        timestamp(&date_stamp, &item.start_time),
        timestamp(&date_stamp, &item.end_time)
    );

    let mut url = Url::parse(QUICK_ADD_BASE)?;
    url.query_pairs_mut()
        .append_pair("action", "TEMPLATE")
        .append_pair("text", &item.task)
        .append_pair("dates", &range)
        .append_pair("details", EVENT_DESCRIPTION);
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).expect("valid date")
    }

    #[test]
    fn link_carries_template_action_and_date_range() {
        let item = ScheduledItem {
            task: "Read".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:45".to_string(),
            duration: 45,
        };
        let link = quick_add_link(&item, sample_date()).expect("build link");

        assert!(link.starts_with("https://calendar.google.com/calendar/render?"));
        assert!(link.contains("action=TEMPLATE"));
        assert!(link.contains("text=Read"));
        assert!(link.contains("dates=20260825T090000%2F20260825T094500"));
    }

    #[test]
    fn link_percent_encodes_the_task_name() {
        let item = ScheduledItem {
            task: "Mow the lawn & rake".to_string(),
            start_time: "10:00".to_string(),
            end_time: "10:30".to_string(),
            duration: 30,
        };
        let link = quick_add_link(&item, sample_date()).expect("build link");

        assert!(link.contains("text=Mow+the+lawn+%26+rake"));
        assert!(!link.contains("Mow the lawn"));
    }

    #[test]
    fn link_is_parseable_back_into_its_query_pairs() {
        let item = ScheduledItem {
            task: "Walk the dog".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:30".to_string(),
            duration: 30,
        };
        let link = quick_add_link(&item, sample_date()).expect("build link");
        let parsed = Url::parse(&link).expect("valid url");
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        assert!(pairs.contains(&("text".to_string(), "Walk the dog".to_string())));
        assert!(pairs.contains(&(
            "dates".to_string(),
            "20260825T090000/20260825T093000".to_string()
        )));
        assert!(pairs.contains(&(
            "details".to_string(),
            "Scheduled by Wacky Calendar 🎲".to_string()
        )));
    }
}
