use crate::domain::models::ScheduledItem;
use chrono::NaiveDate;
use rand::Rng;
use rand::distributions::Alphanumeric;

const PRODID: &str = "-//Wacky Calendar//EN";
pub(crate) const EVENT_DESCRIPTION: &str = "Scheduled by Wacky Calendar 🎲";
const UID_DOMAIN: &str = "wackycalendar";
const UID_SUFFIX_CHARS: usize = 9;

/// Renders a schedule as an iCalendar document.
///
/// Every event carries `date` plus the item's wall-clock times with seconds
/// forced to `00`. Task names are emitted verbatim into `SUMMARY`; names that
/// collide with iCalendar line-folding rules are an accepted limitation of
/// the format.
pub fn calendar_text<R: Rng + ?Sized>(
    items: &[ScheduledItem],
    date: NaiveDate,
    rng: &mut R,
) -> String {
    let date_stamp = date.format("%Y%m%d").to_string();
    let events = items
        .iter()
        .map(|item| event_block(item, &date_stamp, rng))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "BEGIN:VCALENDAR\n\
         VERSION:2.0\n\
         PRODID:{PRODID}\n\
         CALSCALE:GREGORIAN\n\
         METHOD:PUBLISH\n\
         {events}\n\
         END:VCALENDAR"
    )
}

/// Download name for an exported schedule, e.g. `wacky-calendar-2026-08-25.ics`.
pub fn suggested_filename(date: NaiveDate) -> String {
    format!("wacky-calendar-{}.ics", date.format("%Y-%m-%d"))
}

/// `HH:MM` plus the date stamp as an iCalendar local timestamp, seconds `00`.
pub fn timestamp(date_stamp: &str, time: &str) -> String {
    format!("{date_stamp}T{}00", time.replace(':', ""))
}

fn event_block<R: Rng + ?Sized>(item: &ScheduledItem, date_stamp: &str, rng: &mut R) -> String {
    let uid = format!(
        "{date_stamp}-{}-{}@{UID_DOMAIN}",
        item.start_time,
        uid_suffix(rng)
    );
    format!(
        "BEGIN:VEVENT\n\
         DTSTART:{start}\n\
         DTEND:{end}\n\
         SUMMARY:{summary}\n\
         DESCRIPTION:{EVENT_DESCRIPTION}\n\
         UID:{uid}\n\
         END:VEVENT",
        start = timestamp(date_stamp, &item.start_time),
        end = timestamp(date_stamp, &item.end_time),
        summary = item.task,
    )
}

// Collision odds at this scale are negligible; the suffix is not a
// cryptographic uniqueness guarantee.
fn uid_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(UID_SUFFIX_CHARS)
        .map(|byte| (byte as char).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_item() -> ScheduledItem {
        ScheduledItem {
            task: "Walk the dog".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:30".to_string(),
            duration: 30,
        }
    }

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).expect("valid date")
    }

    #[test]
    fn empty_schedule_yields_envelope_without_events() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = calendar_text(&[], sample_date(), &mut rng);

        assert!(text.starts_with("BEGIN:VCALENDAR\nVERSION:2.0\n"));
        assert!(text.ends_with("END:VCALENDAR"));
        assert_eq!(text.matches("BEGIN:VEVENT").count(), 0);
        assert!(text.contains("PRODID:-//Wacky Calendar//EN"));
    }

    #[test]
    fn event_count_matches_item_count() {
        let items = vec![
            sample_item(),
            ScheduledItem {
                task: "Read".to_string(),
                start_time: "09:30".to_string(),
                end_time: "10:15".to_string(),
                duration: 45,
            },
        ];
        let mut rng = StdRng::seed_from_u64(2);
        let text = calendar_text(&items, sample_date(), &mut rng);

        assert_eq!(text.matches("BEGIN:VEVENT").count(), items.len());
        assert_eq!(text.matches("END:VEVENT").count(), items.len());
    }

    #[test]
    fn event_carries_date_and_times_with_forced_seconds() {
        let mut rng = StdRng::seed_from_u64(3);
        let text = calendar_text(&[sample_item()], sample_date(), &mut rng);

        assert!(text.contains("DTSTART:20260825T090000"));
        assert!(text.contains("DTEND:20260825T093000"));
        assert!(text.contains("SUMMARY:Walk the dog"));
        assert!(text.contains("DESCRIPTION:Scheduled by Wacky Calendar 🎲"));
    }

    #[test]
    fn uid_embeds_date_start_time_and_suffix() {
        let mut rng = StdRng::seed_from_u64(4);
        let text = calendar_text(&[sample_item()], sample_date(), &mut rng);

        let uid_line = text
            .lines()
            .find(|line| line.starts_with("UID:"))
            .expect("uid line present");
        assert!(uid_line.starts_with("UID:20260825-09:00-"));
        assert!(uid_line.ends_with("@wackycalendar"));

        let suffix = uid_line
            .trim_start_matches("UID:20260825-09:00-")
            .trim_end_matches("@wackycalendar");
        assert_eq!(suffix.len(), UID_SUFFIX_CHARS);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn filename_embeds_the_date() {
        assert_eq!(suggested_filename(sample_date()), "wacky-calendar-2026-08-25.ics");
    }
}
