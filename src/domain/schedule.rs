use crate::domain::models::{ScheduledItem, Task, TimeWindow, minutes_to_time};
use rand::Rng;
use rand::seq::SliceRandom;

const MAX_OUTDOOR_RUN: u32 = 3;

/// Produces a random permutation of `tasks` in which outdoor tasks appear in
/// runs of one to three between single indoor tasks.
///
/// Both groups are shuffled independently before merging, so any run ordering
/// is reachable. Either group may be empty; the result then degenerates to the
/// other group's shuffled order.
pub fn interleave<R: Rng + ?Sized>(tasks: &[Task], rng: &mut R) -> Vec<Task> {
    let mut outdoor: Vec<Task> = tasks.iter().filter(|task| task.is_outdoor).cloned().collect();
    let mut indoor: Vec<Task> = tasks.iter().filter(|task| !task.is_outdoor).cloned().collect();
    outdoor.shuffle(rng);
    indoor.shuffle(rng);

    let mut interleaved = Vec::with_capacity(tasks.len());
    let mut outdoor_index = 0;
    let mut indoor_index = 0;
    while outdoor_index < outdoor.len() || indoor_index < indoor.len() {
        if indoor_index < indoor.len() {
            interleaved.push(indoor[indoor_index].clone());
            indoor_index += 1;
        }
        if outdoor_index < outdoor.len() {
            let remaining = (outdoor.len() - outdoor_index) as u32;
            let run = rng.gen_range(1..=MAX_OUTDOOR_RUN).min(remaining);
            for _ in 0..run {
                interleaved.push(outdoor[outdoor_index].clone());
                outdoor_index += 1;
            }
        }
    }
    interleaved
}

/// Greedily assigns `ordered_tasks` into `windows`, walking the windows in
/// chronological order with a single task cursor.
///
/// When the cursor task does not fit the remainder of a window the window is
/// abandoned, even if a later, shorter task in the sequence would fit; the
/// same task is retried at the start of the next window. Tasks still at the
/// cursor after the last window are dropped. Windows whose times fail to
/// parse are skipped; callers are expected to validate windows first.
pub fn pack(ordered_tasks: &[Task], windows: &[TimeWindow]) -> Vec<ScheduledItem> {
    let mut sorted: Vec<&TimeWindow> = windows.iter().collect();
    sorted.sort_by_key(|window| window.start_minutes().unwrap_or(u32::MAX));

    let mut schedule = Vec::new();
    let mut cursor = 0;
    for window in sorted {
        let (Some(start), Some(end)) = (window.start_minutes(), window.end_minutes()) else {
            continue;
        };
        let mut clock = start;
        while let Some(task) = ordered_tasks.get(cursor) {
            if clock + task.duration > end {
                break;
            }
            schedule.push(ScheduledItem {
                task: task.name.clone(),
                start_time: minutes_to_time(clock),
                end_time: minutes_to_time(clock + task.duration),
                duration: task.duration,
            });
            clock += task.duration;
            cursor += 1;
        }
    }
    schedule
}
