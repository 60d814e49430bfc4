use std::time::Duration;

use crate::constants::{BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_MS};

/// Points for clearing `lines_cleared` rows at once on `level`.
/// More than four lines cannot come from a single lock and is clamped.
pub fn calculate_score(lines_cleared: u32, level: u32) -> u32 {
    let index = (lines_cleared as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[index].saturating_mul(level)
}

pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

pub fn drop_speed(level: u32) -> u64 {
    let steps = u64::from(level.max(1) - 1);
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(DROP_STEP_MS))
        .max(MIN_DROP_MS)
}

pub fn drop_interval(level: u32) -> Duration {
    Duration::from_millis(drop_speed(level))
}
