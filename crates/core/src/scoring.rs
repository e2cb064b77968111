//! Scoring module - line-clear points, level progression, fall speed

use gridfall_types::{
    FALLBACK_POINTS_PER_LINE, FALL_SPEEDUP_PER_LEVEL_MS, INITIAL_FALL_INTERVAL_MS,
    LINES_PER_LEVEL, LINE_CLEAR_SCORES, MIN_FALL_INTERVAL_MS,
};

/// Base points for one clear event: table values for 1-4 lines, a flat
/// per-line fallback for any other count (including degenerate >4 clears).
pub fn line_clear_points(lines: u32) -> u32 {
    match lines {
        1..=4 => LINE_CLEAR_SCORES[lines as usize],
        n => FALLBACK_POINTS_PER_LINE * n,
    }
}

/// Points awarded for a clear event at the given level
pub fn score_for_clear(lines: u32, level: u32) -> u32 {
    line_clear_points(lines).saturating_mul(level)
}

/// Level for a running total of cleared lines: one level per 10 lines,
/// starting at level 1
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level: 50ms faster per level above 1, floored
/// at 100ms
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level
        .saturating_sub(1)
        .saturating_mul(FALL_SPEEDUP_PER_LEVEL_MS);
    INITIAL_FALL_INTERVAL_MS
        .saturating_sub(speedup)
        .max(MIN_FALL_INTERVAL_MS)
}
