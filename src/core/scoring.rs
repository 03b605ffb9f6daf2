//! Scoring module - line awards, level derivation and gravity speed
//!
//! Classic rules: a fixed award table per clear size, multiplied by
//! (level + 1). Level is a pure function of total lines cleared and is never
//! stored anywhere.

use crate::types::{BASE_DROP_MS, DROP_MS_PER_LEVEL, LINES_PER_LEVEL, LINE_SCORES};

/// Points awarded for clearing `lines` rows at once at the given level.
///
/// Clears larger than the table cap at the last entry. The level passed in
/// must be the level in effect before the cleared lines are counted.
pub fn line_award(lines: u32, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let idx = (lines.min(LINE_SCORES.len() as u32) - 1) as usize;
    LINE_SCORES[idx] * (level + 1)
}

/// Level for a total line count: one level per ten lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Drop interval for a level, in milliseconds.
///
/// Each level shaves 200ms off the 1000ms base; from level five on the
/// interval saturates at zero and the driving timer fires as fast as it can.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS.saturating_sub(DROP_MS_PER_LEVEL.saturating_mul(level))
}
