use serde::Serialize;

/// Experience points needed per level.
pub const XP_PER_LEVEL: i64 = 100;

/// Level and XP derived from a user's backend point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub level: i64,
    pub current_xp: i64,
    pub total_xp: i64,
    pub xp_to_next: i64,
}

impl LevelProgress {
    /// Negative totals are treated as zero.
    pub fn from_points(points: i64) -> Self {
        let total = points.max(0);
        let current = total % XP_PER_LEVEL;
        Self {
            level: total / XP_PER_LEVEL + 1,
            current_xp: current,
            total_xp: total,
            xp_to_next: XP_PER_LEVEL - current,
        }
    }
}
