use serde::Serialize;

use crate::bonus::{AdjacencyBonus, ThemeBonus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum DayPhase {
    /// No day in progress (new game).
    #[default]
    Idle,
    /// Items may be tracked, moved and preview-scored.
    Active,
    /// Final scores and bonuses computed; awaiting commit.
    Finalizing,
    /// Day total committed to the game total.
    Finalized,
}

/// Per-day bonus counters, cleared when a day is finalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayCounters {
    /// Reported by collaborators for non-decoration tasks.
    pub chore_points: i64,
    /// Sum of cached placement points.
    pub decoration_points: i64,
    pub theme_bonus: i64,
    pub adjacency_bonus: i64,
    /// Perfect-placement bonuses plus the completion bonus.
    pub daily_bonus: i64,
}

/// Outcome of a finished day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub day: u32,
    /// Placement points plus perfect-placement and completion bonuses.
    pub day_score: i64,
    pub perfect_placements: usize,
    pub completion_bonus_awarded: bool,
    pub counters: DayCounters,
    pub theme_bonuses: Vec<ThemeBonus>,
    pub adjacency_bonuses: Vec<AdjacencyBonus>,
    /// Amount added to the game total: day score, chore points, theme and
    /// adjacency bonuses.
    pub total: i64,
}
