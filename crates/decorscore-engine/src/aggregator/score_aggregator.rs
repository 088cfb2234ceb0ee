use std::collections::BTreeMap;

use crate::{
    AreaError,
    area::PlaceableArea,
    bonus::{
        AdjacencyBonus, BonusCandidate, BonusConfig, ThemeBonus, adjacency_bonuses, theme_bonuses,
    },
    item::ItemCatalog,
    score::{Placement, PlacementScore},
    scorer::PlacementScorer,
};

use super::{
    DayCounters, DayPhase, DaySummary, ItemScoreReport, PlacedItem, PlacedItemId,
    report::percent_of_max,
};

#[derive(Debug, Clone)]
struct RosterEntry {
    item: PlacedItem,
    score: Option<PlacementScore>,
}

/// Owns the roster of placed items and every running total.
///
/// The scorer (with its area registry) and the item catalog are handed over
/// at construction; the aggregator is the only writer of the roster and of
/// cached scores.
#[derive(Debug, Clone)]
pub struct ScoreAggregator {
    scorer: PlacementScorer,
    catalog: ItemCatalog,
    config: BonusConfig,
    roster: BTreeMap<PlacedItemId, RosterEntry>,
    phase: DayPhase,
    day: u32,
    day_score: i64,
    game_total: i64,
    perfect_placements: usize,
    completion_bonus_awarded: bool,
    counters: DayCounters,
    theme_bonuses: Vec<ThemeBonus>,
    adjacency_bonuses: Vec<AdjacencyBonus>,
}

impl ScoreAggregator {
    #[must_use]
    pub fn new(scorer: PlacementScorer, catalog: ItemCatalog, config: BonusConfig) -> Self {
        Self {
            scorer,
            catalog,
            config,
            roster: BTreeMap::new(),
            phase: DayPhase::Idle,
            day: 0,
            day_score: 0,
            game_total: 0,
            perfect_placements: 0,
            completion_bonus_awarded: false,
            counters: DayCounters::default(),
            theme_bonuses: vec![],
            adjacency_bonuses: vec![],
        }
    }

    #[must_use]
    pub fn scorer(&self) -> &PlacementScorer {
        &self.scorer
    }

    #[must_use]
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &BonusConfig {
        &self.config
    }

    pub fn register_area(&mut self, area: PlaceableArea) -> Result<(), AreaError> {
        self.scorer.areas_mut().register(area)?;
        self.reopen_day();
        Ok(())
    }

    #[must_use]
    pub fn phase(&self) -> DayPhase {
        self.phase
    }

    /// Current day number, starting at 1 for the first day.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub fn day_score(&self) -> i64 {
        self.day_score
    }

    #[must_use]
    pub fn game_total(&self) -> i64 {
        self.game_total
    }

    #[must_use]
    pub fn counters(&self) -> &DayCounters {
        &self.counters
    }

    /// Adds a placed item to the roster. Returns `false` and leaves the
    /// roster unchanged if the id is already tracked.
    pub fn track(&mut self, item: PlacedItem) -> bool {
        if self.roster.contains_key(&item.id) {
            return false;
        }
        tracing::debug!(id = %item.id, item = %item.item_name, "tracking item");
        self.roster.insert(item.id, RosterEntry { item, score: None });
        self.reopen_day();
        true
    }

    /// Removes an item and its cached score.
    pub fn untrack(&mut self, id: PlacedItemId) -> Option<PlacedItem> {
        let entry = self.roster.remove(&id)?;
        self.reopen_day();
        Some(entry.item)
    }

    #[must_use]
    pub fn is_tracked(&self, id: PlacedItemId) -> bool {
        self.roster.contains_key(&id)
    }

    pub fn tracked_items(&self) -> impl Iterator<Item = &PlacedItem> + '_ {
        self.roster.values().map(|entry| &entry.item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Updates an item's position and drops its cached score.
    pub fn move_item(&mut self, id: PlacedItemId, placement: Placement) -> bool {
        let Some(entry) = self.roster.get_mut(&id) else {
            return false;
        };
        entry.item.placement = placement;
        entry.score = None;
        self.reopen_day();
        true
    }

    /// A roster change after `finish_day` invalidates the finished totals;
    /// the day goes back to `Active` so finalizing re-scores it.
    fn reopen_day(&mut self) {
        if self.phase.is_finalizing() {
            tracing::debug!(day = self.day, "roster changed after finish, reopening day");
            self.phase = DayPhase::Active;
        }
    }

    /// Scores a hypothetical placement without touching the roster.
    #[must_use]
    pub fn preview(&self, item_name: &str, placement: &Placement) -> PlacementScore {
        self.scorer.score_named(&self.catalog, item_name, placement)
    }

    /// Re-scores one tracked item from its current placement.
    pub fn score_item(&mut self, id: PlacedItemId) -> Option<&PlacementScore> {
        let entry = self.roster.get_mut(&id)?;
        let score = self
            .scorer
            .score_named(&self.catalog, &entry.item.item_name, &entry.item.placement);
        Some(&*entry.score.insert(score))
    }

    #[must_use]
    pub fn score_of(&self, id: PlacedItemId) -> Option<&PlacementScore> {
        self.roster.get(&id)?.score.as_ref()
    }

    #[must_use]
    pub fn is_scored(&self, id: PlacedItemId) -> bool {
        self.score_of(id).is_some()
    }

    /// Replaces every cached score with one computed from the current
    /// placement, then recomputes the day score.
    pub fn score_all(&mut self) -> i64 {
        for entry in self.roster.values_mut() {
            entry.score = Some(self.scorer.score_named(
                &self.catalog,
                &entry.item.item_name,
                &entry.item.placement,
            ));
        }
        self.compute_day_score()
    }

    /// Day score from cached scores: the sum of placement points, a
    /// perfect-placement bonus per item at its theoretical maximum, and the
    /// completion bonus when every tracked item is perfect.
    ///
    /// Unscored items contribute nothing and are never perfect. An empty
    /// roster earns no completion bonus.
    pub fn compute_day_score(&mut self) -> i64 {
        let mut decoration_points = 0_i64;
        let mut perfect_placements = 0_usize;
        for entry in self.roster.values() {
            let Some(score) = &entry.score else {
                continue;
            };
            decoration_points = decoration_points.saturating_add(i64::from(score.points));
            if self.is_perfect(entry) {
                perfect_placements += 1;
            }
        }

        let completion_bonus_awarded =
            !self.roster.is_empty() && perfect_placements == self.roster.len();
        let perfect_count = i64::try_from(perfect_placements).unwrap_or(i64::MAX);
        let mut daily_bonus =
            i64::from(self.config.perfect_placement_bonus).saturating_mul(perfect_count);
        if completion_bonus_awarded {
            daily_bonus =
                daily_bonus.saturating_add(i64::from(self.config.daily_completion_bonus));
        }

        self.perfect_placements = perfect_placements;
        self.completion_bonus_awarded = completion_bonus_awarded;
        self.counters.decoration_points = decoration_points;
        self.counters.daily_bonus = daily_bonus;
        self.day_score = decoration_points.saturating_add(daily_bonus);
        self.day_score
    }

    fn is_perfect(&self, entry: &RosterEntry) -> bool {
        let (Some(score), Some(definition)) = (&entry.score, self.catalog.get(&entry.item.item_name))
        else {
            return false;
        };
        score.valid_area && score.points == definition.theoretical_max()
    }

    fn bonus_candidates(&self) -> Vec<BonusCandidate<'_>> {
        self.roster
            .values()
            .filter(|entry| entry.score.as_ref().is_some_and(|score| score.valid_area))
            .filter_map(|entry| {
                let definition = self.catalog.get(&entry.item.item_name)?;
                Some(BonusCandidate {
                    id: entry.item.id,
                    definition,
                    position: entry.item.position(),
                })
            })
            .collect()
    }

    /// Theme bonuses earned by the currently valid cached scores.
    #[must_use]
    pub fn theme_bonuses(&self) -> Vec<ThemeBonus> {
        theme_bonuses(&self.bonus_candidates(), &self.config)
    }

    #[must_use]
    pub fn adjacency_bonuses(&self) -> Vec<AdjacencyBonus> {
        adjacency_bonuses(&self.bonus_candidates(), &self.config)
    }

    /// Records points earned outside decorating for the current day.
    pub fn add_chore_points(&mut self, points: i64) {
        self.counters.chore_points = self.counters.chore_points.saturating_add(points);
    }

    /// Starts the next day. Does nothing while a day is already active.
    ///
    /// A finished but uncommitted day is finalized first.
    pub fn begin_day(&mut self) {
        if self.phase.is_active() {
            return;
        }
        if self.phase.is_finalizing() {
            tracing::warn!(day = self.day, "committing a finished day before starting the next");
            self.finalize_day();
        }
        self.day += 1;
        self.phase = DayPhase::Active;
        tracing::info!(day = self.day, items = self.roster.len(), "day started");
    }

    /// Re-scores the roster from final positions, computes the day score and
    /// the theme and adjacency bonuses, and moves to
    /// [`DayPhase::Finalizing`].
    pub fn finish_day(&mut self) -> DaySummary {
        if self.phase.is_idle() || self.phase.is_finalized() {
            self.begin_day();
        }
        self.score_all();
        let candidates = self.bonus_candidates();
        let theme = theme_bonuses(&candidates, &self.config);
        let adjacency = adjacency_bonuses(&candidates, &self.config);

        self.counters.theme_bonus = theme
            .iter()
            .fold(0_i64, |acc, bonus| acc.saturating_add(i64::from(bonus.points)));
        self.counters.adjacency_bonus = adjacency
            .iter()
            .fold(0_i64, |acc, bonus| acc.saturating_add(i64::from(bonus.points)));
        self.theme_bonuses = theme;
        self.adjacency_bonuses = adjacency;
        self.phase = DayPhase::Finalizing;
        tracing::info!(
            day = self.day,
            day_score = self.day_score,
            perfect = self.perfect_placements,
            "day finishing"
        );
        self.summary()
    }

    /// Commits the day to the game total and clears per-day counters. The
    /// roster is kept; items persist across days.
    ///
    /// If [`finish_day`](Self::finish_day) has not run since the last
    /// roster change, it runs first so totals always reflect final
    /// positions.
    pub fn finalize_day(&mut self) -> DaySummary {
        if !self.phase.is_finalizing() {
            self.finish_day();
        }
        let summary = self.summary();
        self.game_total = self.game_total.saturating_add(summary.total);
        self.phase = DayPhase::Finalized;
        tracing::info!(
            day = self.day,
            total = summary.total,
            game_total = self.game_total,
            "day finalized"
        );
        self.clear_day();
        summary
    }

    /// Starts a new game: clears the roster and every total.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.clear_day();
        self.game_total = 0;
        self.day = 0;
        self.phase = DayPhase::Idle;
        tracing::info!("game reset");
    }

    fn clear_day(&mut self) {
        self.day_score = 0;
        self.perfect_placements = 0;
        self.completion_bonus_awarded = false;
        self.counters = DayCounters::default();
        self.theme_bonuses.clear();
        self.adjacency_bonuses.clear();
    }

    fn summary(&self) -> DaySummary {
        let counters = self.counters;
        DaySummary {
            day: self.day,
            day_score: self.day_score,
            perfect_placements: self.perfect_placements,
            completion_bonus_awarded: self.completion_bonus_awarded,
            counters,
            theme_bonuses: self.theme_bonuses.clone(),
            adjacency_bonuses: self.adjacency_bonuses.clone(),
            total: self
                .day_score
                .saturating_add(counters.chore_points)
                .saturating_add(counters.theme_bonus)
                .saturating_add(counters.adjacency_bonus),
        }
    }

    /// Per-item breakdown in id order. The result is an owned snapshot.
    #[must_use]
    pub fn breakdown(&self) -> Vec<ItemScoreReport> {
        self.roster
            .values()
            .map(|entry| {
                let max = self
                    .catalog
                    .get(&entry.item.item_name)
                    .map_or(0, |definition| definition.theoretical_max());
                let score = entry.score.as_ref();
                ItemScoreReport {
                    id: entry.item.id,
                    item_name: entry.item.item_name.clone(),
                    points: score.map(|score| score.points),
                    reason: score.map_or_else(
                        || "not scored yet".to_owned(),
                        |score| score.reason.to_string(),
                    ),
                    area: score.and_then(PlacementScore::area_id).map(str::to_owned),
                    zone: score.and_then(PlacementScore::zone_name).map(str::to_owned),
                    optimal: self.is_perfect(entry),
                    percent_of_max: score.map_or(0.0, |score| percent_of_max(score.points, max)),
                }
            })
            .collect()
    }
}
