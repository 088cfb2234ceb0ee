use decorscore_engine::{
    AreaRegistry, BonusConfig, DayPhase, ItemCatalog, ItemDefinition, PlaceableArea,
    PlacedItem, PlacedItemId, Placement, PlacementPreference, PlacementScorer, ScoreAggregator,
    ScoreReason, ScoringZone,
};
use decorscore_geometry::{Point2D, Polygon};

fn square(half: f64) -> Polygon {
    Polygon::rectangle(Point2D::ORIGIN, Point2D::new(half, half))
}

fn vase() -> ItemDefinition {
    let center = ScoringZone::new("Center", square(0.5), 25);
    ItemDefinition::new("Vase", 10, -5)
        .with_preference(PlacementPreference::new("Table", 15).with_zone(center))
}

fn aggregator_with(items: Vec<ItemDefinition>) -> ScoreAggregator {
    let mut areas = AreaRegistry::new();
    areas
        .register(PlaceableArea::new("Table", square(1.0)))
        .unwrap();
    let catalog = ItemCatalog::try_from(items).unwrap();
    ScoreAggregator::new(
        PlacementScorer::new(areas),
        catalog,
        BonusConfig::default(),
    )
}

fn placed(id: u64, name: &str, x: f64, y: f64) -> PlacedItem {
    PlacedItem::new(PlacedItemId(id), name, Point2D::new(x, y))
}

#[test]
fn test_track_is_idempotent_and_untrack_removes() {
    let mut aggregator = aggregator_with(vec![vase()]);
    assert!(aggregator.track(placed(1, "Vase", 0.0, 0.0)));
    assert!(!aggregator.track(placed(1, "Vase", 5.0, 5.0)));
    assert_eq!(aggregator.len(), 1);
    assert_eq!(
        aggregator.tracked_items().next().unwrap().position(),
        Point2D::ORIGIN
    );

    let removed = aggregator.untrack(PlacedItemId(1)).unwrap();
    assert_eq!(removed.item_name, "Vase");
    assert!(aggregator.is_empty());
    assert!(aggregator.untrack(PlacedItemId(1)).is_none());
}

#[test]
fn test_score_item_caches_without_moving() {
    let mut aggregator = aggregator_with(vec![vase()]);
    aggregator.track(placed(1, "Vase", 0.9, 0.9));
    assert!(!aggregator.is_scored(PlacedItemId(1)));

    let score = aggregator.score_item(PlacedItemId(1)).unwrap().clone();
    assert_eq!(score.points, 15);
    assert_eq!(aggregator.score_of(PlacedItemId(1)), Some(&score));
    assert_eq!(
        aggregator.tracked_items().next().unwrap().position(),
        Point2D::new(0.9, 0.9)
    );
    assert!(aggregator.score_item(PlacedItemId(9)).is_none());
}

#[test]
fn test_move_item_drops_cached_score() {
    let mut aggregator = aggregator_with(vec![vase()]);
    aggregator.track(placed(1, "Vase", 0.0, 0.0));
    aggregator.score_item(PlacedItemId(1));
    assert!(aggregator.move_item(PlacedItemId(1), Placement::at(Point2D::new(4.0, 0.0))));
    assert!(!aggregator.is_scored(PlacedItemId(1)));
    assert_eq!(aggregator.score_item(PlacedItemId(1)).unwrap().points, -5);
    assert!(!aggregator.move_item(PlacedItemId(2), Placement::at(Point2D::ORIGIN)));
}

#[test]
fn test_score_all_is_idempotent() {
    let mut aggregator = aggregator_with(vec![vase()]);
    aggregator.track(placed(1, "Vase", 0.0, 0.0));
    aggregator.track(placed(2, "Vase", 0.9, 0.9));
    aggregator.track(placed(3, "Vase", 3.0, 3.0));
    let first = aggregator.score_all();
    let breakdown = aggregator.breakdown();
    assert_eq!(aggregator.score_all(), first);
    assert_eq!(aggregator.breakdown(), breakdown);
}

#[test]
fn test_day_score_adds_perfect_and_completion_bonuses() {
    let config = BonusConfig::default();
    let mut aggregator = aggregator_with(vec![vase()]);

    // One perfect, one not: no completion bonus.
    aggregator.track(placed(1, "Vase", 0.0, 0.0));
    aggregator.track(placed(2, "Vase", 0.9, 0.9));
    let score = aggregator.score_all();
    assert_eq!(
        score,
        25 + 15 + i64::from(config.perfect_placement_bonus)
    );

    aggregator.move_item(PlacedItemId(2), Placement::at(Point2D::new(0.1, -0.1)));
    let score = aggregator.score_all();
    assert_eq!(
        score,
        25 + 25
            + 2 * i64::from(config.perfect_placement_bonus)
            + i64::from(config.daily_completion_bonus)
    );
}

#[test]
fn test_empty_roster_scores_nothing() {
    let mut aggregator = aggregator_with(vec![vase()]);
    assert_eq!(aggregator.score_all(), 0);
    let summary = aggregator.finalize_day();
    assert!(!summary.completion_bonus_awarded);
    assert_eq!(summary.total, 0);
}

#[test]
fn test_unscored_items_contribute_nothing() {
    let mut aggregator = aggregator_with(vec![vase()]);
    aggregator.track(placed(1, "Vase", 0.0, 0.0));
    aggregator.track(placed(2, "Vase", 0.0, 0.0));
    aggregator.score_item(PlacedItemId(1));
    let config = BonusConfig::default();
    assert_eq!(
        aggregator.compute_day_score(),
        25 + i64::from(config.perfect_placement_bonus)
    );
}

#[test]
fn test_theme_bonus_requires_two_valid_members() {
    let config = BonusConfig::default();
    let palm = ItemDefinition::new("TropicalPalm", 5, 0)
        .with_preference(PlacementPreference::new("Table", 5));
    let parrot = ItemDefinition::new("TropicalParrot", 5, 0)
        .with_preference(PlacementPreference::new("Table", 5));
    let mut aggregator = aggregator_with(vec![palm, parrot]);

    aggregator.track(placed(1, "TropicalPalm", 0.0, 0.0));
    aggregator.score_all();
    assert!(aggregator.theme_bonuses().is_empty());

    // Outside every area: does not count towards the theme.
    aggregator.track(placed(2, "TropicalParrot", 8.0, 0.0));
    aggregator.score_all();
    assert!(aggregator.theme_bonuses().is_empty());

    aggregator.move_item(PlacedItemId(2), Placement::at(Point2D::new(0.5, 0.0)));
    aggregator.score_all();
    let bonuses = aggregator.theme_bonuses();
    assert_eq!(bonuses.len(), 1);
    assert_eq!(bonuses[0].theme, "Tropical");
    assert_eq!(bonuses[0].members, 2);
    assert_eq!(
        bonuses[0].points,
        config.theme_base_bonus + config.theme_increment
    );
    assert_eq!(aggregator.adjacency_bonuses().len(), 1);
}

#[test]
fn test_finalize_rescores_and_commits_across_days() {
    let mut aggregator = aggregator_with(vec![vase()]);
    assert_eq!(aggregator.phase(), DayPhase::Idle);
    aggregator.begin_day();
    assert_eq!(aggregator.day(), 1);
    assert!(aggregator.phase().is_active());

    aggregator.track(placed(1, "Vase", 0.0, 0.0));
    // Preview while dragging, then the item lands somewhere else.
    assert_eq!(aggregator.score_item(PlacedItemId(1)).unwrap().points, 25);
    aggregator.move_item(PlacedItemId(1), Placement::at(Point2D::new(0.9, 0.9)));
    aggregator.add_chore_points(7);

    let summary = aggregator.finish_day();
    assert!(aggregator.phase().is_finalizing());
    assert_eq!(summary.day, 1);
    assert_eq!(summary.day_score, 15);
    assert_eq!(summary.counters.chore_points, 7);
    assert_eq!(summary.total, 15 + 7);
    assert_eq!(aggregator.game_total(), 0);

    let committed = aggregator.finalize_day();
    assert_eq!(committed, summary);
    assert!(aggregator.phase().is_finalized());
    assert_eq!(aggregator.game_total(), 22);
    assert_eq!(aggregator.day_score(), 0);
    assert_eq!(aggregator.counters().chore_points, 0);

    // Items persist into the next day.
    aggregator.begin_day();
    assert_eq!(aggregator.day(), 2);
    assert!(aggregator.is_tracked(PlacedItemId(1)));
    let summary = aggregator.finalize_day();
    assert_eq!(summary.day, 2);
    assert_eq!(summary.total, 15);
    assert_eq!(aggregator.game_total(), 37);
}

#[test]
fn test_finalize_without_finish_runs_final_scoring() {
    let config = BonusConfig::default();
    let mut aggregator = aggregator_with(vec![vase()]);
    aggregator.track(placed(1, "Vase", 0.0, 0.0));
    let summary = aggregator.finalize_day();
    assert_eq!(summary.day, 1);
    assert_eq!(summary.perfect_placements, 1);
    assert!(summary.completion_bonus_awarded);
    assert_eq!(
        summary.day_score,
        25 + i64::from(config.perfect_placement_bonus) + i64::from(config.daily_completion_bonus)
    );
    assert_eq!(aggregator.game_total(), summary.total);
}

#[test]
fn test_begin_day_while_active_is_noop() {
    let mut aggregator = aggregator_with(vec![vase()]);
    aggregator.begin_day();
    aggregator.add_chore_points(3);
    aggregator.begin_day();
    assert_eq!(aggregator.day(), 1);
    assert_eq!(aggregator.counters().chore_points, 3);
}

#[test]
fn test_reset_clears_everything() {
    let mut aggregator = aggregator_with(vec![vase()]);
    aggregator.track(placed(1, "Vase", 0.0, 0.0));
    aggregator.finalize_day();
    assert!(aggregator.game_total() > 0);

    aggregator.reset();
    assert!(aggregator.is_empty());
    assert_eq!(aggregator.game_total(), 0);
    assert_eq!(aggregator.day(), 0);
    assert_eq!(aggregator.phase(), DayPhase::Idle);
}

#[test]
fn test_unknown_item_scores_zero() {
    let mut aggregator = aggregator_with(vec![vase()]);
    aggregator.track(placed(1, "Ghost", 0.0, 0.0));
    let score = aggregator.score_item(PlacedItemId(1)).unwrap();
    assert_eq!(score.points, 0);
    assert!(!score.valid_area);
    assert!(score.reason.is_unknown_item());
    assert!(!aggregator.finalize_day().completion_bonus_awarded);
}

#[test]
fn test_preview_leaves_roster_untouched() {
    let aggregator = aggregator_with(vec![vase()]);
    let score = aggregator.preview("Vase", &Placement::at(Point2D::new(0.9, 0.0)));
    assert_eq!(score.points, 15);
    assert_eq!(
        score.reason,
        ScoreReason::PreferredArea {
            area: "Table".to_owned()
        }
    );
    assert!(aggregator.is_empty());
}

#[test]
fn test_breakdown_is_an_owned_snapshot() {
    let mut aggregator = aggregator_with(vec![vase()]);
    aggregator.track(placed(1, "Vase", 0.0, 0.0));
    aggregator.track(placed(2, "Vase", 0.9, 0.9));
    aggregator.track(placed(3, "Vase", 0.0, 0.0));
    aggregator.score_item(PlacedItemId(1));
    aggregator.score_item(PlacedItemId(2));

    let breakdown = aggregator.breakdown();
    aggregator.untrack(PlacedItemId(1));
    assert_eq!(breakdown.len(), 3);

    let perfect = &breakdown[0];
    assert_eq!(perfect.points, Some(25));
    assert_eq!(perfect.area.as_deref(), Some("Table"));
    assert_eq!(perfect.zone.as_deref(), Some("Center"));
    assert!(perfect.optimal);
    assert!((perfect.percent_of_max - 100.0).abs() < f64::EPSILON);

    let partial = &breakdown[1];
    assert_eq!(partial.points, Some(15));
    assert_eq!(partial.reason, "placed in preferred area");
    assert!(!partial.optimal);
    assert!((partial.percent_of_max - 60.0).abs() < f64::EPSILON);

    let unscored = &breakdown[2];
    assert_eq!(unscored.points, None);
    assert!(!unscored.optimal);
}

#[test]
fn test_areas_registered_mid_session_take_effect() {
    let shelf =
        ItemDefinition::new("Book", 5, -2).with_preference(PlacementPreference::new("Shelf", 12));
    let mut aggregator = aggregator_with(vec![shelf]);
    aggregator.track(placed(1, "Book", 10.0, 0.0));
    assert_eq!(aggregator.score_item(PlacedItemId(1)).unwrap().points, -2);

    aggregator
        .register_area(PlaceableArea::new(
            "Shelf",
            Polygon::rectangle(Point2D::new(10.0, 0.0), Point2D::new(1.0, 1.0)),
        ))
        .unwrap();
    assert_eq!(aggregator.score_item(PlacedItemId(1)).unwrap().points, 12);
    assert!(aggregator.register_area(PlaceableArea::new("Shelf", square(1.0))).is_err());
}

#[test]
fn test_roster_change_after_finish_reopens_day() {
    let mut aggregator = aggregator_with(vec![vase()]);
    aggregator.begin_day();
    aggregator.track(placed(1, "Vase", 0.0, 0.0));
    assert_eq!(aggregator.finish_day().total, 25 + 10 + 100);

    // Dropped outside every area after the day was finished.
    aggregator.move_item(PlacedItemId(1), Placement::at(Point2D::new(9.0, 9.0)));
    assert!(aggregator.phase().is_active());
    let committed = aggregator.finalize_day();
    assert_eq!(committed.day, 1);
    assert_eq!(committed.total, -5);
    assert_eq!(aggregator.game_total(), -5);

    aggregator.begin_day();
    aggregator.finish_day();
    aggregator.track(placed(2, "Vase", 0.0, 0.0));
    assert!(aggregator.phase().is_active());
    assert_eq!(aggregator.finalize_day().day_score, -5 + 25 + 10);

    aggregator.begin_day();
    aggregator.finish_day();
    aggregator.untrack(PlacedItemId(1));
    assert!(aggregator.phase().is_active());
    assert_eq!(aggregator.finalize_day().day_score, 25 + 10 + 100);
}

#[test]
fn test_base_points_above_preferences_still_allow_perfect() {
    let statue = ItemDefinition::new("Statue", 30, -5)
        .with_preference(PlacementPreference::new("Table", 15));
    let mut aggregator = aggregator_with(vec![statue]);
    aggregator.track(placed(1, "Statue", 0.0, 0.0));
    let summary = aggregator.finalize_day();
    assert_eq!(summary.perfect_placements, 1);
    assert!(summary.completion_bonus_awarded);
    assert_eq!(summary.day_score, 15 + 10 + 100);
}

#[test]
fn test_begin_day_commits_finished_day() {
    let mut aggregator = aggregator_with(vec![vase()]);
    aggregator.begin_day();
    aggregator.track(placed(1, "Vase", 0.0, 0.0));
    let summary = aggregator.finish_day();

    aggregator.begin_day();
    assert_eq!(aggregator.day(), 2);
    assert!(aggregator.phase().is_active());
    assert_eq!(aggregator.game_total(), summary.total);
}

#[test]
fn test_extreme_chore_points_saturate() {
    let mut aggregator = aggregator_with(vec![vase()]);
    aggregator.track(placed(1, "Vase", 0.0, 0.0));
    aggregator.add_chore_points(i64::MAX);
    aggregator.add_chore_points(i64::MAX);
    assert_eq!(aggregator.counters().chore_points, i64::MAX);
    assert_eq!(aggregator.finalize_day().total, i64::MAX);

    aggregator.begin_day();
    aggregator.add_chore_points(i64::MAX);
    aggregator.finalize_day();
    assert_eq!(aggregator.game_total(), i64::MAX);
}
