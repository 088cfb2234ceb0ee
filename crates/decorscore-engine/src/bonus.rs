//! Bonus rules applied on top of individual placement scores.

use std::collections::BTreeMap;

use decorscore_geometry::Point2D;
use serde::{Deserialize, Serialize};

use crate::{aggregator::PlacedItemId, item::ItemDefinition};

/// Tunable bonus values.
///
/// Every field has a default, so a partial JSON object is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusConfig {
    /// Awarded per item scored at its theoretical maximum.
    pub perfect_placement_bonus: i32,
    /// Awarded once per day when every tracked item is perfectly placed.
    pub daily_completion_bonus: i32,
    /// Awarded for a theme shared by two validly placed items.
    pub theme_base_bonus: i32,
    /// Added to the theme bonus for each member beyond the first.
    pub theme_increment: i32,
    /// Maximum world distance between two items for an adjacency bonus.
    pub adjacency_radius: f64,
    pub adjacency_bonus: i32,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            perfect_placement_bonus: 10,
            daily_completion_bonus: 100,
            theme_base_bonus: 50,
            theme_increment: 25,
            adjacency_radius: 1.5,
            adjacency_bonus: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeBonus {
    pub theme: String,
    pub members: usize,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyBonus {
    pub first: PlacedItemId,
    pub second: PlacedItemId,
    pub points: i32,
}

/// A validly placed item as seen by the bonus rules.
#[derive(Debug, Clone, Copy)]
pub struct BonusCandidate<'a> {
    pub id: PlacedItemId,
    pub definition: &'a ItemDefinition,
    pub position: Point2D,
}

/// Groups candidates by theme tag. Themes with fewer than two members earn
/// nothing and are omitted.
#[must_use]
pub fn theme_bonuses(candidates: &[BonusCandidate<'_>], config: &BonusConfig) -> Vec<ThemeBonus> {
    let mut members = BTreeMap::<&str, usize>::new();
    for candidate in candidates {
        for theme in candidate.definition.themes() {
            *members.entry(theme.as_str()).or_default() += 1;
        }
    }
    members
        .into_iter()
        .filter(|&(_, count)| count >= 2)
        .map(|(theme, count)| {
            let additional = i32::try_from(count - 1).unwrap_or(i32::MAX);
            ThemeBonus {
                theme: theme.to_owned(),
                members: count,
                points: config
                    .theme_base_bonus
                    .saturating_add(config.theme_increment.saturating_mul(additional)),
            }
        })
        .collect()
}

/// One bonus per pair of candidates that share at least one theme and lie
/// within [`BonusConfig::adjacency_radius`] of each other.
#[must_use]
pub fn adjacency_bonuses(
    candidates: &[BonusCandidate<'_>],
    config: &BonusConfig,
) -> Vec<AdjacencyBonus> {
    let mut bonuses = vec![];
    for (i, first) in candidates.iter().enumerate() {
        for second in &candidates[i + 1..] {
            if first.definition.shares_theme_with(second.definition)
                && first.position.distance(second.position) <= config.adjacency_radius
            {
                bonuses.push(AdjacencyBonus {
                    first: first.id,
                    second: second.id,
                    points: config.adjacency_bonus,
                });
            }
        }
    }
    bonuses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u64, definition: &ItemDefinition, x: f64) -> BonusCandidate<'_> {
        BonusCandidate {
            id: PlacedItemId(id),
            definition,
            position: Point2D::new(x, 0.0),
        }
    }

    #[test]
    fn test_theme_bonus_needs_two_members() {
        let config = BonusConfig::default();
        let palm = ItemDefinition::new("TropicalPalm", 5, 0);
        let parrot = ItemDefinition::new("TropicalParrot", 5, 0);
        let lamp = ItemDefinition::new("Lamp", 5, 0);

        let alone = theme_bonuses(&[candidate(1, &palm, 0.0), candidate(2, &lamp, 1.0)], &config);
        assert!(alone.is_empty());

        let pair = theme_bonuses(
            &[candidate(1, &palm, 0.0), candidate(2, &parrot, 9.0)],
            &config,
        );
        assert_eq!(
            pair,
            [ThemeBonus {
                theme: "Tropical".to_owned(),
                members: 2,
                points: config.theme_base_bonus + config.theme_increment,
            }]
        );
    }

    #[test]
    fn test_theme_bonus_grows_per_member() {
        let config = BonusConfig {
            theme_base_bonus: 10,
            theme_increment: 3,
            ..BonusConfig::default()
        };
        let palm = ItemDefinition::new("TropicalPalm", 5, 0);
        let candidates = [
            candidate(1, &palm, 0.0),
            candidate(2, &palm, 0.0),
            candidate(3, &palm, 0.0),
            candidate(4, &palm, 0.0),
        ];
        let bonuses = theme_bonuses(&candidates, &config);
        assert_eq!(bonuses.len(), 1);
        assert_eq!(bonuses[0].points, 10 + 3 * 3);
    }

    #[test]
    fn test_adjacency_requires_shared_theme_and_distance() {
        let config = BonusConfig::default();
        let palm = ItemDefinition::new("TropicalPalm", 5, 0);
        let parrot = ItemDefinition::new("TropicalParrot", 5, 0);
        let lamp = ItemDefinition::new("Lamp", 5, 0);

        let bonuses = adjacency_bonuses(
            &[
                candidate(1, &palm, 0.0),
                candidate(2, &parrot, 1.0),
                candidate(3, &lamp, 0.5),
                candidate(4, &parrot, 10.0),
            ],
            &config,
        );
        assert_eq!(
            bonuses,
            [AdjacencyBonus {
                first: PlacedItemId(1),
                second: PlacedItemId(2),
                points: config.adjacency_bonus,
            }]
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BonusConfig = serde_json::from_str(r#"{"theme_base_bonus": 7}"#).unwrap();
        assert_eq!(config.theme_base_bonus, 7);
        assert_eq!(config.daily_completion_bonus, 100);
    }
}
