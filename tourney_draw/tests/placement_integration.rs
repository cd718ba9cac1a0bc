//! Integration tests for placement computation and resolution
//!
//! These tests follow a played table from raw points through computed
//! placements to the value that gets stored for each entry.

#[cfg(test)]
mod placement_tests {
    use tourney_draw::roster::{Game, PointsOrder, ScoringType};
    use tourney_draw::scoring::{
        PlacementInput, PointsEntry, build_placements_from_points, resolve_placement_for_save,
        resolve_points_for_save,
    };

    fn table(points: &[f64]) -> Vec<PointsEntry> {
        points
            .iter()
            .enumerate()
            .map(|(idx, &p)| PointsEntry::new(100 + idx as i64, p))
            .collect()
    }

    #[test]
    fn test_ascending_smallest_wins() {
        let placements =
            build_placements_from_points(&table(&[10.0, 20.0, 30.0, 40.0]), PointsOrder::Asc)
                .unwrap();
        assert_eq!(placements[&100], 1.0);
        assert_eq!(placements[&103], 4.0);
    }

    #[test]
    fn test_descending_largest_wins() {
        let placements =
            build_placements_from_points(&table(&[10.0, 20.0, 30.0, 40.0]), PointsOrder::Desc)
                .unwrap();
        assert_eq!(placements[&100], 4.0);
        assert_eq!(placements[&103], 1.0);
    }

    #[test]
    fn test_tie_for_first_averages_ranks() {
        let placements =
            build_placements_from_points(&table(&[40.0, 40.0, 20.0, 10.0]), PointsOrder::Desc)
                .unwrap();
        let values: Vec<f64> = (100..104).map(|id| placements[&id]).collect();
        assert_eq!(values, vec![1.5, 1.5, 3.0, 4.0]);
        assert_eq!(values.iter().sum::<f64>(), 10.0);
    }

    #[test]
    fn test_resolver_decision_table() {
        let resolve = |scoring_type, parsed_placement, auto_placement| {
            resolve_placement_for_save(&PlacementInput {
                scoring_type,
                parsed_points: None,
                parsed_placement,
                auto_placement,
            })
        };

        assert_eq!(resolve(ScoringType::Points, Some(3.0), Some(3.0)), None);
        assert_eq!(resolve(ScoringType::Placement, Some(3.0), Some(1.0)), Some(3.0));
        assert_eq!(resolve(ScoringType::Placement, None, Some(1.0)), None);
        assert_eq!(resolve(ScoringType::Both, Some(2.0), Some(1.5)), Some(2.0));
        assert_eq!(resolve(ScoringType::Both, None, Some(1.5)), Some(1.5));
    }

    #[test]
    fn test_scored_table_flows_into_stored_values() {
        let game = Game::new(1, "Riichi", ScoringType::Both, PointsOrder::Desc);
        let entries = table(&[32_000.0, 25_000.0, 25_000.0, 18_000.0]);
        let placements = build_placements_from_points(&entries, game.points_order).unwrap();

        // Entry 101 has a manually corrected placement.
        let manual: [(i64, Option<f64>); 4] =
            [(100, None), (101, Some(2.0)), (102, None), (103, None)];
        let stored: Vec<Option<f64>> = manual
            .iter()
            .map(|&(entry_id, parsed_placement)| {
                resolve_placement_for_save(&PlacementInput {
                    scoring_type: game.scoring_type,
                    parsed_points: entries
                        .iter()
                        .find(|e| e.entry_id == entry_id)
                        .map(|e| e.points),
                    parsed_placement,
                    auto_placement: placements.get(&entry_id).copied(),
                })
            })
            .collect();

        assert_eq!(stored, vec![Some(1.0), Some(2.0), Some(2.5), Some(4.0)]);
    }

    #[test]
    fn test_placement_only_game_stores_no_points() {
        let input = PlacementInput {
            scoring_type: ScoringType::Placement,
            parsed_points: Some(12.0),
            parsed_placement: Some(1.0),
            auto_placement: None,
        };
        assert_eq!(resolve_points_for_save(&input), None);
        assert_eq!(resolve_placement_for_save(&input), Some(1.0));
    }
}
