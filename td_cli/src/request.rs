//! JSON request and response documents.

use serde::{Deserialize, Serialize};
use tourney_draw::{
    DrawPlan,
    roster::{Block, Category, Competitor, EntryId, Game},
};

/// One category to draw
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRequest {
    pub category: Category,
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// Draw request covering any number of categories
#[derive(Debug, Clone, Deserialize)]
pub struct DrawRequest {
    pub games: Vec<Game>,
    pub categories: Vec<CategoryRequest>,
}

/// Draw plans, one per requested category
#[derive(Debug, Clone, Serialize)]
pub struct DrawResponse {
    pub plans: Vec<DrawPlan>,
}

/// One seat of a played table
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EntryRequest {
    pub entry_id: EntryId,
    /// Raw points, required for points-ranked placements
    #[serde(default)]
    pub points: Option<f64>,
    /// Manually entered placement
    #[serde(default)]
    pub placement: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableRequest {
    pub entries: Vec<EntryRequest>,
}

/// Placement request for the tables of one game
#[derive(Debug, Clone, Deserialize)]
pub struct PlacementRequest {
    pub game: Game,
    pub tables: Vec<TableRequest>,
}

/// Values to store for one entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntryResult {
    pub entry_id: EntryId,
    pub auto_placement: Option<f64>,
    pub stored_points: Option<f64>,
    pub stored_placement: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacementResponse {
    pub entries: Vec<EntryResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_request_decodes() {
        let json = r#"{
            "games": [{"id": 1, "name": "Riichi", "scoring_type": "both", "points_order": "desc"}],
            "categories": [{
                "category": {"id": 5, "name": "Juniors"},
                "competitors": [
                    {"id": 1, "display_name": "Ann", "team_name": "North", "category_id": 5, "active": true},
                    {"id": 2, "display_name": "Ben", "category_id": 5, "active": false}
                ],
                "blocks": [{"block_number": 1, "category_id": 5, "game_id": 1}]
            }]
        }"#;

        let request: DrawRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.categories.len(), 1);
        let category = &request.categories[0];
        assert_eq!(category.competitors[1].team_name, "");
        assert!(!category.competitors[1].active);
        assert_eq!(category.blocks[0].game_id, 1);
    }

    #[test]
    fn test_placement_request_decodes() {
        let json = r#"{
            "game": {"id": 1, "name": "Golf", "scoring_type": "points", "points_order": "asc"},
            "tables": [{"entries": [{"entry_id": 9, "points": 71}, {"entry_id": 10, "placement": 2}]}]
        }"#;

        let request: PlacementRequest = serde_json::from_str(json).unwrap();
        let entries = &request.tables[0].entries;
        assert_eq!(entries[0].points, Some(71.0));
        assert_eq!(entries[1].points, None);
        assert_eq!(entries[1].placement, Some(2.0));
    }
}
