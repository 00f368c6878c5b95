use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Counts derived from a single match's composition and events
///
/// `possession` and `shots` are not tracked and are always zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatsDto {
    pub starters: u32,
    pub substitutes: u32,
    pub total_goals: u32,
    pub total_assists: u32,
    pub total_cards: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub substitutions: u32,
    pub possession: u32,
    pub shots: u32,
}

/// Totals for one player across every match they were selected for
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsDto {
    pub player_id: i32,
    pub matches_played: u32,
    pub starts: u32,
    pub substitute_appearances: u32,
    pub goals: u32,
    pub own_goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub minutes_played: i64,
    pub goals_per_match: f64,
    pub assists_per_match: f64,
}

/// Results and scoring for one team
///
/// Results and goal totals only consider finished matches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsDto {
    pub team_id: i32,
    pub total_matches: u32,
    pub scheduled: u32,
    pub live: u32,
    pub finished: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i64,
    pub goals_against: i64,
    pub clean_sheets: u32,
    pub win_rate: u32,
    pub goals_for_per_match: f64,
    pub goals_against_per_match: f64,
}
