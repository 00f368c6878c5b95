//! Statistics aggregator.
//!
//! Read-only projections over stored matches and events. Ratios are rounded to two decimal
//! places and percentages to whole numbers; an empty denominator yields zero.

#[cfg(test)]
mod tests;

use std::cmp::Ordering;

use entity::sea_orm_active_enums::{CardType, MatchStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        matches::{CardType as CardTypeDto, MatchDetailDto},
        stats::{MatchStatsDto, PlayerStatsDto, TeamStatsDto},
    },
    server::{
        data::{
            event::MatchEventRepository, match_player::MatchPlayerRepository,
            matches::MatchRepository,
        },
        error::Error,
        model::db::MatchModel,
        service::{
            matches::load_match_view,
            roster::{OwnedEntity, RosterGate},
        },
    },
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
    gate: &'a dyn RosterGate,
}

impl<'a> StatsService<'a> {
    /// Creates a new instance of [`StatsService`]
    pub fn new(db: &'a DatabaseConnection, gate: &'a dyn RosterGate) -> Self {
        Self { db, gate }
    }

    /// Counts derived from the full match view
    pub async fn match_stats(&self, user_id: i32, match_id: i32) -> Result<MatchStatsDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Match(match_id), user_id)
            .await?;

        let view = load_match_view(self.db, match_id).await?;

        Ok(summarize_match(&view))
    }

    /// Totals for a player across every match they were selected for
    pub async fn player_stats(
        &self,
        user_id: i32,
        player_id: i32,
    ) -> Result<PlayerStatsDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Player(player_id), user_id)
            .await?;

        let selections = MatchPlayerRepository::new(self.db)
            .get_by_player(player_id)
            .await?;
        let event_repo = MatchEventRepository::new(self.db);
        let goals = event_repo.count_goals_by_player(player_id, false).await?;
        let own_goals = event_repo.count_goals_by_player(player_id, true).await?;
        let assists = event_repo.count_assists_by_player(player_id).await?;
        let yellow_cards = event_repo
            .count_cards_by_player(player_id, CardType::Yellow)
            .await?;
        let red_cards = event_repo
            .count_cards_by_player(player_id, CardType::Red)
            .await?;

        let matches_played = selections.len() as u32;
        let starts = selections.iter().filter(|s| s.is_starter).count() as u32;

        Ok(PlayerStatsDto {
            player_id,
            matches_played,
            starts,
            substitute_appearances: matches_played - starts,
            goals: goals as u32,
            own_goals: own_goals as u32,
            assists: assists as u32,
            yellow_cards: yellow_cards as u32,
            red_cards: red_cards as u32,
            minutes_played: selections.iter().map(|s| s.minutes_played as i64).sum(),
            goals_per_match: ratio(goals as f64, matches_played),
            assists_per_match: ratio(assists as f64, matches_played),
        })
    }

    /// Results and scoring for a team, only finished matches count towards results
    pub async fn team_stats(&self, user_id: i32, team_id: i32) -> Result<TeamStatsDto, Error> {
        self.gate
            .assert_ownership(OwnedEntity::Team(team_id), user_id)
            .await?;

        let matches = MatchRepository::new(self.db).get_by_team(team_id).await?;

        Ok(summarize_team(team_id, &matches))
    }
}

fn summarize_match(view: &MatchDetailDto) -> MatchStatsDto {
    let starters = view.players.iter().filter(|p| p.is_starter).count() as u32;
    let yellow_cards = view
        .cards
        .iter()
        .filter(|c| c.card_type == CardTypeDto::Yellow)
        .count() as u32;
    let red_cards = view
        .cards
        .iter()
        .filter(|c| c.card_type == CardTypeDto::Red)
        .count() as u32;

    MatchStatsDto {
        starters,
        substitutes: view.players.len() as u32 - starters,
        total_goals: view.goals.len() as u32,
        total_assists: view.assists.len() as u32,
        total_cards: view.cards.len() as u32,
        yellow_cards,
        red_cards,
        substitutions: view.substitutions.len() as u32,
        // Not tracked
        possession: 0,
        shots: 0,
    }
}

fn summarize_team(team_id: i32, matches: &[MatchModel]) -> TeamStatsDto {
    let mut stats = TeamStatsDto {
        team_id,
        total_matches: matches.len() as u32,
        ..Default::default()
    };

    for football_match in matches {
        match football_match.status {
            MatchStatus::Scheduled => stats.scheduled += 1,
            MatchStatus::Live => stats.live += 1,
            MatchStatus::Finished => {
                stats.finished += 1;
                stats.goals_for += football_match.our_score as i64;
                stats.goals_against += football_match.opponent_score as i64;
                if football_match.opponent_score == 0 {
                    stats.clean_sheets += 1;
                }

                match football_match.our_score.cmp(&football_match.opponent_score) {
                    Ordering::Greater => stats.wins += 1,
                    Ordering::Equal => stats.draws += 1,
                    Ordering::Less => stats.losses += 1,
                }
            }
        }
    }

    if stats.finished > 0 {
        stats.win_rate = (stats.wins as f64 / stats.finished as f64 * 100.0).round() as u32;
    }
    stats.goals_for_per_match = ratio(stats.goals_for as f64, stats.finished);
    stats.goals_against_per_match = ratio(stats.goals_against as f64, stats.finished);

    stats
}

/// `total / count` rounded to two decimal places, 0 when `count` is 0
fn ratio(total: f64, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }

    (total / count as f64 * 100.0).round() / 100.0
}
