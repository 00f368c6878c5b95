use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchLocation {
    Home,
    Away,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    Substitute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Yellow,
    Red,
}

/// Player details attached to composition rows and events
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummaryDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub number: i32,
    pub position: Position,
}

/// Match fields without related collections, used for listings and writes
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: i32,
    pub team_id: i32,
    pub opponent: String,
    pub date: NaiveDateTime,
    pub location: MatchLocation,
    pub status: MatchStatus,
    pub our_score: i32,
    pub opponent_score: i32,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayerDto {
    pub id: i32,
    pub player: PlayerSummaryDto,
    pub is_starter: bool,
    pub position: Position,
    pub minutes_played: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalDto {
    pub id: i32,
    pub match_id: i32,
    pub player: PlayerSummaryDto,
    pub minute: i32,
    pub is_own_goal: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssistDto {
    pub id: i32,
    pub match_id: i32,
    pub player: PlayerSummaryDto,
    pub minute: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub id: i32,
    pub match_id: i32,
    pub player: PlayerSummaryDto,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub minute: i32,
    pub reason: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionDto {
    pub id: i32,
    pub match_id: i32,
    pub player_in: PlayerSummaryDto,
    pub player_out: PlayerSummaryDto,
    pub minute: i32,
    pub created_at: NaiveDateTime,
}

/// Full match view: the match plus composition and every recorded event
///
/// Players are ordered by shirt number, events by minute.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetailDto {
    #[serde(flatten)]
    pub fixture: MatchDto,
    pub players: Vec<MatchPlayerDto>,
    pub goals: Vec<GoalDto>,
    pub assists: Vec<AssistDto>,
    pub cards: Vec<CardDto>,
    pub substitutions: Vec<SubstitutionDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchDto {
    #[validate(length(min = 1, max = 100))]
    pub opponent: String,
    pub date: NaiveDateTime,
    pub location: MatchLocation,
    pub team_id: i32,
}

/// Partial match update, absent fields are left untouched
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchDto {
    #[validate(length(min = 1, max = 100))]
    pub opponent: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub location: Option<MatchLocation>,
    pub status: Option<MatchStatus>,
    #[validate(range(min = 0))]
    pub our_score: Option<i32>,
    #[validate(range(min = 0))]
    pub opponent_score: Option<i32>,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct MatchListParams {
    pub team_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StarterDto {
    pub player_id: i32,
    pub position: Position,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubstituteDto {
    pub player_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompositionDto {
    pub starters: Vec<StarterDto>,
    #[serde(default)]
    pub substitutes: Vec<SubstituteDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddGoalDto {
    pub player_id: i32,
    #[validate(range(min = 0))]
    pub minute: i32,
    #[serde(default)]
    pub is_own_goal: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddAssistDto {
    pub player_id: i32,
    #[validate(range(min = 0))]
    pub minute: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCardDto {
    pub player_id: i32,
    #[serde(rename = "type")]
    pub card_type: CardType,
    #[validate(range(min = 0))]
    pub minute: i32,
    #[validate(length(max = 255))]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddSubstitutionDto {
    pub player_in_id: i32,
    pub player_out_id: i32,
    #[validate(range(min = 0))]
    pub minute: i32,
}
