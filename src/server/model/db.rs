//! Database model type aliases and their conversions into API types.
//!
//! The aliases keep signatures short throughout the data and service layers. The `From`
//! implementations at the bottom translate the SeaORM string enums into the enums exposed
//! over the API and back.

use entity::sea_orm_active_enums as db_enum;

use crate::model::matches::{
    CardType, MatchDto, MatchLocation, MatchStatus, PlayerSummaryDto, Position,
};

/// Type alias for team database model.
///
/// # Fields (from `entity::team::Model`)
/// - `id` - Primary key
/// - `owner_user_id` - User the team belongs to, assigned by the authentication system
/// - `name` - Team name
/// - `created_at` - Timestamp when the team was created
pub type TeamModel = entity::team::Model;

/// Type alias for player database model.
///
/// # Fields (from `entity::player::Model`)
/// - `id` - Primary key
/// - `team_id` - Foreign key to the team the player belongs to
/// - `first_name` / `last_name` - Player name
/// - `number` - Shirt number
/// - `position` - Preferred position on the team sheet
/// - `created_at` - Timestamp when the player was created
pub type PlayerModel = entity::player::Model;

/// Type alias for football match database model.
///
/// # Fields (from `entity::football_match::Model`)
/// - `id` - Primary key
/// - `team_id` - Foreign key to the owning team
/// - `opponent` - Opponent name
/// - `date` - Scheduled kick-off
/// - `location` - Home or away
/// - `status` - Lifecycle status, SCHEDULED -> LIVE -> FINISHED
/// - `our_score` / `opponent_score` - Current score
/// - `start_time` - Set when the match goes live
/// - `end_time` - Set when the match is finished
/// - `created_at` / `updated_at` - Record timestamps
pub type MatchModel = entity::football_match::Model;

/// Type alias for a player's selection for a match.
pub type MatchPlayerModel = entity::match_player::Model;

pub type GoalModel = entity::goal::Model;
pub type AssistModel = entity::assist::Model;
pub type CardModel = entity::card::Model;
pub type SubstitutionModel = entity::substitution::Model;

impl From<db_enum::MatchStatus> for MatchStatus {
    fn from(status: db_enum::MatchStatus) -> Self {
        match status {
            db_enum::MatchStatus::Scheduled => Self::Scheduled,
            db_enum::MatchStatus::Live => Self::Live,
            db_enum::MatchStatus::Finished => Self::Finished,
        }
    }
}

impl From<MatchStatus> for db_enum::MatchStatus {
    fn from(status: MatchStatus) -> Self {
        match status {
            MatchStatus::Scheduled => Self::Scheduled,
            MatchStatus::Live => Self::Live,
            MatchStatus::Finished => Self::Finished,
        }
    }
}

impl From<db_enum::MatchLocation> for MatchLocation {
    fn from(location: db_enum::MatchLocation) -> Self {
        match location {
            db_enum::MatchLocation::Home => Self::Home,
            db_enum::MatchLocation::Away => Self::Away,
        }
    }
}

impl From<MatchLocation> for db_enum::MatchLocation {
    fn from(location: MatchLocation) -> Self {
        match location {
            MatchLocation::Home => Self::Home,
            MatchLocation::Away => Self::Away,
        }
    }
}

impl From<db_enum::Position> for Position {
    fn from(position: db_enum::Position) -> Self {
        match position {
            db_enum::Position::Goalkeeper => Self::Goalkeeper,
            db_enum::Position::Defender => Self::Defender,
            db_enum::Position::Midfielder => Self::Midfielder,
            db_enum::Position::Forward => Self::Forward,
            db_enum::Position::Substitute => Self::Substitute,
        }
    }
}

impl From<Position> for db_enum::Position {
    fn from(position: Position) -> Self {
        match position {
            Position::Goalkeeper => Self::Goalkeeper,
            Position::Defender => Self::Defender,
            Position::Midfielder => Self::Midfielder,
            Position::Forward => Self::Forward,
            Position::Substitute => Self::Substitute,
        }
    }
}

impl From<db_enum::CardType> for CardType {
    fn from(card_type: db_enum::CardType) -> Self {
        match card_type {
            db_enum::CardType::Yellow => Self::Yellow,
            db_enum::CardType::Red => Self::Red,
        }
    }
}

impl From<CardType> for db_enum::CardType {
    fn from(card_type: CardType) -> Self {
        match card_type {
            CardType::Yellow => Self::Yellow,
            CardType::Red => Self::Red,
        }
    }
}

impl From<MatchModel> for MatchDto {
    fn from(model: MatchModel) -> Self {
        Self {
            id: model.id,
            team_id: model.team_id,
            opponent: model.opponent,
            date: model.date,
            location: model.location.into(),
            status: model.status.into(),
            our_score: model.our_score,
            opponent_score: model.opponent_score,
            start_time: model.start_time,
            end_time: model.end_time,
        }
    }
}

impl From<PlayerModel> for PlayerSummaryDto {
    fn from(model: PlayerModel) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            number: model.number,
            position: model.position.into(),
        }
    }
}
