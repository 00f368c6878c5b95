//! Type aliases for the SeaORM models handed out by fixtures.

pub type TeamModel = entity::team::Model;
pub type PlayerModel = entity::player::Model;
pub type MatchModel = entity::football_match::Model;
pub type MatchPlayerModel = entity::match_player::Model;
