//! SeaORM entities for teams, players, matches and match events.

pub mod assist;
pub mod card;
pub mod football_match;
pub mod goal;
pub mod match_player;
pub mod player;
pub mod sea_orm_active_enums;
pub mod substitution;
pub mod team;

pub mod prelude {
    pub use super::assist::Entity as Assist;
    pub use super::card::Entity as Card;
    pub use super::football_match::Entity as FootballMatch;
    pub use super::goal::Entity as Goal;
    pub use super::match_player::Entity as MatchPlayer;
    pub use super::player::Entity as Player;
    pub use super::substitution::Entity as Substitution;
    pub use super::team::Entity as Team;
}
