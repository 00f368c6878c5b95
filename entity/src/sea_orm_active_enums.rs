use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MatchStatus {
    #[sea_orm(string_value = "SCHEDULED")]
    Scheduled,
    #[sea_orm(string_value = "LIVE")]
    Live,
    #[sea_orm(string_value = "FINISHED")]
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MatchLocation {
    #[sea_orm(string_value = "HOME")]
    Home,
    #[sea_orm(string_value = "AWAY")]
    Away,
}

/// On-pitch role. `Substitute` is only ever stored on match player rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Position {
    #[sea_orm(string_value = "GOALKEEPER")]
    Goalkeeper,
    #[sea_orm(string_value = "DEFENDER")]
    Defender,
    #[sea_orm(string_value = "MIDFIELDER")]
    Midfielder,
    #[sea_orm(string_value = "FORWARD")]
    Forward,
    #[sea_orm(string_value = "SUBSTITUTE")]
    Substitute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CardType {
    #[sea_orm(string_value = "YELLOW")]
    Yellow,
    #[sea_orm(string_value = "RED")]
    Red,
}
