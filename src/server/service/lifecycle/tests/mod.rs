
use entity::sea_orm_active_enums::MatchStatus;
use touchline_test_utils::prelude::*;

use super::*;
use crate::server::service::roster::DbRosterGate;
