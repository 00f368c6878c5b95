
use touchline_test_utils::prelude::*;

use super::*;
use crate::server::service::roster::DbRosterGate;
