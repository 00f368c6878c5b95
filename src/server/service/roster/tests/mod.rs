
use touchline_test_utils::prelude::*;

use super::*;
