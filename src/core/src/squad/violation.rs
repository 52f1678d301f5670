use crate::PlayerFieldPositionGroup;
use std::fmt::{Display, Formatter, Result};

/// First rule a squad breaks, in the order the rules are checked
#[derive(Debug, Clone, PartialEq)]
pub enum SquadViolation {
    PositionQuota {
        position: PlayerFieldPositionGroup,
        expected: usize,
        actual: usize,
    },
    OverBudget {
        value: u32,
        budget: u32,
    },
    ClubCap {
        club: String,
        count: usize,
        max: usize,
    },
}

impl Display for SquadViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SquadViolation::PositionQuota {
                position,
                expected,
                actual,
            } => write!(
                f,
                "expected {} players at {}, found {}",
                expected, position, actual
            ),
            SquadViolation::OverBudget { value, budget } => {
                write!(f, "value {} over budget {}", value, budget)
            }
            SquadViolation::ClubCap { club, count, max } => {
                write!(f, "too many players {} from {} (max {})", count, club, max)
            }
        }
    }
}
