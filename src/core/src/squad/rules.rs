/// Budget ceiling of the fantasy game, in tenths of a million
pub const DEFAULT_BUDGET: u32 = 1000;
pub const DEFAULT_MAX_PLAYERS_PER_CLUB: usize = 3;

/// Limits a squad has to respect besides the positional quotas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquadRules {
    pub budget: u32,
    pub max_players_per_club: usize,
}

impl SquadRules {
    pub fn new(budget: u32, max_players_per_club: usize) -> Self {
        SquadRules {
            budget,
            max_players_per_club,
        }
    }
}

impl Default for SquadRules {
    fn default() -> Self {
        SquadRules::new(DEFAULT_BUDGET, DEFAULT_MAX_PLAYERS_PER_CLUB)
    }
}
