use crate::Player;
use std::collections::HashSet;

/// Supplies the candidate pool to the squad generator.
///
/// `players` must be deduplicated by id and already filtered by whatever eligibility
/// rules the source applies; the generator walks it in the returned order.
pub trait PlayerSource {
    fn players(&self) -> Vec<&Player>;

    /// The two goalkeepers every generated squad is seeded with
    fn pinned_goalkeepers(&self) -> Vec<&Player>;
}

/// In-memory pool, mostly for callers that already hold parsed players
#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    players: Vec<Player>,
    pinned_ids: Vec<u32>,
}

impl PlayerPool {
    /// Keeps the first occurrence of every id
    pub fn new(players: Vec<Player>, pinned_ids: Vec<u32>) -> Self {
        let mut seen = HashSet::with_capacity(players.len());
        let players = players.into_iter().filter(|p| seen.insert(p.id)).collect();

        PlayerPool {
            players,
            pinned_ids,
        }
    }
}

impl PlayerSource for PlayerPool {
    fn players(&self) -> Vec<&Player> {
        self.players.iter().collect()
    }

    fn pinned_goalkeepers(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| self.pinned_ids.contains(&p.id))
            .collect()
    }
}
