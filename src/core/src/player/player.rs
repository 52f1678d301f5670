use crate::player::builder::PlayerBuilder;
use crate::{PlayerFieldPositionGroup, PlayerStatistics};
use std::fmt::{Display, Formatter, Result};
use std::hash::{Hash, Hasher};

/// A candidate for the fantasy squad.
///
/// Two players are the same player when their ids match, whatever the other fields say.
/// Repositories rebuild records on every load, so nothing downstream may rely on
/// field-by-field equality.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: PlayerFieldPositionGroup,
    /// Price in tenths of a million
    pub cost: u32,
    pub club: String,
    pub selected_by_percent: f32,
    pub form: f32,

    pub statistics: PlayerStatistics,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    /// Primary ordering key for every selection decision
    pub fn rating(&self) -> f32 {
        self.statistics.total_points_per_90()
    }

    pub fn is_better_than(&self, other: &Player) -> bool {
        self.rating() >= other.rating()
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} ({}/{}@{:.2}PPG)",
            self.name,
            self.position,
            self.club,
            self.statistics.total_points_per_90()
        )
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn player(id: u32, name: &str, total_points: i32) -> Player {
        Player::builder()
            .id(id)
            .name(name)
            .position(PlayerFieldPositionGroup::Midfielder)
            .cost(55)
            .club("Arsenal")
            .statistics(PlayerStatistics {
                minutes_played: 900,
                total_points,
                ..Default::default()
            })
            .build()
            .unwrap()
    }

    #[test]
    fn identity_is_by_id_only() {
        let original = player(7, "Saka", 50);
        let reloaded = player(7, "B. Saka", 80);

        assert_eq!(original, reloaded);

        let set: HashSet<Player> = [original, reloaded].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn better_than_compares_rating_inclusively() {
        let a = player(1, "A", 50);
        let b = player(2, "B", 50);
        let c = player(3, "C", 40);

        assert!(a.is_better_than(&b));
        assert!(b.is_better_than(&a));
        assert!(a.is_better_than(&c));
        assert!(!c.is_better_than(&a));
    }

    #[test]
    fn display_uses_points_per_90() {
        let saka = player(7, "Saka", 50);

        assert_eq!(saka.to_string(), "Saka (MID/Arsenal@5.00PPG)");
    }
}
