use crate::squad::{SquadRules, SquadViolation};
use crate::{Player, PlayerFieldPositionGroup};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};
use std::iter;

/// Weight of a starter's points per 90 against money left on the bench
const SCORE_RATING_WEIGHT: f32 = 100.0;

/// Set of selected players, keyed by player id.
///
/// Iteration is always in ascending id order, which makes every tie-break in the
/// derived views deterministic.
#[derive(Debug, Clone, Default)]
pub struct FantasySquad {
    rules: SquadRules,
    players: BTreeMap<u32, Player>,
}

impl FantasySquad {
    pub fn new(rules: SquadRules) -> Self {
        FantasySquad {
            rules,
            players: BTreeMap::new(),
        }
    }

    pub fn with_players(rules: SquadRules, players: impl IntoIterator<Item = Player>) -> Self {
        let mut squad = FantasySquad::new(rules);
        for player in players {
            squad.add(player);
        }
        squad
    }

    pub fn rules(&self) -> SquadRules {
        self.rules
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.players.contains_key(&player.id)
    }

    /// Returns false when a player with the same id is already selected
    pub fn add(&mut self, player: Player) -> bool {
        if self.players.contains_key(&player.id) {
            return false;
        }
        self.players.insert(player.id, player);
        true
    }

    pub fn remove(&mut self, player: &Player) -> Option<Player> {
        self.players.remove(&player.id)
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    pub fn players_at(&self, position: PlayerFieldPositionGroup) -> Vec<&Player> {
        self.players
            .values()
            .filter(|p| p.position == position)
            .collect()
    }

    pub fn club_count(&self, club: &str) -> usize {
        self.players.values().filter(|p| p.club == club).count()
    }

    pub fn value(&self) -> u32 {
        self.players.values().map(|p| p.cost).sum()
    }

    /// Whether swapping `current` for `incoming` would leave a valid squad.
    /// The squad itself is never touched.
    pub fn can_replace(&self, current: &Player, incoming: &Player) -> bool {
        let remaining = self
            .players
            .values()
            .filter(|p| p.id != current.id && p.id != incoming.id);

        Self::check(remaining.chain(iter::once(incoming)), self.rules).is_ok()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks position quotas, then budget, then the club cap
    pub fn validate(&self) -> std::result::Result<(), SquadViolation> {
        Self::check(self.players.values(), self.rules)
    }

    fn check<'p>(
        players: impl Iterator<Item = &'p Player> + Clone,
        rules: SquadRules,
    ) -> std::result::Result<(), SquadViolation> {
        let by_position = players.clone().map(|p| p.position).counts();

        for position in PlayerFieldPositionGroup::ALL {
            let expected = position.squad_quota();
            let actual = by_position.get(&position).copied().unwrap_or(0);

            if actual != expected {
                return Err(SquadViolation::PositionQuota {
                    position,
                    expected,
                    actual,
                });
            }
        }

        let value: u32 = players.clone().map(|p| p.cost).sum();
        if value > rules.budget {
            return Err(SquadViolation::OverBudget {
                value,
                budget: rules.budget,
            });
        }

        let most_common_club = players
            .map(|p| p.club.as_str())
            .counts()
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)));

        if let Some((club, count)) = most_common_club {
            if count > rules.max_players_per_club {
                return Err(SquadViolation::ClubCap {
                    club: club.to_string(),
                    count,
                    max: rules.max_players_per_club,
                });
            }
        }

        Ok(())
    }

    /// Single greedy pass over players by descending points per 90; a player starts
    /// when his line still has an open slot. Earlier picks are never reconsidered.
    pub fn starting_lineup(&self) -> Vec<&Player> {
        let mut lineup: Vec<&Player> = Vec::with_capacity(11);

        for player in Self::by_rating_desc(self.players.values()) {
            let fielded = lineup
                .iter()
                .filter(|p| p.position == player.position)
                .count();

            if fielded < player.position.fielded_quota() {
                lineup.push(player);
            }
        }

        lineup
    }

    pub fn bench(&self) -> Vec<&Player> {
        let lineup = self.starting_lineup();

        Self::by_rating_desc(
            self.players
                .values()
                .filter(|p| !lineup.iter().any(|s| s.id == p.id)),
        )
    }

    /// Rewards starters' points per 90 and penalizes money parked on the bench
    pub fn score(&self) -> f32 {
        let starters: f32 = self
            .starting_lineup()
            .iter()
            .map(|p| SCORE_RATING_WEIGHT * p.rating())
            .sum();
        let bench_cost: u32 = self.bench().iter().map(|p| p.cost).sum();

        starters - bench_cost as f32
    }

    fn by_rating_desc<'p>(players: impl Iterator<Item = &'p Player>) -> Vec<&'p Player> {
        players
            .sorted_by(|a, b| b.rating().total_cmp(&a.rating()))
            .collect()
    }
}

impl Display for FantasySquad {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let lineup = self.starting_lineup();

        for position in PlayerFieldPositionGroup::ALL {
            let line = lineup
                .iter()
                .filter(|p| p.position == position)
                .join(", ");
            writeln!(f, "{}", line)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", self.bench().iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerStatistics;

    fn player(
        id: u32,
        position: PlayerFieldPositionGroup,
        club: &str,
        cost: u32,
        total_points: i32,
    ) -> Player {
        Player::builder()
            .id(id)
            .name(format!("Player {}", id))
            .position(position)
            .cost(cost)
            .club(club)
            .statistics(PlayerStatistics {
                minutes_played: 900,
                total_points,
                ..Default::default()
            })
            .build()
            .unwrap()
    }

    /// 2/5/5/3 squad, one club per player, costs of 50 (value 750)
    fn full_squad() -> FantasySquad {
        let mut players = Vec::new();
        let mut id = 1;

        for position in PlayerFieldPositionGroup::ALL {
            for _ in 0..position.squad_quota() {
                players.push(player(id, position, &format!("Club {}", id), 50, id as i32 * 10));
                id += 1;
            }
        }

        FantasySquad::with_players(SquadRules::default(), players)
    }

    fn ids(players: &[&Player]) -> Vec<u32> {
        players.iter().map(|p| p.id).collect()
    }

    #[test]
    fn full_squad_is_valid() {
        let squad = full_squad();

        assert_eq!(squad.len(), 15);
        assert_eq!(squad.value(), 750);
        assert_eq!(squad.validate(), Ok(()));
    }

    #[test]
    fn add_ignores_duplicate_ids() {
        let mut squad = full_squad();

        assert!(!squad.add(player(1, PlayerFieldPositionGroup::Forward, "Other", 1, 0)));
        assert_eq!(squad.len(), 15);
        assert_eq!(squad.players_at(PlayerFieldPositionGroup::Goalkeeper).len(), 2);
    }

    #[test]
    fn quota_is_checked_first() {
        let mut squad = full_squad();
        let defender = squad.players_at(PlayerFieldPositionGroup::Defender)[0].clone();
        squad.remove(&defender);
        squad.add(player(99, PlayerFieldPositionGroup::Forward, "Club 3", 5000, 0));

        assert_eq!(
            squad.validate(),
            Err(SquadViolation::PositionQuota {
                position: PlayerFieldPositionGroup::Defender,
                expected: 5,
                actual: 4,
            })
        );
    }

    #[test]
    fn budget_is_inclusive() {
        let rules = SquadRules::new(750, 3);
        let squad = FantasySquad::with_players(rules, full_squad().players().cloned());
        assert!(squad.is_valid());

        let rules = SquadRules::new(749, 3);
        let squad = FantasySquad::with_players(rules, full_squad().players().cloned());
        assert_eq!(
            squad.validate(),
            Err(SquadViolation::OverBudget {
                value: 750,
                budget: 749
            })
        );
    }

    #[test]
    fn club_cap_allows_three_but_not_four() {
        let relabel = |squad: FantasySquad, count: u32| {
            let players = squad.players().cloned().map(|mut p| {
                if p.id <= count {
                    p.club = "Liverpool".to_string();
                }
                p
            });
            FantasySquad::with_players(SquadRules::default(), players)
        };

        assert!(relabel(full_squad(), 3).is_valid());
        assert_eq!(
            relabel(full_squad(), 4).validate(),
            Err(SquadViolation::ClubCap {
                club: "Liverpool".to_string(),
                count: 4,
                max: 3
            })
        );
    }

    #[test]
    fn starting_lineup_fills_one_four_four_two() {
        let squad = full_squad();
        let lineup = squad.starting_lineup();

        assert_eq!(lineup.len(), 11);
        for position in PlayerFieldPositionGroup::ALL {
            let fielded = lineup.iter().filter(|p| p.position == position).count();
            assert_eq!(fielded, position.fielded_quota());
        }

        // Ratings grow with id, so the lowest id of every line sits on the bench
        assert_eq!(ids(&squad.bench()), vec![13, 8, 3, 1]);
    }

    #[test]
    fn bench_complements_lineup() {
        let squad = full_squad();
        let lineup = squad.starting_lineup();
        let bench = squad.bench();

        assert_eq!(lineup.len() + bench.len(), 15);
        assert!(bench.iter().all(|b| !lineup.iter().any(|s| s.id == b.id)));

        let mut all: Vec<u32> = ids(&lineup);
        all.extend(ids(&bench));
        all.sort();
        assert_eq!(all, squad.players().map(|p| p.id).collect::<Vec<_>>());
    }

    #[test]
    fn lineup_ties_resolve_by_id() {
        let players = (1..=3).map(|id| player(id, PlayerFieldPositionGroup::Forward, "X", 40, 60));
        let squad = FantasySquad::with_players(SquadRules::default(), players);

        assert_eq!(ids(&squad.starting_lineup()), vec![1, 2]);
        assert_eq!(ids(&squad.bench()), vec![3]);
    }

    #[test]
    fn score_counts_starters_and_bench_cost() {
        let squad = full_squad();

        let starters: f32 = squad.starting_lineup().iter().map(|p| p.rating()).sum();
        let expected = 100.0 * starters - 4.0 * 50.0;

        assert!((squad.score() - expected).abs() < 1e-2);
    }

    #[test]
    fn can_replace_leaves_membership_untouched() {
        let squad = full_squad();
        let before: Vec<u32> = squad.players().map(|p| p.id).collect();

        let forward = squad.players_at(PlayerFieldPositionGroup::Forward)[0].clone();
        let defender = squad.players_at(PlayerFieldPositionGroup::Defender)[0].clone();

        let same_position = player(50, PlayerFieldPositionGroup::Forward, "Club 50", 60, 10);
        let other_position = player(51, PlayerFieldPositionGroup::Midfielder, "Club 51", 60, 10);

        assert!(squad.can_replace(&forward, &same_position));
        assert!(!squad.can_replace(&defender, &other_position));
        assert!(!squad.can_replace(&forward, &defender));

        assert_eq!(squad.players().map(|p| p.id).collect::<Vec<_>>(), before);
    }

    #[test]
    fn can_replace_respects_budget_and_clubs() {
        let squad = FantasySquad::with_players(SquadRules::new(800, 3), full_squad().players().cloned());
        let forward = squad.players_at(PlayerFieldPositionGroup::Forward)[0].clone();

        let pricey = player(60, PlayerFieldPositionGroup::Forward, "Club 60", 101, 10);
        let affordable = player(61, PlayerFieldPositionGroup::Forward, "Club 61", 100, 10);

        assert!(!squad.can_replace(&forward, &pricey));
        assert!(squad.can_replace(&forward, &affordable));
    }

    #[test]
    fn display_groups_lines_then_bench() {
        let squad = full_squad();
        let rendered = squad.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Player 2 (GKP/Club 2@"));
        assert_eq!(lines[1].matches("DEF").count(), 4);
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with("Player 13 (FWD/Club 13@"));
    }
}
