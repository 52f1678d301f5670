use crate::squad::{FantasySquad, SquadRules};
use crate::{Player, PlayerSource};
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;

pub const DEFAULT_TRIALS: u32 = 2000;

/// Players dropped at random before every trial but the first
const PERTURBATION_SIZE: usize = 3;
const PINNED_GOALKEEPERS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSettings {
    pub trials: u32,
    pub rules: SquadRules,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            trials: DEFAULT_TRIALS,
            rules: SquadRules::default(),
        }
    }
}

/// Reported to the observer once per trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    pub trial: u32,
    /// `None` when the trial ended with an invalid squad
    pub score: Option<f32>,
    pub best_score: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct GeneratedSquad {
    pub squad: FantasySquad,
    pub score: f32,
    pub valid_trials: u32,
}

impl GeneratedSquad {
    /// False when no trial produced a valid squad; `squad` is then empty and `score` zero
    pub fn is_found(&self) -> bool {
        self.valid_trials > 0
    }
}

/// Greedy fill with randomized restarts.
///
/// Every trial perturbs the squad left by the previous one, refills it from the
/// candidate pool swapping weaker players out, and keeps a copy when it is valid and
/// scores higher than anything seen so far.
pub struct SquadGenerator {
    settings: GeneratorSettings,
    running_squad: FantasySquad,
    pinned: Vec<Player>,
}

impl SquadGenerator {
    pub fn new(settings: GeneratorSettings) -> Self {
        SquadGenerator {
            settings,
            running_squad: FantasySquad::new(settings.rules),
            pinned: Vec::new(),
        }
    }

    pub fn running_squad(&self) -> &FantasySquad {
        &self.running_squad
    }

    pub fn generate<S, R>(&mut self, source: &S, rng: &mut R) -> GeneratedSquad
    where
        S: PlayerSource + ?Sized,
        R: Rng + ?Sized,
    {
        self.generate_with_observer(source, rng, |_| {})
    }

    pub fn generate_with_observer<S, R, F>(
        &mut self,
        source: &S,
        rng: &mut R,
        mut observer: F,
    ) -> GeneratedSquad
    where
        S: PlayerSource + ?Sized,
        R: Rng + ?Sized,
        F: FnMut(&TrialOutcome),
    {
        let rules = self.settings.rules;

        self.pinned = source.pinned_goalkeepers().into_iter().cloned().collect();
        if self.pinned.len() != PINNED_GOALKEEPERS {
            warn!(
                "Expected {} pinned goalkeepers, got {}",
                PINNED_GOALKEEPERS,
                self.pinned.len()
            );
        }

        self.running_squad = FantasySquad::with_players(rules, self.pinned.iter().cloned());

        let candidates = source.players();
        debug!("Generating squad from {} candidates", candidates.len());

        let mut best: Option<(FantasySquad, f32)> = None;
        let mut valid_trials = 0;

        for trial in 0..self.settings.trials {
            if trial > 0 {
                self.perturb(rng);
            }

            self.fill(&candidates);

            let score = match self.running_squad.validate() {
                Ok(()) => {
                    valid_trials += 1;
                    let score = self.running_squad.score();
                    debug!("Trial {}: found team with score {}", trial, score);
                    Some(score)
                }
                Err(violation) => {
                    debug!("Trial {}: team failed: {}", trial, violation);
                    None
                }
            };

            if let Some(score) = score {
                if best.as_ref().is_none_or(|(_, best_score)| score > *best_score) {
                    info!(
                        "Trial {}: new best team with score {} (value {})",
                        trial,
                        score,
                        self.running_squad.value()
                    );
                    best = Some((self.running_squad.clone(), score));
                }
            }

            observer(&TrialOutcome {
                trial,
                score,
                best_score: best.as_ref().map(|(_, best_score)| *best_score),
            });
        }

        match best {
            Some((squad, score)) => GeneratedSquad {
                squad,
                score,
                valid_trials,
            },
            None => {
                warn!(
                    "No valid squad found in {} trials",
                    self.settings.trials
                );
                GeneratedSquad {
                    squad: FantasySquad::new(rules),
                    score: 0.0,
                    valid_trials,
                }
            }
        }
    }

    /// Shuffles the unpinned players and drops the first few to get out of a local optimum
    fn perturb<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut survivors: Vec<Player> = self
            .running_squad
            .players()
            .filter(|p| !self.is_pinned(p))
            .cloned()
            .collect();

        survivors.shuffle(rng);

        let dropped = survivors.len().min(PERTURBATION_SIZE);
        survivors.drain(..dropped);

        self.running_squad.clear();
        for player in self.pinned.iter().cloned().chain(survivors) {
            self.running_squad.add(player);
        }
    }

    fn fill(&mut self, candidates: &[&Player]) {
        for &candidate in candidates {
            if candidate.is_goalkeeper() || self.running_squad.contains(candidate) {
                continue;
            }

            if self.can_add(candidate) {
                self.running_squad.add(candidate.clone());
                continue;
            }

            if let Some(replaced) = self.find_replacement(candidate) {
                self.running_squad.remove(&replaced);

                if self.can_add(candidate) {
                    self.running_squad.add(candidate.clone());
                } else {
                    self.running_squad.add(replaced);
                }
            }
        }
    }

    fn can_add(&self, player: &Player) -> bool {
        let rules = self.settings.rules;

        let position_filled = self.running_squad.players_at(player.position).len()
            >= player.position.squad_quota();

        if self.running_squad.club_count(&player.club) >= rules.max_players_per_club {
            return false;
        }

        // Strictly below the budget here, while a finished squad may reach it
        if self.running_squad.value() + player.cost >= rules.budget {
            return false;
        }

        !position_filled
    }

    /// Last incumbent at the candidate's position that the candidate is at least as
    /// good as. Pinned players are never offered.
    fn find_replacement(&self, candidate: &Player) -> Option<Player> {
        self.running_squad
            .players_at(candidate.position)
            .into_iter()
            .filter(|incumbent| !self.is_pinned(incumbent))
            .filter(|incumbent| candidate.is_better_than(incumbent))
            .last()
            .cloned()
    }

    fn is_pinned(&self, player: &Player) -> bool {
        self.pinned.iter().any(|p| p.id == player.id)
    }
}
