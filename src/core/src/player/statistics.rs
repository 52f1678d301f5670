const MINUTES_PER_MATCH: f32 = 90.0;

/// Aggregated numbers of the previous season
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerStatistics {
    pub minutes_played: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub total_points: i32,
    pub bonus_points: i32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub penalties_missed: u32,
}

impl PlayerStatistics {
    /// Normalizes a counting stat to a 90 minute rate. Zero minutes yields zero.
    pub fn per_90(&self, value: f32) -> f32 {
        if self.minutes_played == 0 {
            return 0.0;
        }

        value / self.minutes_played as f32 * MINUTES_PER_MATCH
    }

    pub fn goals_scored_per_90(&self) -> f32 {
        self.per_90(self.goals_scored as f32)
    }

    pub fn goals_conceded_per_90(&self) -> f32 {
        self.per_90(self.goals_conceded as f32)
    }

    pub fn assists_per_90(&self) -> f32 {
        self.per_90(self.assists as f32)
    }

    pub fn clean_sheets_per_90(&self) -> f32 {
        self.per_90(self.clean_sheets as f32)
    }

    pub fn bonus_points_per_90(&self) -> f32 {
        self.per_90(self.bonus_points as f32)
    }

    pub fn total_points_per_90(&self) -> f32 {
        self.per_90(self.total_points as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_90_without_minutes_is_zero() {
        let stats = PlayerStatistics {
            total_points: 120,
            ..Default::default()
        };

        assert_eq!(stats.total_points_per_90(), 0.0);
    }

    #[test]
    fn per_90_scales_to_full_match() {
        let stats = PlayerStatistics {
            minutes_played: 1800,
            total_points: 100,
            goals_scored: 10,
            ..Default::default()
        };

        assert!((stats.total_points_per_90() - 5.0).abs() < 1e-5);
        assert!((stats.goals_scored_per_90() - 0.5).abs() < 1e-5);
    }
}
