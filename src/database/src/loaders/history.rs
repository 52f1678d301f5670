use crate::loaders::number::lenient;
use fpl_core::PlayerStatistics;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct PlayerHistoryEntity {
    #[serde(default)]
    pub history_past: Vec<SeasonEntity>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeasonEntity {
    #[serde(deserialize_with = "lenient")]
    pub minutes: u32,
    #[serde(deserialize_with = "lenient")]
    pub total_points: i32,
    #[serde(deserialize_with = "lenient")]
    pub bps: i32,
    #[serde(deserialize_with = "lenient")]
    pub yellow_cards: u32,
    #[serde(deserialize_with = "lenient")]
    pub red_cards: u32,
    #[serde(deserialize_with = "lenient")]
    pub penalties_missed: u32,
    #[serde(deserialize_with = "lenient")]
    pub goals_scored: u32,
    #[serde(deserialize_with = "lenient")]
    pub assists: u32,
    #[serde(deserialize_with = "lenient")]
    pub clean_sheets: u32,
    #[serde(deserialize_with = "lenient")]
    pub goals_conceded: u32,
}

impl PlayerHistoryEntity {
    /// Seasons are listed oldest first
    pub fn previous_season(&self) -> Option<&SeasonEntity> {
        self.history_past.last()
    }
}

impl From<&SeasonEntity> for PlayerStatistics {
    fn from(season: &SeasonEntity) -> Self {
        PlayerStatistics {
            minutes_played: season.minutes,
            goals_scored: season.goals_scored,
            goals_conceded: season.goals_conceded,
            assists: season.assists,
            clean_sheets: season.clean_sheets,
            total_points: season.total_points,
            bonus_points: season.bps,
            yellow_cards: season.yellow_cards,
            red_cards: season.red_cards,
            penalties_missed: season.penalties_missed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_season_is_the_last_entry() {
        let raw = r#"{"history_past": [
            {"season_name": "2021/22", "minutes": 1000, "total_points": 50},
            {"season_name": "2022/23", "minutes": "2700", "total_points": 180, "bps": 600,
             "goals_scored": 12, "assists": "None", "clean_sheets": 9}
        ]}"#;

        let history: PlayerHistoryEntity = serde_json::from_str(raw).unwrap();
        let stats = PlayerStatistics::from(history.previous_season().unwrap());

        assert_eq!(stats.minutes_played, 2700);
        assert_eq!(stats.total_points, 180);
        assert_eq!(stats.bonus_points, 600);
        assert_eq!(stats.goals_scored, 12);
        assert_eq!(stats.assists, 0);
        assert_eq!(stats.red_cards, 0);
    }

    #[test]
    fn no_history_means_no_previous_season() {
        let history: PlayerHistoryEntity = serde_json::from_str(r#"{"history_past": []}"#).unwrap();
        assert!(history.previous_season().is_none());

        let history: PlayerHistoryEntity = serde_json::from_str("{}").unwrap();
        assert!(history.previous_season().is_none());
    }
}
