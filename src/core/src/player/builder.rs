use crate::{Player, PlayerFieldPositionGroup, PlayerStatistics};

#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    name: Option<String>,
    position: Option<PlayerFieldPositionGroup>,
    cost: Option<u32>,
    club: Option<String>,
    form: Option<f32>,
    statistics: Option<PlayerStatistics>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: PlayerFieldPositionGroup) -> Self {
        self.position = Some(position);
        self
    }

    pub fn cost(mut self, cost: u32) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into());
        self
    }

    pub fn form(mut self, form: f32) -> Self {
        self.form = Some(form);
        self
    }

    pub fn statistics(mut self, statistics: PlayerStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        Ok(Player {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            position: self.position.ok_or("position is required")?,
            cost: self.cost.ok_or("cost is required")?,
            club: self.club.ok_or("club is required")?,
            selected_by_percent: 0.0,
            form: self.form.unwrap_or_default(),
            statistics: self.statistics.unwrap_or_default(),
        })
    }
}
