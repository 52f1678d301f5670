use crate::loaders::number::lenient;
use fpl_core::PlayerFieldPositionGroup;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BootstrapEntity {
    pub teams: Vec<TeamEntity>,
    pub elements: Vec<ElementEntity>,
}

#[derive(Debug, Deserialize)]
pub struct TeamEntity {
    pub code: u32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ElementEntity {
    pub id: u32,
    pub web_name: String,
    pub element_type: PlayerFieldPositionGroup,
    pub now_cost: u32,
    pub team_code: u32,
    #[serde(deserialize_with = "lenient")]
    pub selected_by_percent: f32,
    #[serde(deserialize_with = "lenient")]
    pub form: f32,
}

impl BootstrapEntity {
    pub fn club_name(&self, team_code: u32) -> Option<&str> {
        self.teams
            .iter()
            .find(|t| t.code == team_code)
            .map(|t| t.name.as_str())
    }
}
