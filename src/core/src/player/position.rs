use serde::Deserialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub enum PlayerFieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerFieldPositionGroup {
    pub const ALL: [PlayerFieldPositionGroup; 4] = [
        PlayerFieldPositionGroup::Goalkeeper,
        PlayerFieldPositionGroup::Defender,
        PlayerFieldPositionGroup::Midfielder,
        PlayerFieldPositionGroup::Forward,
    ];

    /// Players of this group a full squad must carry
    pub fn squad_quota(&self) -> usize {
        match self {
            PlayerFieldPositionGroup::Goalkeeper => 2,
            PlayerFieldPositionGroup::Defender => 5,
            PlayerFieldPositionGroup::Midfielder => 5,
            PlayerFieldPositionGroup::Forward => 3,
        }
    }

    /// Players of this group fielded in the starting eleven
    pub fn fielded_quota(&self) -> usize {
        match self {
            PlayerFieldPositionGroup::Goalkeeper => 1,
            PlayerFieldPositionGroup::Defender => 4,
            PlayerFieldPositionGroup::Midfielder => 4,
            PlayerFieldPositionGroup::Forward => 2,
        }
    }

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerFieldPositionGroup::Goalkeeper => "GKP",
            PlayerFieldPositionGroup::Defender => "DEF",
            PlayerFieldPositionGroup::Midfielder => "MID",
            PlayerFieldPositionGroup::Forward => "FWD",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        *self == PlayerFieldPositionGroup::Goalkeeper
    }
}

impl TryFrom<u8> for PlayerFieldPositionGroup {
    type Error = String;

    /// Element type codes as published by the fantasy game API
    fn try_from(element_type: u8) -> std::result::Result<Self, Self::Error> {
        match element_type {
            1 => Ok(PlayerFieldPositionGroup::Goalkeeper),
            2 => Ok(PlayerFieldPositionGroup::Defender),
            3 => Ok(PlayerFieldPositionGroup::Midfielder),
            4 => Ok(PlayerFieldPositionGroup::Forward),
            other => Err(format!("unknown element type {}", other)),
        }
    }
}

impl Display for PlayerFieldPositionGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotas_add_up_to_full_squad_and_eleven() {
        let squad: usize = PlayerFieldPositionGroup::ALL.iter().map(|p| p.squad_quota()).sum();
        let fielded: usize = PlayerFieldPositionGroup::ALL.iter().map(|p| p.fielded_quota()).sum();

        assert_eq!(squad, 15);
        assert_eq!(fielded, 11);
    }

    #[test]
    fn element_type_mapping() {
        assert_eq!(PlayerFieldPositionGroup::try_from(1u8), Ok(PlayerFieldPositionGroup::Goalkeeper));
        assert_eq!(PlayerFieldPositionGroup::try_from(4u8), Ok(PlayerFieldPositionGroup::Forward));
        assert!(PlayerFieldPositionGroup::try_from(5u8).is_err());
    }
}
