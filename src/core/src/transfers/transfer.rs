use crate::Player;
use std::fmt::{Display, Formatter, Result};

/// Single swap of a squad member for a player from the pool
#[derive(Debug, Clone)]
pub struct PlayerTransfer {
    pub remove: Player,
    pub bring_in: Player,
}

impl PlayerTransfer {
    pub fn new(remove: Player, bring_in: Player) -> Self {
        PlayerTransfer { remove, bring_in }
    }

    pub fn form_change(&self) -> f32 {
        self.bring_in.form - self.remove.form
    }
}

impl Display for PlayerTransfer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "out: {} -> in: {} (form {:+.1})",
            self.remove,
            self.bring_in,
            self.form_change()
        )
    }
}
