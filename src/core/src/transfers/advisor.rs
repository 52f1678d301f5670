use crate::transfers::PlayerTransfer;
use crate::{FantasySquad, PlayerSource};
use log::debug;

pub struct TransferAdvisor;

impl TransferAdvisor {
    /// Swap with the largest form gain that keeps the squad valid, if any.
    /// Only a strictly larger gain replaces an earlier proposal.
    pub fn suggest<S: PlayerSource + ?Sized>(
        squad: &FantasySquad,
        source: &S,
    ) -> Option<PlayerTransfer> {
        let mut best_transfer: Option<PlayerTransfer> = None;
        let mut best_form_change = 0.0;

        for candidate in source.players() {
            if squad.contains(candidate) {
                continue;
            }

            for current in squad.players_at(candidate.position) {
                if current.form >= candidate.form {
                    continue;
                }

                let form_change = candidate.form - current.form;
                if form_change > best_form_change && squad.can_replace(current, candidate) {
                    best_form_change = form_change;
                    best_transfer = Some(PlayerTransfer::new(current.clone(), candidate.clone()));
                }
            }
        }

        match &best_transfer {
            Some(transfer) => debug!("Suggested transfer: {}", transfer),
            None => debug!("No transfer improves squad form"),
        }

        best_transfer
    }
}
