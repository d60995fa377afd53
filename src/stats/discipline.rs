use log::debug;

use super::ranking::{top_n, Tally};
use super::types::DisciplineRecord;
use crate::config::RankingSettings;
use crate::domain::{CardType, Match};

/// Counts cards per player in entry order and ranks by total cards.
///
/// Suspension is set as soon as a player's yellow count reaches the
/// threshold and is never cleared.
pub fn rank_discipline(matches: &[Match], config: &RankingSettings) -> Vec<DisciplineRecord> {
    let mut records: Tally<DisciplineRecord> = Tally::new();

    for card in matches.iter().flat_map(|m| m.cards.iter()) {
        let record = records.entry_or_insert_with(&card.player, || DisciplineRecord::new(&card.player));
        match card.card_type {
            CardType::Yellow => record.yellow += 1,
            CardType::Red => record.red += 1,
            CardType::Other => {}
        }
        if record.yellow >= u64::from(config.suspension_threshold) {
            record.suspended = true;
        }
    }

    debug!("Found {} players with cards", records.len());
    top_n(records.into_vec(), config.leaderboard_size, |a, b| {
        b.total_cards().cmp(&a.total_cards())
    })
}
