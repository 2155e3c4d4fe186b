//! Collection summary for an opened pack.

use serde::Serialize;

use crate::cards::{Card, Pack, Rarity};

/// Totals shown on the summary screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub total_cards: usize,
    pub legendary: usize,
    pub rare: usize,
    pub common: usize,
    /// Sum of card values in USD.
    pub total_value: u32,
    /// First card with the highest rarity.
    pub best_card: Option<Card>,
    pub pack_cost: f64,
}

impl CollectionSummary {
    /// Summarize `cards` drawn from `pack`.
    #[must_use]
    pub fn new(pack: &Pack, cards: &[Card]) -> Self {
        let count = |rarity: Rarity| cards.iter().filter(|c| c.rarity == rarity).count();

        // `max_by_key` keeps the last maximum; ties must keep the first.
        let best_card = cards
            .iter()
            .fold(None::<&Card>, |best, card| match best {
                Some(b) if b.rarity >= card.rarity => Some(b),
                _ => Some(card),
            })
            .cloned();

        Self {
            total_cards: cards.len(),
            legendary: count(Rarity::Legendary),
            rare: count(Rarity::Rare),
            common: count(Rarity::Common),
            total_value: cards.iter().map(|c| c.rarity.value()).sum(),
            best_card,
            pack_cost: pack.price,
        }
    }

    /// Collection value minus pack cost.
    #[must_use]
    pub fn profit(&self) -> f64 {
        f64::from(self.total_value) - self.pack_cost
    }

    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.profit() > 0.0
    }

    /// Count for one rarity tier.
    #[must_use]
    pub fn count(&self, rarity: Rarity) -> usize {
        match rarity {
            Rarity::Legendary => self.legendary,
            Rarity::Rare => self.rare,
            Rarity::Common => self.common,
        }
    }
}
