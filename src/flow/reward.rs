//! Reward-draw policy.
//!
//! 1. Shuffle the whole card pool and take the first `draw_size` cards.
//! 2. If the pack guarantees a minimum rarity and the draw has no card at
//!    that rarity or better, overwrite slot 0 with the first qualifying
//!    card later in the shuffled pool.
//!
//! The patch only ever touches slot 0 and does not check the rest of the
//! draw for duplicates. If the pool has no qualifying card the draw is
//! returned as-is.

use crate::cards::{Card, Pack};
use crate::core::DrawRng;

use super::state::Draw;

/// Draw cards for `pack` from `pool`.
///
/// Returns `min(draw_size, pool.len())` cards in reveal order.
pub fn draw_reward(pack: &Pack, pool: &[Card], rng: &mut DrawRng, draw_size: usize) -> Draw {
    let mut shuffled: Vec<&Card> = pool.iter().collect();
    rng.shuffle(&mut shuffled);

    let take = draw_size.min(shuffled.len());
    let (candidates, rest) = shuffled.split_at(take);
    let mut draw: Draw = candidates.iter().map(|&card| card.clone()).collect();

    let Some(minimum) = pack.rarity.guarantee() else {
        return draw;
    };

    if draw.iter().any(|card| card.meets(minimum)) {
        return draw;
    }

    match rest.iter().find(|card| card.meets(minimum)) {
        Some(&replacement) => {
            if let Some(slot) = draw.first_mut() {
                tracing::debug!(
                    pack = %pack.id,
                    replaced = %slot.id,
                    with = %replacement.id,
                    "draw upgraded to meet {minimum} guarantee"
                );
                *slot = replacement.clone();
            }
        }
        None => {
            tracing::warn!(pack = %pack.id, "pool has no {minimum}-or-better card; guarantee skipped");
        }
    }

    draw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Rarity};

    fn pool(rarities: &[(&str, Rarity)]) -> Vec<Card> {
        rarities
            .iter()
            .map(|&(id, rarity)| Card::new(id, id, rarity))
            .collect()
    }

    fn scenario_pool() -> Vec<Card> {
        pool(&[
            ("L1", Rarity::Legendary),
            ("R1", Rarity::Rare),
            ("R2", Rarity::Rare),
            ("C1", Rarity::Common),
            ("C2", Rarity::Common),
            ("C3", Rarity::Common),
        ])
    }

    #[test]
    fn test_draw_size() {
        let pack = Pack::new("p", "P", 1.0, Rarity::Common);
        let cards = scenario_pool();
        let mut rng = DrawRng::new(1);

        assert_eq!(draw_reward(&pack, &cards, &mut rng, 5).len(), 5);
        assert_eq!(draw_reward(&pack, &cards, &mut rng, 10).len(), 6);
    }

    #[test]
    fn test_legendary_always_included() {
        let pack = Pack::new("p", "P", 1.0, Rarity::Legendary);
        let cards = scenario_pool();

        for seed in 0..200 {
            let mut rng = DrawRng::new(seed);
            let draw = draw_reward(&pack, &cards, &mut rng, 5);
            assert!(
                draw.iter().any(|c| c.id == CardId::new("L1")),
                "seed {seed} lost the legendary"
            );
        }
    }

    #[test]
    fn test_patch_replaces_slot_zero() {
        let pack = Pack::new("p", "P", 1.0, Rarity::Legendary);
        let cards = scenario_pool();

        // Find a seed where the plain shuffle leaves L1 in slot 5.
        let seed = (0..1000)
            .find(|&seed| {
                let mut replay = DrawRng::new(seed);
                let mut order: Vec<&Card> = cards.iter().collect();
                replay.shuffle(&mut order);
                order[5].id == CardId::new("L1")
            })
            .expect("some seed leaves the legendary out");

        let mut replay = DrawRng::new(seed);
        let mut order: Vec<&Card> = cards.iter().collect();
        replay.shuffle(&mut order);

        let mut rng = DrawRng::new(seed);
        let draw = draw_reward(&pack, &cards, &mut rng, 5);

        assert_eq!(draw[0].id, CardId::new("L1"));
        for i in 1..5 {
            assert_eq!(draw[i].id, order[i].id, "slot {i} must be untouched");
        }
    }

    #[test]
    fn test_rare_guarantee_accepts_legendary() {
        let pack = Pack::new("p", "P", 1.0, Rarity::Rare);
        let cards = pool(&[
            ("L1", Rarity::Legendary),
            ("C1", Rarity::Common),
            ("C2", Rarity::Common),
            ("C3", Rarity::Common),
            ("C4", Rarity::Common),
            ("C5", Rarity::Common),
            ("C6", Rarity::Common),
        ]);

        for seed in 0..200 {
            let mut rng = DrawRng::new(seed);
            let draw = draw_reward(&pack, &cards, &mut rng, 5);
            assert!(draw.iter().any(|c| c.meets(Rarity::Rare)));
        }
    }

    #[test]
    fn test_no_qualifying_card_leaves_draw() {
        let pack = Pack::new("p", "P", 1.0, Rarity::Legendary);
        let cards = pool(&[
            ("C1", Rarity::Common),
            ("C2", Rarity::Common),
            ("C3", Rarity::Common),
            ("C4", Rarity::Common),
            ("C5", Rarity::Common),
            ("C6", Rarity::Common),
        ]);

        let mut replay = DrawRng::new(3);
        let mut order: Vec<&Card> = cards.iter().collect();
        replay.shuffle(&mut order);

        let mut rng = DrawRng::new(3);
        let draw = draw_reward(&pack, &cards, &mut rng, 5);

        let ids: Vec<_> = draw.iter().map(|c| c.id.clone()).collect();
        let expected: Vec<_> = order[..5].iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_common_pack_no_patch() {
        let pack = Pack::new("p", "P", 1.0, Rarity::Common);
        let cards = scenario_pool();

        let mut replay = DrawRng::new(11);
        let mut order: Vec<&Card> = cards.iter().collect();
        replay.shuffle(&mut order);

        let mut rng = DrawRng::new(11);
        let draw = draw_reward(&pack, &cards, &mut rng, 5);
        for i in 0..5 {
            assert_eq!(draw[i].id, order[i].id);
        }
    }
}
