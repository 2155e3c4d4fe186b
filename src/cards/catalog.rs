//! Pack catalog and card pool.
//!
//! The `Catalog` is built once at startup and is read-only afterwards.
//! Order matters: packs are listed in catalog order and the card pool
//! order is the input to the draw shuffle.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, CardStats};
use super::pack::{Pack, PackId};
use super::rarity::Rarity;
use crate::core::{FlowError, FlowResult};

/// On-disk shape of a catalog file (JSON or TOML).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub packs: Vec<Pack>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Packs and the card pool, with id lookup.
///
/// ## Example
///
/// ```
/// use pack_flow::cards::{Card, Catalog, Pack, PackId, Rarity};
///
/// let catalog = Catalog::new(
///     vec![Pack::new("starter", "Starter", 9.99, Rarity::Common)],
///     vec![Card::new("1", "Rookie", Rarity::Common)],
/// )
/// .unwrap();
///
/// assert_eq!(catalog.pack(&PackId::new("starter")).unwrap().name, "Starter");
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    packs: Vec<Pack>,
    cards: Vec<Card>,
    pack_index: FxHashMap<PackId, usize>,
    card_index: FxHashMap<CardId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and an empty card pool.
    pub fn new(packs: Vec<Pack>, cards: Vec<Card>) -> FlowResult<Self> {
        if cards.is_empty() {
            return Err(FlowError::EmptyCardPool);
        }

        let mut pack_index = FxHashMap::default();
        for (i, pack) in packs.iter().enumerate() {
            if pack_index.insert(pack.id.clone(), i).is_some() {
                return Err(FlowError::DuplicateId(pack.id.to_string()));
            }
        }

        let mut card_index = FxHashMap::default();
        for (i, card) in cards.iter().enumerate() {
            if card_index.insert(card.id.clone(), i).is_some() {
                return Err(FlowError::DuplicateId(card.id.as_str().to_string()));
            }
        }

        tracing::debug!(packs = packs.len(), cards = cards.len(), "catalog built");

        Ok(Self {
            packs,
            cards,
            pack_index,
            card_index,
        })
    }

    /// The built-in mock catalog: two packs and five player cards.
    #[must_use]
    pub fn default_mock() -> Self {
        let packs = vec![
            Pack::new("freshman-gems", "Freshman Gems", 29.99, Rarity::Rare)
                .with_media("/media/pack-image-1.png", "/media/3D/card-pack-3D-1.glb")
                .with_description("Premium rookie cards with exclusive rookie moments and rising stars"),
            Pack::new("elite-collection", "Elite Series", 49.99, Rarity::Legendary)
                .with_media("/media/pack-image-2.png", "/media/3D/card-pack-3d-2.glb")
                .with_description("Championship moments from legendary players and All-Stars"),
        ];

        let cards = vec![
            Card::new("1", "LeBron James", Rarity::Legendary)
                .with_team("LAL", "F")
                .with_media("/media/player-headshot-1.png", "/media/portrait-video-1.mp4")
                .with_stats(CardStats::new(27.1, 7.4, 7.5)),
            Card::new("2", "Stephen Curry", Rarity::Rare)
                .with_team("GSW", "G")
                .with_media("/media/player-headshot-2.png", "/media/portrait-video-2.mp4")
                .with_stats(CardStats::new(29.5, 6.1, 5.1)),
            Card::new("3", "Giannis Antetokounmpo", Rarity::Rare)
                .with_team("MIL", "F")
                .with_media("/media/player-headshot-3.png", "/media/portrait-video-3.mp4")
                .with_stats(CardStats::new(31.1, 5.7, 11.8)),
            Card::new("4", "Luka Dončić", Rarity::Common)
                .with_team("DAL", "G")
                .with_media("/media/player-headshot-4.png", "/media/portrait-video-4.mp4")
                .with_stats(CardStats::new(32.4, 8.6, 8.0)),
            Card::new("5", "Jayson Tatum", Rarity::Common)
                .with_team("BOS", "F")
                .with_media("/media/player-headshot-1.png", "/media/portrait-video-1.mp4")
                .with_stats(CardStats::new(26.9, 4.9, 8.1)),
        ];

        match Self::new(packs, cards) {
            Ok(catalog) => catalog,
            Err(e) => unreachable!("built-in catalog is valid: {e}"),
        }
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(s: &str) -> FlowResult<Self> {
        let file: CatalogFile =
            serde_json::from_str(s).map_err(|e| FlowError::CatalogParse(e.to_string()))?;
        Self::new(file.packs, file.cards)
    }

    /// Parse a catalog from TOML (`[[packs]]` / `[[cards]]` tables).
    pub fn from_toml_str(s: &str) -> FlowResult<Self> {
        let file: CatalogFile =
            toml::from_str(s).map_err(|e| FlowError::CatalogParse(e.to_string()))?;
        Self::new(file.packs, file.cards)
    }

    /// Load a catalog file, choosing the format by extension (`.toml` or JSON).
    pub fn load(path: impl AsRef<Path>) -> FlowResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        tracing::info!(path = %path.display(), toml = is_toml, "loading catalog");

        if is_toml {
            Self::from_toml_str(&text)
        } else {
            Self::from_json_str(&text)
        }
    }

    /// Packs in catalog order.
    #[must_use]
    pub fn packs(&self) -> &[Pack] {
        &self.packs
    }

    /// The card pool in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn pack(&self, id: &PackId) -> Option<&Pack> {
        self.pack_index.get(id).map(|&i| &self.packs[i])
    }

    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.card_index.get(id).map(|&i| &self.cards[i])
    }

    /// Cards of exactly the given rarity, in pool order.
    pub fn cards_of(&self, rarity: Rarity) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.rarity == rarity)
    }

    /// Whether the pool can satisfy a pack's guarantee at all.
    #[must_use]
    pub fn can_guarantee(&self, pack: &Pack) -> bool {
        match pack.rarity.guarantee() {
            Some(min) => self.cards.iter().any(|c| c.meets(min)),
            None => true,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_mock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mock() {
        let catalog = Catalog::default_mock();

        assert_eq!(catalog.packs().len(), 2);
        assert_eq!(catalog.cards().len(), 5);
        assert_eq!(catalog.cards_of(Rarity::Legendary).count(), 1);
        assert_eq!(catalog.cards_of(Rarity::Rare).count(), 2);
        assert_eq!(catalog.cards_of(Rarity::Common).count(), 2);

        let elite = catalog.pack(&PackId::new("elite-collection")).unwrap();
        assert_eq!(elite.rarity, Rarity::Legendary);
        assert!(catalog.can_guarantee(elite));

        let lebron = catalog.card(&CardId::new("1")).unwrap();
        assert_eq!(lebron.player_name, "LeBron James");
    }

    #[test]
    fn test_lookup_missing() {
        let catalog = Catalog::default_mock();
        assert!(catalog.pack(&PackId::new("missing")).is_none());
        assert!(catalog.card(&CardId::new("99")).is_none());
    }

    #[test]
    fn test_empty_pool_rejected() {
        let result = Catalog::new(vec![Pack::new("p", "P", 1.0, Rarity::Common)], vec![]);
        assert!(matches!(result, Err(FlowError::EmptyCardPool)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let cards = vec![
            Card::new("1", "A", Rarity::Common),
            Card::new("1", "B", Rarity::Rare),
        ];
        let result = Catalog::new(vec![], cards);
        assert!(matches!(result, Err(FlowError::DuplicateId(id)) if id == "1"));

        let packs = vec![
            Pack::new("p", "P", 1.0, Rarity::Common),
            Pack::new("p", "Q", 2.0, Rarity::Rare),
        ];
        let result = Catalog::new(packs, vec![Card::new("1", "A", Rarity::Common)]);
        assert!(matches!(result, Err(FlowError::DuplicateId(id)) if id == "p"));
    }

    #[test]
    fn test_can_guarantee_without_qualifying_cards() {
        let catalog = Catalog::new(vec![], vec![Card::new("1", "A", Rarity::Common)]).unwrap();
        let legendary = Pack::new("l", "L", 1.0, Rarity::Legendary);
        let common = Pack::new("c", "C", 1.0, Rarity::Common);

        assert!(!catalog.can_guarantee(&legendary));
        assert!(catalog.can_guarantee(&common));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "packs": [{"id": "p1", "name": "Pack", "price": 5.0, "rarity": "rare"}],
            "cards": [
                {"id": "c1", "playerName": "One", "rarity": "common"},
                {"id": "c2", "playerName": "Two", "rarity": "rare",
                 "stats": {"points": 10.0, "assists": 2.0, "rebounds": 3.5}}
            ]
        }"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.packs()[0].price, 5.0);
        assert_eq!(catalog.card(&CardId::new("c2")).unwrap().stats.rebounds, 3.5);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
            [[packs]]
            id = "p1"
            name = "Pack"
            price = 5.0
            rarity = "legendary"

            [[cards]]
            id = "c1"
            playerName = "One"
            rarity = "legendary"
        "#;

        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.packs()[0].rarity, Rarity::Legendary);
        assert_eq!(catalog.cards().len(), 1);
    }

    #[test]
    fn test_parse_error() {
        let result = Catalog::from_json_str("{not json");
        assert!(matches!(result, Err(FlowError::CatalogParse(_))));
    }
}
