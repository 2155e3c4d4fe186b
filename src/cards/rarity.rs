//! Card and pack rarity.

use serde::{Deserialize, Serialize};

/// Rarity tier shared by cards and packs.
///
/// Ordered `Common < Rare < Legendary`, so "rare or better" is simply
/// `rarity >= Rarity::Rare`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    /// All tiers, lowest first.
    pub const ALL: [Rarity; 3] = [Rarity::Common, Rarity::Rare, Rarity::Legendary];

    /// Minimum card rarity a pack of this rarity guarantees in its draw.
    ///
    /// Common packs guarantee nothing.
    #[must_use]
    pub const fn guarantee(self) -> Option<Rarity> {
        match self {
            Rarity::Legendary => Some(Rarity::Legendary),
            Rarity::Rare => Some(Rarity::Rare),
            Rarity::Common => None,
        }
    }

    /// Collection value of a card of this rarity, in USD.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Rarity::Legendary => 100,
            Rarity::Rare => 50,
            Rarity::Common => 25,
        }
    }

    /// Star rating out of five.
    #[must_use]
    pub const fn stars(self) -> u8 {
        match self {
            Rarity::Legendary => 5,
            Rarity::Rare => 3,
            Rarity::Common => 1,
        }
    }

    /// Upper-case badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rarity::Legendary => "LEGENDARY",
            Rarity::Rare => "RARE",
            Rarity::Common => "COMMON",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        };
        f.write_str(name)
    }
}
