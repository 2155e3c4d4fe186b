//! Catalog data: rarities, cards, packs and the catalog itself.
//!
//! ## Key Types
//!
//! - `Rarity`: Ordered tier shared by cards and packs
//! - `Card`: Immutable player card from the mock pool
//! - `Pack`: Purchasable pack; its rarity sets the draw guarantee
//! - `Catalog`: Pack list plus card pool, with id lookup

pub mod card;
pub mod catalog;
pub mod pack;
pub mod rarity;

pub use card::{Card, CardId, CardStats};
pub use catalog::{Catalog, CatalogFile};
pub use pack::{Pack, PackId};
pub use rarity::Rarity;
