//! Player cards - static catalog data.
//!
//! A `Card` is an immutable entry in the mock card pool. Drawing a card
//! clones it into the session; nothing ever mutates a catalog card.

use serde::{Deserialize, Serialize};

use super::rarity::Rarity;

/// Unique identifier for a card in the pool.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Per-game averages printed on a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardStats {
    pub points: f32,
    pub assists: f32,
    pub rebounds: f32,
}

impl CardStats {
    #[must_use]
    pub const fn new(points: f32, assists: f32, rebounds: f32) -> Self {
        Self {
            points,
            assists,
            rebounds,
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use pack_flow::cards::{Card, CardStats, Rarity};
///
/// let card = Card::new("1", "LeBron James", Rarity::Legendary)
///     .with_team("LAL", "F")
///     .with_stats(CardStats::new(27.1, 7.4, 7.5));
///
/// assert_eq!(card.team, "LAL");
/// assert!(card.meets(Rarity::Rare));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,

    pub player_name: String,

    /// Team abbreviation (e.g. "LAL").
    #[serde(default)]
    pub team: String,

    /// Position abbreviation (e.g. "F", "G").
    #[serde(default)]
    pub position: String,

    pub rarity: Rarity,

    /// Headshot image reference.
    #[serde(default)]
    pub image_ref: String,

    /// Highlight video reference.
    #[serde(default)]
    pub video_ref: String,

    #[serde(default)]
    pub stats: CardStats,
}

impl Card {
    /// Create a card with the required fields; the rest start empty.
    #[must_use]
    pub fn new(id: impl Into<String>, player_name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id: CardId::new(id),
            player_name: player_name.into(),
            team: String::new(),
            position: String::new(),
            rarity,
            image_ref: String::new(),
            video_ref: String::new(),
            stats: CardStats::default(),
        }
    }

    /// Set team and position (builder pattern).
    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>, position: impl Into<String>) -> Self {
        self.team = team.into();
        self.position = position.into();
        self
    }

    /// Set image and video references.
    #[must_use]
    pub fn with_media(mut self, image_ref: impl Into<String>, video_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self.video_ref = video_ref.into();
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: CardStats) -> Self {
        self.stats = stats;
        self
    }

    /// Whether this card is at least `minimum` rarity.
    #[must_use]
    pub fn meets(&self, minimum: Rarity) -> bool {
        self.rarity >= minimum
    }
}
