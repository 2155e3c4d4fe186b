//! Pack catalog entries.

use serde::{Deserialize, Serialize};

use super::rarity::Rarity;

/// Unique identifier for a pack (e.g. `"elite-collection"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackId(pub String);

impl PackId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A purchasable pack.
///
/// The pack's rarity decides the guarantee applied to its draw, see
/// [`Rarity::guarantee`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    pub id: PackId,

    pub name: String,

    /// Price in USD.
    pub price: f64,

    pub rarity: Rarity,

    /// Pack artwork reference.
    #[serde(default)]
    pub image_ref: String,

    /// 3D model reference used by the opening animation.
    #[serde(default)]
    pub model_ref: String,

    #[serde(default)]
    pub description: String,
}

impl Pack {
    /// Create a pack with the required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, rarity: Rarity) -> Self {
        Self {
            id: PackId::new(id),
            name: name.into(),
            price,
            rarity,
            image_ref: String::new(),
            model_ref: String::new(),
            description: String::new(),
        }
    }

    /// Set artwork and model references (builder pattern).
    #[must_use]
    pub fn with_media(mut self, image_ref: impl Into<String>, model_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self.model_ref = model_ref.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Human-readable guarantee line, e.g. "1+ Legendary Guaranteed".
    #[must_use]
    pub fn guarantee_text(&self) -> Option<String> {
        self.rarity.guarantee().map(|min| {
            let label = min.label();
            let mut chars = label.chars();
            let title: String = chars
                .next()
                .into_iter()
                .chain(chars.flat_map(char::to_lowercase))
                .collect();
            format!("1+ {title} Guaranteed")
        })
    }
}
