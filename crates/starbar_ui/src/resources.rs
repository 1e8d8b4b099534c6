//! Host-provided assets.
//!
//! The star bar never loads images or fonts. It asks the host for sprite
//! metrics and the label font size, caches them, and asks again after
//! [`crate::StarBar::configuration_changed`].

use crate::tier::Tier;

/// Which sprite to draw for a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    /// Grey star outside the selection.
    Neutral,
    /// Colored star at rest size.
    Small(Tier),
    /// Colored star with the pressed highlight.
    Large(Tier),
}

impl SpriteKey {
    /// Every sprite the bar can request.
    pub const ALL: [Self; 7] = [
        Self::Neutral,
        Self::Small(Tier::Red),
        Self::Small(Tier::Yellow),
        Self::Small(Tier::Green),
        Self::Large(Tier::Red),
        Self::Large(Tier::Yellow),
        Self::Large(Tier::Green),
    ];

    /// Dense index into [`SpriteKey::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Neutral => 0,
            Self::Small(tier) => 1 + tier.index(),
            Self::Large(tier) => 4 + tier.index(),
        }
    }
}

/// Intrinsic size of a sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpriteMetrics {
    /// Texture ID known to the host renderer.
    pub texture_id: u32,
    /// Intrinsic width in pixels.
    pub width: f32,
    /// Intrinsic height in pixels.
    pub height: f32,
}

/// Source of sprites and font metrics.
pub trait StarResources {
    /// Metrics for one sprite.
    fn sprite(&self, key: SpriteKey) -> SpriteMetrics;

    /// Font size for star labels at base size.
    fn label_font_size(&self) -> f32;
}

/// Resource-derived values cached by the bar.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StarAssets {
    sprites: [SpriteMetrics; 7],
    label_font_size: f32,
}

impl StarAssets {
    /// Queries every sprite and the font size.
    #[must_use]
    pub fn load(resources: &dyn StarResources) -> Self {
        Self {
            sprites: SpriteKey::ALL.map(|key| resources.sprite(key)),
            label_font_size: resources.label_font_size(),
        }
    }

    /// Cached metrics for a sprite.
    #[must_use]
    pub fn sprite(&self, key: SpriteKey) -> SpriteMetrics {
        self.sprites[key.index()]
    }

    /// Cached label font size.
    #[must_use]
    pub fn label_font_size(&self) -> f32 {
        self.label_font_size
    }
}
