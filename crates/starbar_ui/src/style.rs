//! Colors used by the star bar.

use crate::tier::Tier;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from a packed 0xAARRGGBB value.
    #[must_use]
    pub fn argb(packed: u32) -> Self {
        let [a, r, g, b] = packed.to_be_bytes().map(|channel| f32::from(channel) / 255.0);
        Self::rgba(r, g, b, a)
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Colors for the bar itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    /// Fill behind the stars.
    pub background: Color,
    /// Label color.
    pub label: Color,
    /// Reference colors per tier, for hosts that tint instead of using sprites.
    pub tiers: [Color; 3],
}

impl BarStyle {
    /// Reference color for a tier.
    #[must_use]
    pub fn tier_color(&self, tier: Tier) -> Color {
        self.tiers[tier.index()]
    }
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            // Half-transparent black
            background: Color::argb(0x8000_0000),
            label: Color::WHITE,
            tiers: [
                Color::rgba(0.9, 0.2, 0.2, 1.0),
                Color::rgba(1.0, 0.6, 0.1, 1.0),
                Color::rgba(0.2, 0.8, 0.3, 1.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb() {
        let color = Color::argb(0x8000_0000);
        assert!((color.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.r, 0.0);

        let red = Color::argb(0xFFFF_0000);
        assert_eq!(red.to_array(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_tier_colors_differ() {
        let style = BarStyle::default();
        assert_ne!(style.tier_color(Tier::Red), style.tier_color(Tier::Green));
    }
}
