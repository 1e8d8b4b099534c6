//! Star bar rendering.
//!
//! Turns a [`StarFrame`] snapshot into draw commands for the host renderer.
//! Nothing here touches the GPU; hosts that batch sprites can use
//! [`StarFrame::instances`] instead of the command list.

use crate::constants::{BACKGROUND_TOP_FRACTION, BASE_SIZE, ITEM_COUNT, LABELS, PRESSED_SPRITE_SCALE};
use crate::geometry::{ItemSlot, Point, Rect, Viewport};
use crate::resources::{SpriteKey, StarAssets};
use crate::style::{BarStyle, Color};
use crate::tier::RatingRanges;

/// A render command for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Sprite centered on a point.
    Sprite {
        /// Center position.
        center: Point,
        /// Which sprite.
        sprite: SpriteKey,
        /// Texture ID from the host's resources.
        texture_id: u32,
        /// Drawn width (intrinsic width times scale).
        width: f32,
        /// Drawn height (intrinsic height times scale).
        height: f32,
    },
    /// Star label centered on a point.
    Label {
        /// Text content.
        text: &'static str,
        /// Center position.
        center: Point,
        /// Font size.
        font_size: f32,
        /// Text color.
        color: Color,
    },
}

/// Per-star instance data for batched sprite rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarInstance {
    /// Center (x, y).
    pub center: [f32; 2],
    /// Scale applied to the sprite's intrinsic size.
    pub scale: f32,
    /// Host texture ID.
    pub texture_id: u32,
}

/// Chooses the sprite for star `index`.
///
/// Stars up to the slide position are colored by the tier of the slide
/// position; enlarged ones use the pressed variant.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sprite_for(index: usize, size: f32, slide_position: Option<f32>, ranges: &RatingRanges) -> SpriteKey {
    match slide_position {
        Some(position) if index as f32 <= position => {
            let tier = ranges.tier_for_position(position);
            if size > BASE_SIZE {
                SpriteKey::Large(tier)
            } else {
                SpriteKey::Small(tier)
            }
        }
        _ => SpriteKey::Neutral,
    }
}

/// Scale applied to a sprite's intrinsic size.
///
/// Pressed sprites carry extra highlight padding and are shrunk to match.
#[must_use]
pub fn sprite_scale(sprite: SpriteKey, size: f32) -> f32 {
    if size > BASE_SIZE && sprite != SpriteKey::Neutral {
        size * PRESSED_SPRITE_SCALE
    } else {
        BASE_SIZE
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct StarFrame<'a> {
    /// Bar dimensions.
    pub viewport: Viewport,
    /// Star placement.
    pub slots: &'a [ItemSlot; ITEM_COUNT],
    /// Animated sizes.
    pub sizes: &'a [f32; ITEM_COUNT],
    /// Slide position while sliding.
    pub slide_position: Option<f32>,
    /// Tier boundaries.
    pub ranges: &'a RatingRanges,
    /// Cached sprite metrics and font size.
    pub assets: &'a StarAssets,
    /// Colors.
    pub style: &'a BarStyle,
}

impl StarFrame<'_> {
    /// Area behind the stars. The top third stays transparent.
    #[must_use]
    pub fn background(&self) -> Rect {
        let top = self.viewport.height * BACKGROUND_TOP_FRACTION;
        Rect::new(0.0, top, self.viewport.width, self.viewport.height - top)
    }

    /// Sprite for each star, in order.
    pub fn sprites(&self) -> impl Iterator<Item = SpriteKey> + '_ {
        self.sizes
            .iter()
            .enumerate()
            .map(|(index, &size)| sprite_for(index, size, self.slide_position, self.ranges))
    }

    /// Appends the frame's commands: background, then each star and label.
    pub fn render(&self, commands: &mut Vec<RenderCommand>) {
        commands.push(RenderCommand::Rect {
            bounds: self.background(),
            color: self.style.background,
        });

        for (index, sprite) in self.sprites().enumerate() {
            let size = self.sizes[index];
            let center = self.slots[index].center;
            let metrics = self.assets.sprite(sprite);
            let scale = sprite_scale(sprite, size);

            commands.push(RenderCommand::Sprite {
                center,
                sprite,
                texture_id: metrics.texture_id,
                width: metrics.width * scale,
                height: metrics.height * scale,
            });
            commands.push(RenderCommand::Label {
                text: LABELS[index],
                center,
                font_size: self.assets.label_font_size() * size,
                color: self.style.label,
            });
        }
    }

    /// Instance data for every star.
    #[must_use]
    pub fn instances(&self) -> [StarInstance; ITEM_COUNT] {
        let mut instances = [StarInstance::default(); ITEM_COUNT];
        for ((instance, sprite), (slot, &size)) in instances
            .iter_mut()
            .zip(self.sprites())
            .zip(self.slots.iter().zip(self.sizes))
        {
            *instance = StarInstance {
                center: [slot.center.x, slot.center.y],
                scale: sprite_scale(sprite, size),
                texture_id: self.assets.sprite(sprite).texture_id,
            };
        }
        instances
    }
}
