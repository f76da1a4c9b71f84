//! Four-layer parallax scenery.

use crate::config::PARALLAX_SPEEDS;
use crate::geometry::{Rect, Tint};
use crate::host::{draw_full, Canvas};
use crate::resources::{BackgroundTheme, Layer, Resources, TextureId};

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxBackground {
    pub theme: BackgroundTheme,
    /// Horizontal offset of each layer, back to ground, in `(-width, 0]`.
    pub offsets: [f32; 4],
    pub speeds: [f32; 4],
}

impl ParallaxBackground {
    pub fn new(theme: BackgroundTheme) -> Self {
        Self {
            theme,
            offsets: [0.0; 4],
            speeds: PARALLAX_SPEEDS,
        }
    }

    /// Common scale for every layer: the window height over the average
    /// height of the three scenery layers.
    pub fn scale(&self, resources: &Resources, window_height: f32) -> f32 {
        let total: u32 = [Layer::Back, Layer::Middle, Layer::Front]
            .iter()
            .map(|&layer| resources.texture(TextureId::Background(self.theme, layer)).height)
            .sum();
        let average = total as f32 / 3.0;
        if average > 0.0 {
            window_height / average
        } else {
            1.0
        }
    }

    fn scaled_widths(&self, resources: &Resources, window_height: f32) -> [f32; 4] {
        let scale = self.scale(resources, window_height);
        Layer::ALL.map(|layer| {
            resources.texture(TextureId::Background(self.theme, layer)).width as f32 * scale
        })
    }

    /// Scroll every layer left by its own speed.
    pub fn update(&mut self, resources: &Resources, dt: f32, window_height: f32) {
        let widths = self.scaled_widths(resources, window_height);
        for ((offset, speed), width) in self.offsets.iter_mut().zip(self.speeds).zip(widths) {
            *offset -= speed * dt;
            if width > 0.0 {
                *offset %= width;
                if *offset > 0.0 {
                    *offset -= width;
                }
            }
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, resources: &Resources) {
        let screen = canvas.screen_size();
        let scale = self.scale(resources, screen.y);

        for (layer, offset) in Layer::ALL.into_iter().zip(self.offsets) {
            let texture = resources.texture(TextureId::Background(self.theme, layer));
            let width = texture.width as f32 * scale;
            let height = texture.height as f32 * scale;
            if width <= 0.0 {
                continue;
            }
            // The front layer hugs the bottom edge, the others hang from the top.
            let y = if layer == Layer::Front {
                screen.y - height
            } else {
                0.0
            };
            let copies = (screen.x / width) as usize + 2;
            for i in 0..copies {
                let dest = Rect::new(offset + i as f32 * width, y, width, height);
                draw_full(canvas, texture, dest, Tint::WHITE);
            }
        }
    }
}
