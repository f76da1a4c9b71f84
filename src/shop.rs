//! Character selection.

use crate::config::ANIMATION_UPDATE_TIME;
use crate::error::Result;
use crate::geometry::{Rect, Tint};
use crate::host::{draw_full, draw_text_centered, Canvas, Host, Input, Key};
use crate::resources::{Dino, Resources, TextureId};
use crate::sprite::AnimatedSprite;

/// Frames in every idle sheet.
pub const IDLE_FRAME_COUNT: u32 = 4;
/// On-screen scale of the idle previews at the reference resolution.
pub const BASE_SCALE: f32 = 6.0;

#[derive(Clone, Debug)]
pub struct Shop {
    pub selected: usize,
    /// Shared idle animation clock for the previews.
    pub idle: AnimatedSprite,
    /// Screen size the layout was designed against.
    pub reference_size: (f32, f32),
}

impl Shop {
    pub fn new(resources: &Resources, reference_width: f32, reference_height: f32) -> Self {
        let mut idle = AnimatedSprite::looping();
        idle.init(
            resources.texture(TextureId::DinoIdle(Dino::Green)),
            0.0,
            0.0,
            BASE_SCALE,
            IDLE_FRAME_COUNT,
            ANIMATION_UPDATE_TIME * 2.0,
        );
        Self {
            selected: 0,
            idle,
            reference_size: (reference_width, reference_height),
        }
    }

    pub fn selected_dino(&self) -> Dino {
        Dino::ALL[self.selected.min(Dino::ALL.len() - 1)]
    }

    pub fn selected_run_texture(&self) -> TextureId {
        TextureId::DinoRun(self.selected_dino())
    }

    pub fn selected_frame_count(&self) -> u32 {
        self.selected_dino().run_frame_count()
    }

    /// Clickable column of each character.
    pub fn slots(&self, screen_width: f32, screen_height: f32) -> [Rect; 4] {
        let count = Dino::ALL.len() as f32;
        let height_scale = screen_height / self.reference_size.1;
        let column = screen_width / count;
        std::array::from_fn(|i| {
            Rect::new(
                i as f32 * column,
                screen_height * 0.65 - 110.0 * height_scale,
                column,
                220.0 * height_scale,
            )
        })
    }

    /// Apply one frame of input. Returns `false` once the player leaves.
    pub fn handle_input<I: Input + ?Sized>(&mut self, input: &I, screen_width: f32, screen_height: f32) -> bool {
        if input.is_key_pressed(Key::Escape) {
            return false;
        }
        let count = Dino::ALL.len();
        if input.is_key_pressed(Key::Left) {
            self.selected = (self.selected + count - 1) % count;
        }
        if input.is_key_pressed(Key::Right) {
            self.selected = (self.selected + 1) % count;
        }
        if input.is_mouse_pressed() {
            let mouse = input.mouse_position();
            if let Some(i) = self
                .slots(screen_width, screen_height)
                .iter()
                .position(|slot| slot.contains(mouse))
            {
                self.selected = i;
            }
        }
        true
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, resources: &Resources) {
        let screen = canvas.screen_size();
        let width_scale = screen.x / self.reference_size.0;
        let height_scale = screen.y / self.reference_size.1;
        let scale = BASE_SCALE * (width_scale + height_scale) / 2.0;

        draw_full(
            canvas,
            resources.texture(TextureId::ShopBackground),
            Rect::new(0.0, 0.0, screen.x, screen.y),
            Tint::WHITE,
        );

        for (i, (dino, slot)) in Dino::ALL
            .into_iter()
            .zip(self.slots(screen.x, screen.y))
            .enumerate()
        {
            let texture = resources.texture(TextureId::DinoIdle(dino));
            let frame_width = texture.width as f32 / IDLE_FRAME_COUNT as f32;
            let frame_height = texture.height as f32;
            let source = Rect::new(self.idle.frame as f32 * frame_width, 0.0, frame_width, frame_height);
            let dest = Rect::new(
                slot.x + (slot.width - frame_width * scale) / 2.0,
                screen.y * 0.85 - frame_height * scale,
                frame_width * scale,
                frame_height * scale,
            );
            canvas.draw_texture(texture, source, dest, Tint::WHITE);

            if i == self.selected {
                let marker = format!("[ {:?} ]", dino);
                draw_text_centered(
                    canvas,
                    &marker,
                    slot.x + slot.width / 2.0,
                    slot.y + 50.0 * height_scale,
                    20.0,
                    Tint::GREEN,
                );
            }
        }

        draw_text_centered(
            canvas,
            "Left/Right or click to choose - ESC to return",
            screen.x / 2.0,
            screen.y - 30.0,
            20.0,
            Tint::BLACK,
        );
    }

    /// Run the shop until the player presses Escape or closes the game.
    pub fn show<H: Host + ?Sized>(&mut self, host: &mut H, resources: &Resources) -> Result<()> {
        loop {
            host.begin_frame()?;
            if host.should_close() {
                return Ok(());
            }
            self.idle.update(host.frame_time());

            let screen = host.screen_size();
            if !self.handle_input(&*host, screen.x, screen.y) {
                log::info!("character selected: {:?}", self.selected_dino());
                return Ok(());
            }

            self.draw(&mut *host, resources);
            host.end_frame()?;
        }
    }
}
