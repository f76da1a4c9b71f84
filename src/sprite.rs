//! Frame-timer animation shared by every sprite in the game.

use crate::collision::Collidable;
use crate::geometry::{Rect, Tint, Vec2};
use crate::host::Canvas;
use crate::resources::{Resources, Texture, TextureId};

/// What happens when the last frame has been shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Wrap back to frame 0.
    Loop,
    /// Stay on the last frame and deactivate (dust puffs).
    OneShot,
}

/// Anything that can put itself on a [`Canvas`].
pub trait Drawable {
    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, resources: &Resources);
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedSprite {
    pub texture: TextureId,
    /// Current frame, always in `0..frame_count`.
    pub frame: u32,
    pub frame_count: u32,
    /// Time accumulated since the last frame advance.
    pub running_time: f32,
    /// Seconds per frame.
    pub update_time: f32,
    pub position: Vec2,
    pub scale: f32,
    pub active: bool,
    /// Width of a single frame in texture pixels.
    pub frame_width: f32,
    pub frame_height: f32,
    pub playback: Playback,
}

impl AnimatedSprite {
    /// An inactive sprite that draws nothing until [`init`](Self::init).
    pub fn new(playback: Playback) -> Self {
        Self {
            texture: TextureId::Dust,
            frame: 0,
            frame_count: 1,
            running_time: 0.0,
            update_time: 0.0,
            position: Vec2::default(),
            scale: 1.0,
            active: false,
            frame_width: 0.0,
            frame_height: 0.0,
            playback,
        }
    }

    pub fn looping() -> Self {
        Self::new(Playback::Loop)
    }

    pub fn one_shot() -> Self {
        Self::new(Playback::OneShot)
    }

    /// Reset all animation state onto `texture`, sliced horizontally into
    /// `frame_count` frames, and mark the sprite active.
    pub fn init(
        &mut self,
        texture: &Texture,
        x: f32,
        y: f32,
        scale: f32,
        frame_count: u32,
        frame_interval: f32,
    ) {
        let frame_count = frame_count.max(1);
        self.texture = texture.id;
        self.frame_count = frame_count;
        self.frame_width = texture.width as f32 / frame_count as f32;
        self.frame_height = texture.height as f32;
        self.position = Vec2::new(x, y);
        self.scale = scale;
        self.frame = 0;
        self.running_time = 0.0;
        self.update_time = frame_interval;
        self.active = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.update_animation(dt);
    }

    /// Advance the frame timer regardless of the active flag.
    pub fn update_animation(&mut self, dt: f32) {
        self.running_time += dt;
        if self.running_time < self.update_time {
            return;
        }
        self.running_time = 0.0;
        self.frame += 1;
        if self.frame >= self.frame_count {
            match self.playback {
                Playback::Loop => self.frame = 0,
                Playback::OneShot => {
                    self.frame = self.frame_count - 1;
                    self.active = false;
                }
            }
        }
    }

    /// On-screen size after scaling.
    pub fn scaled_size(&self) -> Vec2 {
        Vec2::new(self.frame_width * self.scale, self.frame_height * self.scale)
    }

    /// Texture region of the current frame.
    pub fn source_rec(&self) -> Rect {
        Rect::new(
            self.frame as f32 * self.frame_width,
            0.0,
            self.frame_width,
            self.frame_height,
        )
    }

    pub fn dest_rec(&self) -> Rect {
        let size = self.scaled_size();
        Rect::new(self.position.x, self.position.y, size.x, size.y)
    }

    /// Opacity. One-shot sprites fade out over their final frame.
    pub fn alpha(&self) -> f32 {
        match self.playback {
            Playback::OneShot if self.frame + 1 >= self.frame_count && self.update_time > 0.0 => {
                1.0 - self.running_time / self.update_time
            }
            _ => 1.0,
        }
    }
}

impl Drawable for AnimatedSprite {
    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, resources: &Resources) {
        if !self.active {
            return;
        }
        let tint = Tint::WHITE.with_alpha(self.alpha());
        canvas.draw_texture(
            resources.texture(self.texture),
            self.source_rec(),
            self.dest_rec(),
            tint,
        );
    }
}

impl Collidable for AnimatedSprite {
    fn collision_rec(&self) -> Rect {
        self.dest_rec()
    }
}
