//! Obstacles: one sprite-backed struct, tagged by kind.

use crate::collision::Collidable;
use crate::config::{BAT_Y_OFFSET, PTERODACTYL_Y_OFFSET};
use crate::geometry::{Rect, Tint};
use crate::host::Canvas;
use crate::resources::{Resources, Texture};
use crate::sprite::{AnimatedSprite, Drawable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Flies low, just above the player's head when standing.
    Bat,
    /// Flies high, only dangerous mid-jump.
    Pterodactyl,
    /// Sits on the ground; a single frame, no animation.
    Static,
}

impl ObstacleKind {
    /// Where the sprite's top edge goes relative to the ground-anchored
    /// start y.
    fn y_offset(self, texture: &Texture, scale: f32) -> f32 {
        match self {
            ObstacleKind::Bat => BAT_Y_OFFSET,
            ObstacleKind::Pterodactyl => PTERODACTYL_Y_OFFSET,
            ObstacleKind::Static => -(texture.height as f32 * scale),
        }
    }

    pub fn is_animated(self) -> bool {
        self != ObstacleKind::Static
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub sprite: AnimatedSprite,
    /// Horizontal speed in px/s, negative while the world scrolls left.
    pub velocity: f32,
}

impl Obstacle {
    /// Build an obstacle of `kind` whose ground anchor is `(start_x, start_y)`.
    /// Static obstacles ignore `frame_count` and always use a single frame.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        kind: ObstacleKind,
        texture: &Texture,
        start_x: f32,
        start_y: f32,
        scale: f32,
        frame_count: u32,
        frame_interval: f32,
        velocity: f32,
    ) -> Self {
        let mut obstacle = Self {
            kind,
            sprite: AnimatedSprite::looping(),
            velocity,
        };
        obstacle.init(texture, start_x, start_y, scale, frame_count, frame_interval);
        obstacle
    }

    pub fn init(
        &mut self,
        texture: &Texture,
        start_x: f32,
        start_y: f32,
        scale: f32,
        frame_count: u32,
        frame_interval: f32,
    ) {
        let frames = if self.kind.is_animated() { frame_count } else { 1 };
        let y = start_y + self.kind.y_offset(texture, scale);
        self.sprite.init(texture, start_x, y, scale, frames, frame_interval);
    }

    pub fn update(&mut self, dt: f32) {
        if self.kind.is_animated() {
            self.sprite.update(dt);
        }
        self.sprite.position.x += self.velocity * dt;
    }

    pub fn position_x(&self) -> f32 {
        self.sprite.position.x
    }
}

impl Drawable for Obstacle {
    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, resources: &Resources) {
        match self.kind {
            ObstacleKind::Bat | ObstacleKind::Pterodactyl => self.sprite.draw(canvas, resources),
            ObstacleKind::Static => {
                let s = &self.sprite;
                let source = Rect::new(0.0, 0.0, s.frame_width, s.frame_height);
                canvas.draw_texture(resources.texture(s.texture), source, s.dest_rec(), Tint::WHITE);
            }
        }
    }
}

impl Collidable for Obstacle {
    fn collision_rec(&self) -> Rect {
        self.sprite.collision_rec()
    }
}
