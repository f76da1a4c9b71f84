//! The runner: double-jump physics clamped to the ground line.

use crate::collision::Collidable;
use crate::config::PhysicsConfig;
use crate::geometry::{Rect, Vec2};
use crate::host::Canvas;
use crate::resources::{Resources, Texture};
use crate::sprite::{AnimatedSprite, Drawable};

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub sprite: AnimatedSprite,
    /// Vertical speed in px/s, negative is up.
    pub velocity: f32,
    /// Y of the ground line; the sprite's bottom rests on it.
    pub ground_level: f32,
    pub jump_count: u32,
    pub in_air: bool,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub max_jumps: u32,
    /// Distance from the window bottom to the ground line.
    pub ground_offset: f32,
}

impl Player {
    pub fn new(physics: &PhysicsConfig) -> Self {
        Self {
            sprite: AnimatedSprite::looping(),
            velocity: 0.0,
            ground_level: 0.0,
            jump_count: 0,
            in_air: false,
            gravity: physics.gravity,
            jump_impulse: physics.jump_impulse,
            max_jumps: physics.max_jumps,
            ground_offset: physics.ground_offset,
        }
    }

    /// Place the player standing on the ground of a window `window_height`
    /// tall.
    pub fn init(
        &mut self,
        texture: &Texture,
        start_x: f32,
        window_height: f32,
        scale: f32,
        frame_count: u32,
        frame_interval: f32,
    ) {
        if texture.width == 0 || texture.height == 0 {
            log::warn!("player texture {:?} has no size", texture.id);
        }
        self.sprite.init(texture, start_x, window_height, scale, frame_count, frame_interval);
        self.ground_level = self.ground_level_for(window_height);
        self.sprite.position.y = self.ground_y();
        self.velocity = 0.0;
        self.jump_count = 0;
        self.in_air = false;
    }

    /// Y of the ground line in a window `window_height` tall.
    pub fn ground_level_for(&self, window_height: f32) -> f32 {
        window_height - self.ground_offset
    }

    /// Y the sprite's top edge has while standing.
    pub fn ground_y(&self) -> f32 {
        self.ground_level - self.sprite.scaled_size().y
    }

    pub fn is_on_ground(&self) -> bool {
        self.sprite.position.y >= self.ground_y()
    }

    pub fn can_jump(&self) -> bool {
        self.jump_count < self.max_jumps
    }

    /// Advance one frame. `jump` is the jump input for this frame.
    pub fn update(&mut self, dt: f32, window_height: f32, jump: bool) {
        self.ground_level = self.ground_level_for(window_height);

        if self.is_on_ground() {
            self.land();
        } else {
            self.velocity += self.gravity * dt;
            self.in_air = true;
        }

        if jump && self.can_jump() {
            self.velocity += self.jump_impulse;
            self.jump_count += 1;
            self.in_air = true;
        }

        self.sprite.position.y += self.velocity * dt;
        if self.sprite.position.y > self.ground_y() {
            self.land();
        }

        if !self.in_air {
            self.sprite.update_animation(dt);
        }
    }

    fn land(&mut self) {
        self.sprite.position.y = self.ground_y();
        self.velocity = 0.0;
        self.in_air = false;
        self.jump_count = 0;
    }

    pub fn position(&self) -> Vec2 {
        self.sprite.position
    }
}

impl Drawable for Player {
    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, resources: &Resources) {
        self.sprite.draw(canvas, resources);
    }
}

impl Collidable for Player {
    fn collision_rec(&self) -> Rect {
        self.sprite.collision_rec()
    }
}
