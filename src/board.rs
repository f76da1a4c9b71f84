//! The playfield: player, obstacles and the running-dust effect.
//!
//! Obstacles are kept in spawn order, so the back of the list is always the
//! newest (rightmost) one. A new obstacle is spawned once the newest one has
//! scrolled a random gap away from the spot it was spawned at, which keeps
//! obstacle density tied to distance travelled rather than frame rate.

use rand::Rng;

use crate::collision::obstacle_collision;
use crate::config::{
    GameConfig, SpawnConfig, ANIMATION_UPDATE_TIME, DEFAULT_DINO_FRAME_COUNT, DUST_FRAME_COUNT,
    DUST_SPAWN_INTERVAL, DUST_X_OFFSET, OBSTACLE_SCALE, PLAYER_SCALE,
};
use crate::error::Result;
use crate::factory::ObstacleFactory;
use crate::host::Canvas;
use crate::obstacle::Obstacle;
use crate::player::Player;
use crate::resources::{BackgroundTheme, Dino, Resources, TextureId};
use crate::sprite::{AnimatedSprite, Drawable};

pub struct Board<R: Rng> {
    pub player: Player,
    pub dust: AnimatedSprite,
    /// Oldest first.
    pub obstacles: Vec<Obstacle>,
    /// X the most recent obstacle was spawned at.
    pub last_obstacle_x: f32,
    /// Scroll distance required before the next spawn.
    pub next_gap: f32,
    pub theme: BackgroundTheme,
    pub dino_texture: TextureId,
    pub dino_frame_count: u32,
    pub dust_timer: f32,
    pub window_width: f32,
    pub window_height: f32,
    factory: ObstacleFactory<R>,
    rng: R,
    spawn: SpawnConfig,
    jump_requested: bool,
}

impl<R: Rng> Board<R> {
    /// `rng` drives the spawn gaps, `factory_rng` the obstacle choice.
    pub fn new(config: &GameConfig, rng: R, factory_rng: R) -> Self {
        Self {
            player: Player::new(&config.physics),
            dust: AnimatedSprite::one_shot(),
            obstacles: Vec::new(),
            last_obstacle_x: 0.0,
            next_gap: config.spawn.min_distance,
            theme: BackgroundTheme::DesertDay,
            dino_texture: TextureId::DinoRun(Dino::Green),
            dino_frame_count: DEFAULT_DINO_FRAME_COUNT,
            dust_timer: 0.0,
            window_width: config.window.width,
            window_height: config.window.height,
            factory: ObstacleFactory::new(factory_rng, config.spawn.obstacle_velocity),
            rng,
            spawn: config.spawn.clone(),
            jump_requested: false,
        }
    }

    pub fn set_character(&mut self, texture: TextureId, frame_count: u32) {
        self.dino_texture = texture;
        self.dino_frame_count = frame_count;
    }

    pub fn set_theme(&mut self, theme: BackgroundTheme) {
        self.theme = theme;
    }

    /// Start a fresh run: player centred on the ground, dust at its feet,
    /// one obstacle queued off the right edge.
    pub fn init(&mut self, resources: &Resources, window_width: f32, window_height: f32) -> Result<()> {
        self.window_width = window_width;
        self.window_height = window_height;

        let texture = resources.texture(self.dino_texture);
        let player_width = texture.width as f32 / self.dino_frame_count.max(1) as f32 * PLAYER_SCALE;
        let start_x = (window_width - player_width) / 2.0;
        self.player.init(
            texture,
            start_x,
            window_height,
            PLAYER_SCALE,
            self.dino_frame_count,
            ANIMATION_UPDATE_TIME,
        );

        self.place_dust(resources);
        self.dust_timer = 0.0;
        self.jump_requested = false;

        self.last_obstacle_x = window_width;
        self.obstacles.clear();
        self.spawn_obstacle(resources)?;
        log::info!(
            "board ready: {:.0}x{:.0}, theme {:?}, character {:?}",
            window_width,
            window_height,
            self.theme,
            self.dino_texture
        );
        Ok(())
    }

    /// Queue a jump for the next [`update`](Self::update).
    pub fn request_jump(&mut self) {
        self.jump_requested = true;
    }

    pub fn update(&mut self, resources: &Resources, dt: f32, window_height: f32) -> Result<()> {
        self.window_height = window_height;
        let jump = std::mem::take(&mut self.jump_requested);
        self.player.update(dt, window_height, jump);

        for obstacle in &mut self.obstacles {
            obstacle.update(dt);
        }
        let cull_x = self.spawn.cull_x;
        self.obstacles.retain(|o| o.position_x() >= cull_x);

        let due = match self.obstacles.last() {
            None => true,
            Some(newest) => newest.position_x() <= self.last_obstacle_x - self.next_gap,
        };
        if due {
            self.spawn_obstacle(resources)?;
        }

        self.dust.update(dt);
        if self.player.is_on_ground() {
            self.dust_timer += dt;
            if self.dust_timer >= DUST_SPAWN_INTERVAL {
                self.spawn_dust(resources);
                self.dust_timer = 0.0;
            }
        }
        Ok(())
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, resources: &Resources) {
        for obstacle in &self.obstacles {
            obstacle.draw(canvas, resources);
        }
        self.player.draw(canvas, resources);
        self.dust.draw(canvas, resources);
    }

    /// True as soon as any obstacle touches the player.
    pub fn check_loss(&self) -> bool {
        self.obstacles
            .iter()
            .any(|obstacle| obstacle_collision(obstacle, &self.player))
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    fn ground_level(&self) -> f32 {
        self.player.ground_level_for(self.window_height)
    }

    fn random_distance(&mut self) -> f32 {
        let (min, max) = (self.spawn.min_distance, self.spawn.max_distance);
        if max > min {
            self.rng.gen_range(min..=max)
        } else {
            min
        }
    }

    fn spawn_obstacle(&mut self, resources: &Resources) -> Result<()> {
        let start_x = self.last_obstacle_x + self.random_distance();
        let start_y = self.ground_level();
        let obstacle = self
            .factory
            .create_obstacle(resources, start_x, start_y, self.theme)?;
        log::debug!("spawned {:?} at x={:.0}", obstacle.kind, start_x);
        self.obstacles.push(obstacle);
        self.last_obstacle_x = start_x;
        self.next_gap = self.random_distance();
        Ok(())
    }

    /// Re-arm the dust puff if the previous one has finished.
    fn spawn_dust(&mut self, resources: &Resources) {
        if !self.dust.active {
            self.place_dust(resources);
        }
    }

    fn place_dust(&mut self, resources: &Resources) {
        let texture = resources.texture(TextureId::Dust);
        let x = self.player.position().x + DUST_X_OFFSET;
        let y = self.ground_level() - texture.height as f32 * OBSTACLE_SCALE;
        self.dust.init(
            texture,
            x,
            y,
            OBSTACLE_SCALE,
            DUST_FRAME_COUNT,
            ANIMATION_UPDATE_TIME,
        );
    }
}
