//! Weighted random obstacle generation.
//!
//! A roll in `1..=100` picks the kind: 20% bats, 20% pterodactyls and 60%
//! ground obstacles, the latter drawn uniformly from the active theme's art.

use std::collections::HashMap;

use rand::Rng;

use crate::config::{
    ANIMATION_UPDATE_TIME, BAT_FRAME_COUNT, OBSTACLE_SCALE, PTERODACTYL_FRAME_COUNT,
};
use crate::error::{GameError, Result};
use crate::obstacle::{Obstacle, ObstacleKind};
use crate::resources::{BackgroundTheme, GroundObstacle, Resources, TextureId};

/// Ground obstacle art per theme.
pub fn theme_ground_set(theme: BackgroundTheme) -> Vec<GroundObstacle> {
    use GroundObstacle::*;
    match theme {
        BackgroundTheme::DesertDay => {
            vec![SmallCactus, BigCactus, Skulls, Skulls2, DesertRock, BigDesertRock]
        }
        BackgroundTheme::DesertNight => vec![
            SmallCactus,
            BigCactus,
            Skulls,
            Skulls2,
            NightDesertRock,
            BigNightDesertRock,
        ],
        BackgroundTheme::ForestDay => {
            vec![ForestRock, BigForestRock, SmallTree, BigTree, Log, Spikes]
        }
        BackgroundTheme::ForestNight => vec![
            ForestRock,
            BigForestRock,
            NightSmallTree,
            NightBigTree,
            NightLog,
            NightSpikes,
        ],
    }
}

/// Kind selected by a roll in `1..=100`.
pub fn kind_for_roll(roll: u32) -> ObstacleKind {
    match roll {
        1..=20 => ObstacleKind::Bat,
        21..=40 => ObstacleKind::Pterodactyl,
        _ => ObstacleKind::Static,
    }
}

pub struct ObstacleFactory<R: Rng> {
    rng: R,
    ground_sets: HashMap<BackgroundTheme, Vec<GroundObstacle>>,
    velocity: f32,
}

impl<R: Rng> ObstacleFactory<R> {
    /// A factory with the standard per-theme art; new obstacles move at
    /// `velocity` px/s.
    pub fn new(rng: R, velocity: f32) -> Self {
        let ground_sets = BackgroundTheme::ALL
            .into_iter()
            .map(|theme| (theme, theme_ground_set(theme)))
            .collect();
        Self {
            rng,
            ground_sets,
            velocity,
        }
    }

    /// Replace the ground art used for `theme`.
    pub fn set_ground_set(&mut self, theme: BackgroundTheme, set: Vec<GroundObstacle>) {
        self.ground_sets.insert(theme, set);
    }

    pub fn ground_set(&self, theme: BackgroundTheme) -> &[GroundObstacle] {
        self.ground_sets
            .get(&theme)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Roll for a kind and build an obstacle anchored at the ground point
    /// `(start_x, start_y)`.
    pub fn create_obstacle(
        &mut self,
        resources: &Resources,
        start_x: f32,
        start_y: f32,
        theme: BackgroundTheme,
    ) -> Result<Obstacle> {
        let roll = self.rng.gen_range(1..=100);
        self.create_for_roll(roll, resources, start_x, start_y, theme)
    }

    /// Build the obstacle a given roll selects. Ground obstacles still pick
    /// their art at random.
    pub fn create_for_roll(
        &mut self,
        roll: u32,
        resources: &Resources,
        start_x: f32,
        start_y: f32,
        theme: BackgroundTheme,
    ) -> Result<Obstacle> {
        let kind = kind_for_roll(roll);
        let (texture, frame_count) = match kind {
            ObstacleKind::Bat => (TextureId::Bat, BAT_FRAME_COUNT),
            ObstacleKind::Pterodactyl => (TextureId::Pterodactyl, PTERODACTYL_FRAME_COUNT),
            ObstacleKind::Static => {
                let set = self
                    .ground_sets
                    .get(&theme)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                if set.is_empty() {
                    log::error!("theme {:?} has no ground obstacles", theme);
                    return Err(GameError::EmptyObstacleSet(theme));
                }
                let index = self.rng.gen_range(0..set.len());
                let pick = set[index];
                (TextureId::Obstacle(pick), 1)
            }
        };

        log::trace!("roll {} -> {:?} at x={:.0}", roll, kind, start_x);
        Ok(Obstacle::spawn(
            kind,
            resources.texture(texture),
            start_x,
            start_y,
            OBSTACLE_SCALE,
            frame_count,
            ANIMATION_UPDATE_TIME,
            self.velocity,
        ))
    }
}
