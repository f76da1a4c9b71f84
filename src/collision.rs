//! Rectangle-overlap collision between the player and obstacles.

use crate::geometry::Rect;
use crate::obstacle::Obstacle;
use crate::player::Player;

pub trait Collidable {
    /// World-space bounding box.
    fn collision_rec(&self) -> Rect;
}

/// True when the two bounding boxes overlap.
pub fn collides<A: Collidable + ?Sized, B: Collidable + ?Sized>(a: &A, b: &B) -> bool {
    a.collision_rec().intersects(&b.collision_rec())
}

pub fn obstacle_collision(obstacle: &Obstacle, player: &Player) -> bool {
    collides(obstacle, player)
}
