mod common;

use common::FakeHost;
use dino_rush::config::{ANIMATION_UPDATE_TIME, OBSTACLE_SCALE};
use dino_rush::factory::{kind_for_roll, theme_ground_set, ObstacleFactory};
use dino_rush::obstacle::{Obstacle, ObstacleKind};
use dino_rush::resources::{BackgroundTheme, GroundObstacle, Resources, TextureId};
use dino_rush::sprite::Drawable;
use dino_rush::GameError;

use rand::rngs::StdRng;
use rand::SeedableRng;

const GROUND: f32 = 655.0;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn factory() -> ObstacleFactory<StdRng> {
    ObstacleFactory::new(seeded_rng(), -200.0)
}

fn spawn(kind: ObstacleKind, texture: TextureId, frames: u32) -> Obstacle {
    let resources = Resources::load();
    Obstacle::spawn(
        kind,
        resources.texture(texture),
        1000.0,
        GROUND,
        OBSTACLE_SCALE,
        frames,
        ANIMATION_UPDATE_TIME,
        -200.0,
    )
}

// ── Obstacle ──────────────────────────────────────────────────────────────────

#[test]
fn flyers_sit_at_fixed_offsets_above_ground() {
    let bat = spawn(ObstacleKind::Bat, TextureId::Bat, 4);
    assert_eq!(bat.sprite.position.y, GROUND - 150.0);
    assert_eq!(bat.position_x(), 1000.0);

    let ptero = spawn(ObstacleKind::Pterodactyl, TextureId::Pterodactyl, 8);
    assert_eq!(ptero.sprite.position.y, GROUND - 260.0);
}

#[test]
fn static_obstacle_rests_on_ground() {
    // Small cactus art is 24 px tall
    let cactus = spawn(ObstacleKind::Static, TextureId::Obstacle(GroundObstacle::SmallCactus), 1);
    assert_eq!(cactus.sprite.position.y, GROUND - 24.0 * OBSTACLE_SCALE);
    assert_eq!(cactus.sprite.dest_rec().bottom(), GROUND);
}

#[test]
fn static_obstacle_always_has_one_frame() {
    let rock = spawn(ObstacleKind::Static, TextureId::Obstacle(GroundObstacle::DesertRock), 6);
    assert_eq!(rock.sprite.frame_count, 1);
}

#[test]
fn update_moves_by_velocity() {
    let mut bat = spawn(ObstacleKind::Bat, TextureId::Bat, 4);
    bat.update(0.5);
    assert_eq!(bat.position_x(), 900.0);
    assert_eq!(bat.sprite.frame, 1);

    let mut log = spawn(ObstacleKind::Static, TextureId::Obstacle(GroundObstacle::Log), 1);
    log.update(0.5);
    assert_eq!(log.position_x(), 900.0);
    assert_eq!(log.sprite.frame, 0);
}

#[test]
fn static_obstacle_draws_whole_texture() {
    let resources = Resources::load();
    let mut host = FakeHost::new();
    let mut tree = spawn(ObstacleKind::Static, TextureId::Obstacle(GroundObstacle::BigTree), 1);
    tree.sprite.frame = 3;
    tree.draw(&mut host, &resources);

    let texture = resources.texture(TextureId::Obstacle(GroundObstacle::BigTree));
    assert_eq!(host.draws.len(), 1);
    assert_eq!(host.draws[0].source.x, 0.0);
    assert_eq!(host.draws[0].source.width, texture.width as f32);
}

// ── Rolls ─────────────────────────────────────────────────────────────────────

#[test]
fn roll_tiers_are_twenty_twenty_sixty() {
    let mut counts = [0; 3];
    for roll in 1..=100 {
        match kind_for_roll(roll) {
            ObstacleKind::Bat => counts[0] += 1,
            ObstacleKind::Pterodactyl => counts[1] += 1,
            ObstacleKind::Static => counts[2] += 1,
        }
    }
    assert_eq!(counts, [20, 20, 60]);
}

#[test]
fn roll_boundaries() {
    assert_eq!(kind_for_roll(1), ObstacleKind::Bat);
    assert_eq!(kind_for_roll(20), ObstacleKind::Bat);
    assert_eq!(kind_for_roll(21), ObstacleKind::Pterodactyl);
    assert_eq!(kind_for_roll(40), ObstacleKind::Pterodactyl);
    assert_eq!(kind_for_roll(41), ObstacleKind::Static);
    assert_eq!(kind_for_roll(100), ObstacleKind::Static);
}

// ── Factory ───────────────────────────────────────────────────────────────────

#[test]
fn every_theme_has_six_ground_obstacles() {
    let resources = Resources::load();
    for theme in BackgroundTheme::ALL {
        let set = theme_ground_set(theme);
        assert_eq!(set.len(), 6);
        for art in set {
            assert!(resources.get(TextureId::Obstacle(art)).is_some(), "{:?}", art);
        }
    }
}

#[test]
fn factory_builds_flyers_with_their_sheets() {
    let resources = Resources::load();
    let mut f = factory();

    let bat = f
        .create_for_roll(5, &resources, 1500.0, GROUND, BackgroundTheme::DesertDay)
        .unwrap();
    assert_eq!(bat.kind, ObstacleKind::Bat);
    assert_eq!(bat.sprite.texture, TextureId::Bat);
    assert_eq!(bat.sprite.frame_count, 4);
    assert_eq!(bat.velocity, -200.0);

    let ptero = f
        .create_for_roll(30, &resources, 1500.0, GROUND, BackgroundTheme::DesertDay)
        .unwrap();
    assert_eq!(ptero.sprite.texture, TextureId::Pterodactyl);
    assert_eq!(ptero.sprite.frame_count, 8);
}

#[test]
fn ground_obstacles_come_from_the_theme_set() {
    let resources = Resources::load();
    let mut f = factory();
    for theme in BackgroundTheme::ALL {
        let set = theme_ground_set(theme);
        for _ in 0..50 {
            let o = f
                .create_for_roll(77, &resources, 1500.0, GROUND, theme)
                .unwrap();
            assert_eq!(o.kind, ObstacleKind::Static);
            match o.sprite.texture {
                TextureId::Obstacle(art) => assert!(set.contains(&art), "{:?} not in {:?}", art, theme),
                other => panic!("unexpected texture {:?}", other),
            }
        }
    }
}

#[test]
fn seeded_rolls_follow_the_distribution() {
    let resources = Resources::load();
    let mut f = factory();
    let mut flyers = 0;
    for _ in 0..1000 {
        let o = f
            .create_obstacle(&resources, 1500.0, GROUND, BackgroundTheme::ForestDay)
            .unwrap();
        if o.kind != ObstacleKind::Static {
            flyers += 1;
        }
    }
    // Expected 400
    assert!((300..500).contains(&flyers), "flyers = {}", flyers);
}

#[test]
fn empty_ground_set_is_an_error() {
    let resources = Resources::load();
    let mut f = factory();
    f.set_ground_set(BackgroundTheme::ForestNight, Vec::new());
    assert!(f.ground_set(BackgroundTheme::ForestNight).is_empty());

    let result = f.create_for_roll(60, &resources, 1500.0, GROUND, BackgroundTheme::ForestNight);
    assert!(matches!(
        result,
        Err(GameError::EmptyObstacleSet(BackgroundTheme::ForestNight))
    ));

    // Flyers don't need ground art
    assert!(f
        .create_for_roll(10, &resources, 1500.0, GROUND, BackgroundTheme::ForestNight)
        .is_ok());
}
