use dino_rush::collision::Collidable;
use dino_rush::config::{PhysicsConfig, ANIMATION_UPDATE_TIME, PLAYER_SCALE};
use dino_rush::player::Player;
use dino_rush::resources::{Dino, Resources, TextureId};

const DT: f32 = 1.0 / 60.0;
const HEIGHT: f32 = 720.0;

fn make_player() -> Player {
    let resources = Resources::load();
    let mut player = Player::new(&PhysicsConfig::default());
    player.init(
        resources.texture(TextureId::DinoRun(Dino::Green)),
        100.0,
        HEIGHT,
        PLAYER_SCALE,
        Dino::Green.run_frame_count(),
        ANIMATION_UPDATE_TIME,
    );
    player
}

/// Run until the player is back on the ground, with a frame cap.
fn fall_until_landed(player: &mut Player) {
    for _ in 0..600 {
        player.update(DT, HEIGHT, false);
        if !player.in_air {
            return;
        }
    }
    panic!("player never landed");
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_stands_on_ground() {
    let p = make_player();
    assert_eq!(p.ground_level, 655.0); // 720 - 65
    // 24 px frame at scale 4
    assert_eq!(p.position().y, 655.0 - 96.0);
    assert_eq!(p.position().x, 100.0);
    assert!(p.is_on_ground());
    assert!(!p.in_air);
    assert_eq!(p.jump_count, 0);
    assert_eq!(p.velocity, 0.0);
    assert_eq!(p.collision_rec().bottom(), 655.0);
}

#[test]
fn standing_still_stays_grounded() {
    let mut p = make_player();
    for _ in 0..30 {
        p.update(DT, HEIGHT, false);
    }
    assert_eq!(p.position().y, p.ground_y());
    assert_eq!(p.velocity, 0.0);
    assert!(!p.in_air);
}

// ── jumping ───────────────────────────────────────────────────────────────────

#[test]
fn jump_launches_upward() {
    let mut p = make_player();
    let start_y = p.position().y;
    p.update(DT, HEIGHT, true);
    assert!(p.in_air);
    assert!(p.velocity < 0.0);
    assert_eq!(p.jump_count, 1);
    assert!(p.position().y < start_y);
}

#[test]
fn landing_snaps_to_ground_and_resets() {
    let mut p = make_player();
    p.update(DT, HEIGHT, true);
    fall_until_landed(&mut p);
    assert_eq!(p.position().y, p.ground_y());
    assert_eq!(p.velocity, 0.0);
    assert_eq!(p.jump_count, 0);
    assert!(!p.in_air);
}

#[test]
fn second_jump_allowed_third_ignored() {
    let mut p = make_player();
    p.update(DT, HEIGHT, true);
    p.update(DT, HEIGHT, true);
    assert_eq!(p.jump_count, 2);
    assert!(!p.can_jump());

    let before = p.velocity;
    p.update(DT, HEIGHT, true);
    assert_eq!(p.jump_count, 2);
    // Only gravity acted on the third frame
    assert!((p.velocity - (before + p.gravity * DT)).abs() < 1e-3);
}

#[test]
fn can_jump_again_after_landing() {
    let mut p = make_player();
    p.update(DT, HEIGHT, true);
    p.update(DT, HEIGHT, true);
    fall_until_landed(&mut p);
    assert!(p.can_jump());
    p.update(DT, HEIGHT, true);
    assert_eq!(p.jump_count, 1);
    assert!(p.in_air);
}

#[test]
fn player_never_sinks_below_ground() {
    let mut p = make_player();
    p.update(DT, HEIGHT, true);
    for _ in 0..200 {
        p.update(DT, HEIGHT, false);
        assert!(p.position().y <= p.ground_y());
    }
}

// ── animation ─────────────────────────────────────────────────────────────────

#[test]
fn run_animation_plays_on_ground() {
    let mut p = make_player();
    p.update(0.1, HEIGHT, false);
    assert_eq!(p.sprite.frame, 1);
}

#[test]
fn run_animation_freezes_in_air() {
    let mut p = make_player();
    p.update(DT, HEIGHT, true);
    let frame = p.sprite.frame;
    for _ in 0..10 {
        p.update(DT, HEIGHT, false);
        assert!(p.in_air);
    }
    assert_eq!(p.sprite.frame, frame);
}

#[test]
fn ground_line_sits_offset_above_window_bottom() {
    let p = make_player();
    assert_eq!(p.ground_level_for(720.0), 655.0);
    assert_eq!(p.ground_level_for(800.0), 735.0);
}

#[test]
fn taller_window_moves_ground_down() {
    let mut p = make_player();
    p.update(DT, 800.0, false);
    assert_eq!(p.ground_level, 735.0);
    // Now above the new ground, so falling
    assert!(p.in_air);
}
