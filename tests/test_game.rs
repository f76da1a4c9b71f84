mod common;

use common::FakeHost;
use dino_rush::background::ParallaxBackground;
use dino_rush::board::Board;
use dino_rush::config::{GameConfig, ANIMATION_UPDATE_TIME, OBSTACLE_SCALE, PARALLAX_SPEEDS};
use dino_rush::host::Key;
use dino_rush::obstacle::{Obstacle, ObstacleKind};
use dino_rush::resources::{BackgroundTheme, GroundObstacle, Layer, Resources, TextureId};
use dino_rush::scores::{ScoreEntry, ScoreLog};
use dino_rush::screens::game::{random_theme, GameSession, SessionState};

use rand::rngs::StdRng;
use rand::SeedableRng;

const HEIGHT: f32 = 720.0;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn ready_board(resources: &Resources) -> Board<StdRng> {
    let mut board = Board::new(&GameConfig::default(), seeded_rng(), StdRng::seed_from_u64(7));
    board.init(resources, 1280.0, HEIGHT).unwrap();
    board
}

/// Drop a cactus right on top of the player.
fn force_crash(board: &mut Board<StdRng>, resources: &Resources) {
    let x = board.player().position().x + 10.0;
    board.obstacles.push(Obstacle::spawn(
        ObstacleKind::Static,
        resources.texture(TextureId::Obstacle(GroundObstacle::SmallCactus)),
        x,
        655.0,
        OBSTACLE_SCALE,
        1,
        ANIMATION_UPDATE_TIME,
        -200.0,
    ));
}

fn score_log() -> (tempfile::TempDir, ScoreLog) {
    let dir = tempfile::tempdir().unwrap();
    let log = ScoreLog::new(dir.path().join("scores.txt"));
    (dir, log)
}

// ── session ───────────────────────────────────────────────────────────────────

#[test]
fn score_counts_seconds_survived() {
    let resources = Resources::load();
    let mut board = ready_board(&resources);
    let (_dir, scores) = score_log();
    let mut session = GameSession::new("rex", BackgroundTheme::DesertDay);
    let mut host = FakeHost::new();
    host.dt = 0.5;

    for _ in 0..4 {
        let state = session.step(&host, &mut board, &resources, &scores, HEIGHT).unwrap();
        assert_eq!(state, SessionState::Playing);
    }
    assert_eq!(session.final_score(), 2);
    assert!(scores.best_scores().is_empty());
}

#[test]
fn crash_saves_score_once() {
    let resources = Resources::load();
    let mut board = ready_board(&resources);
    let (_dir, scores) = score_log();
    let mut session = GameSession::new("rex", BackgroundTheme::ForestDay);
    session.score = 12.4;
    force_crash(&mut board, &resources);

    let mut host = FakeHost::new();
    let state = session.step(&host, &mut board, &resources, &scores, HEIGHT).unwrap();
    assert_eq!(state, SessionState::GameOver);
    assert!(session.game_over);

    // Lingering on the game-over screen must not append again
    for _ in 0..5 {
        session.step(&host, &mut board, &resources, &scores, HEIGHT).unwrap();
    }
    assert_eq!(scores.best_scores(), vec![ScoreEntry::new("rex", 12)]);
    let text = std::fs::read_to_string(scores.path()).unwrap();
    assert_eq!(text.lines().count(), 1);

    host.press(Key::Enter);
    let state = session.step(&host, &mut board, &resources, &scores, HEIGHT).unwrap();
    assert_eq!(state, SessionState::Finished);
}

#[test]
fn score_freezes_after_crash() {
    let resources = Resources::load();
    let mut board = ready_board(&resources);
    let (_dir, scores) = score_log();
    let mut session = GameSession::new("rex", BackgroundTheme::DesertDay);
    force_crash(&mut board, &resources);
    let host = FakeHost::new();

    session.step(&host, &mut board, &resources, &scores, HEIGHT).unwrap();
    let score = session.score;
    session.step(&host, &mut board, &resources, &scores, HEIGHT).unwrap();
    assert_eq!(session.score, score);
}

#[test]
fn guest_scores_are_never_saved() {
    let resources = Resources::load();
    let mut board = ready_board(&resources);
    let (_dir, scores) = score_log();
    let mut session = GameSession::new("", BackgroundTheme::DesertNight);
    force_crash(&mut board, &resources);

    let host = FakeHost::new();
    let state = session.step(&host, &mut board, &resources, &scores, HEIGHT).unwrap();
    assert_eq!(state, SessionState::GameOver);
    assert!(!scores.path().exists());
}

#[test]
fn failed_save_does_not_end_the_game_loop() {
    let resources = Resources::load();
    let mut board = ready_board(&resources);
    let dir = tempfile::tempdir().unwrap();
    let scores = ScoreLog::new(dir.path());
    let mut session = GameSession::new("rex", BackgroundTheme::DesertDay);
    force_crash(&mut board, &resources);

    let host = FakeHost::new();
    let state = session.step(&host, &mut board, &resources, &scores, HEIGHT).unwrap();
    assert_eq!(state, SessionState::GameOver);
    assert!(session.saved);
}

#[test]
fn space_makes_the_player_jump() {
    let resources = Resources::load();
    let mut board = ready_board(&resources);
    let (_dir, scores) = score_log();
    let mut session = GameSession::new("rex", BackgroundTheme::DesertDay);
    let mut host = FakeHost::new();
    host.press(Key::Space);
    session.step(&host, &mut board, &resources, &scores, HEIGHT).unwrap();
    assert!(board.player().in_air);
}

#[test]
fn run_returns_to_menu_on_escape() {
    let resources = Resources::load();
    let mut board = ready_board(&resources);
    let (_dir, scores) = score_log();
    let mut session = GameSession::new("rex", BackgroundTheme::ForestNight);
    let mut host = FakeHost::new();
    host.press(Key::Escape);
    assert!(session.run(&mut host, &resources, &mut board, &scores).unwrap());
    assert_eq!(board.theme, BackgroundTheme::ForestNight);
    assert!(!scores.path().exists());
}

#[test]
fn run_reports_window_close() {
    let resources = Resources::load();
    let mut board = ready_board(&resources);
    let (_dir, scores) = score_log();
    let mut session = GameSession::new("rex", BackgroundTheme::DesertDay);
    let mut host = FakeHost::new();
    host.close = true;
    assert!(!session.run(&mut host, &resources, &mut board, &scores).unwrap());
}

// ── drawing ───────────────────────────────────────────────────────────────────

#[test]
fn hud_shows_score_digits_and_heart() {
    let resources = Resources::load();
    let board = ready_board(&resources);
    let mut session = GameSession::new("rex", BackgroundTheme::DesertDay);
    session.score = 42.7;

    let mut host = FakeHost::new();
    session.draw(&mut host, &resources, &board);

    let digits: Vec<f32> = host
        .draws
        .iter()
        .filter(|d| d.texture == TextureId::Numbers)
        .map(|d| d.source.x)
        .collect();
    // Digits are 8 px wide in the numbers strip
    assert_eq!(digits, [32.0, 16.0]);
    assert!(host.draws.iter().any(|d| d.texture == TextureId::HeartIcon));
    assert!(host.draws.iter().any(|d| d.texture == board.player().sprite.texture));
}

#[test]
fn game_over_screen_hides_board() {
    let resources = Resources::load();
    let board = ready_board(&resources);
    let mut session = GameSession::new("rex", BackgroundTheme::DesertDay);
    session.score = 7.0;
    session.game_over = true;

    let mut host = FakeHost::new();
    session.draw(&mut host, &resources, &board);
    assert!(host.texts.iter().any(|t| t == "Game Over! Score: 7"));
    assert!(host.draws.iter().any(|d| d.texture == TextureId::LifeLostIcon));
    assert!(!host.draws.iter().any(|d| d.texture == board.player().sprite.texture));
}

#[test]
fn random_theme_covers_all_themes() {
    let mut rng = seeded_rng();
    let mut seen = Vec::new();
    for _ in 0..200 {
        let theme = random_theme(&mut rng);
        if !seen.contains(&theme) {
            seen.push(theme);
        }
    }
    assert_eq!(seen.len(), BackgroundTheme::ALL.len());
}

// ── background ────────────────────────────────────────────────────────────────

#[test]
fn layers_scroll_at_their_own_speeds() {
    let resources = Resources::load();
    let mut bg = ParallaxBackground::new(BackgroundTheme::DesertDay);
    bg.update(&resources, 1.0, HEIGHT);
    for (offset, speed) in bg.offsets.iter().zip(PARALLAX_SPEEDS) {
        assert!((offset + speed).abs() < 1e-3, "{} vs {}", offset, speed);
    }
}

#[test]
fn layer_offsets_wrap_within_one_width() {
    let resources = Resources::load();
    let mut bg = ParallaxBackground::new(BackgroundTheme::ForestNight);
    let scale = bg.scale(&resources, HEIGHT);
    for _ in 0..300 {
        bg.update(&resources, 0.1, HEIGHT);
        for layer in Layer::ALL {
            let width =
                resources.texture(TextureId::Background(bg.theme, layer)).width as f32 * scale;
            let offset = bg.offsets[layer as usize];
            assert!(offset <= 0.0 && offset > -width - 1e-3, "{:?}: {}", layer, offset);
        }
    }
}

#[test]
fn background_fills_window_height() {
    let resources = Resources::load();
    let bg = ParallaxBackground::new(BackgroundTheme::DesertNight);
    // All scenery layers share one height, so the scale maps it to the window
    let height = resources
        .texture(TextureId::Background(BackgroundTheme::DesertNight, Layer::Back))
        .height as f32;
    assert!((bg.scale(&resources, HEIGHT) * height - HEIGHT).abs() < 1e-3);

    let mut host = FakeHost::new();
    bg.draw(&mut host, &resources);
    let backs = host
        .draws
        .iter()
        .filter(|d| d.texture == TextureId::Background(BackgroundTheme::DesertNight, Layer::Back))
        .count();
    assert!(backs >= 2);
}
