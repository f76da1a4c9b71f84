//! One run of the game: scroll, simulate, detect the crash, save the score.

use rand::Rng;

use crate::background::ParallaxBackground;
use crate::board::Board;
use crate::error::Result;
use crate::geometry::{Rect, Tint, Vec2};
use crate::host::{draw_full, draw_text_centered, Canvas, Host, Input, Key};
use crate::resources::{BackgroundTheme, Resources, TextureId};
use crate::scores::ScoreLog;

/// Scale of the HUD icon and score digits.
const HUD_SCALE: f32 = 4.0;
const HUD_MARGIN: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    GameOver,
    /// The player left the game-over screen.
    Finished,
}

pub fn random_theme<R: Rng + ?Sized>(rng: &mut R) -> BackgroundTheme {
    BackgroundTheme::ALL[rng.gen_range(0..BackgroundTheme::ALL.len())]
}

#[derive(Clone, Debug)]
pub struct GameSession {
    pub username: String,
    /// Seconds survived.
    pub score: f32,
    pub game_over: bool,
    pub saved: bool,
    pub background: ParallaxBackground,
}

impl GameSession {
    pub fn new(username: &str, theme: BackgroundTheme) -> Self {
        Self {
            username: username.to_string(),
            score: 0.0,
            game_over: false,
            saved: false,
            background: ParallaxBackground::new(theme),
        }
    }

    pub fn theme(&self) -> BackgroundTheme {
        self.background.theme
    }

    /// Whole seconds survived, the value that gets saved.
    pub fn final_score(&self) -> u32 {
        self.score as u32
    }

    /// Advance one frame.
    pub fn step<R: Rng, I: Input + ?Sized>(
        &mut self,
        input: &I,
        board: &mut Board<R>,
        resources: &Resources,
        scores: &ScoreLog,
        window_height: f32,
    ) -> Result<SessionState> {
        let dt = input.frame_time();
        self.background.update(resources, dt, window_height);

        if !self.game_over {
            if input.is_key_pressed(Key::Space) || input.is_key_pressed(Key::Up) {
                board.request_jump();
            }
            board.update(resources, dt, window_height)?;
            self.game_over = board.check_loss();
            self.score += dt;
            if self.game_over {
                log::info!("crashed after {} s", self.final_score());
            }
        }

        if !self.game_over {
            return Ok(SessionState::Playing);
        }
        self.save_score(scores);
        if input.is_key_pressed(Key::Enter) {
            return Ok(SessionState::Finished);
        }
        Ok(SessionState::GameOver)
    }

    /// Record the run once. Guests are never recorded, and a failed write is
    /// logged and dropped.
    pub fn save_score(&mut self, scores: &ScoreLog) {
        if self.username.is_empty() || self.saved {
            return;
        }
        if let Err(e) = scores.append(&self.username, self.final_score()) {
            log::warn!("failed to write {}: {}", scores.path().display(), e);
        }
        self.saved = true;
    }

    pub fn draw<R: Rng, C: Canvas + ?Sized>(&self, canvas: &mut C, resources: &Resources, board: &Board<R>) {
        self.background.draw(canvas, resources);
        let screen = canvas.screen_size();

        if self.game_over {
            let text = format!("Game Over! Score: {}", self.final_score());
            draw_text_centered(canvas, &text, screen.x / 2.0, screen.y / 2.0, 40.0, Tint::RED);
            draw_text_centered(
                canvas,
                "Press ENTER to return to menu",
                screen.x / 2.0,
                screen.y / 2.0 + 50.0,
                20.0,
                Tint::WHITE,
            );
        } else {
            board.draw(canvas, resources);
        }
        self.draw_hud(canvas, resources);
    }

    fn draw_hud<C: Canvas + ?Sized>(&self, canvas: &mut C, resources: &Resources) {
        let icon_id = if self.game_over {
            TextureId::LifeLostIcon
        } else {
            TextureId::HeartIcon
        };
        let icon = resources.texture(icon_id);
        let dest = Rect::new(
            HUD_MARGIN,
            HUD_MARGIN,
            icon.width as f32 * HUD_SCALE,
            icon.height as f32 * HUD_SCALE,
        );
        draw_full(canvas, icon, dest, Tint::WHITE);

        let numbers = resources.texture(TextureId::Numbers);
        let digit_width = numbers.width as f32 / 10.0;
        let digit_height = numbers.height as f32;
        let scaled_width = digit_width * HUD_SCALE;
        let text = self.final_score().to_string();
        let total = scaled_width * text.len() as f32;
        let screen = canvas.screen_size();

        for (i, digit) in text.chars().filter_map(|c| c.to_digit(10)).enumerate() {
            let source = Rect::new(digit as f32 * digit_width, 0.0, digit_width, digit_height);
            let dest = Rect::new(
                screen.x - total - HUD_MARGIN + i as f32 * scaled_width,
                HUD_MARGIN,
                scaled_width,
                digit_height * HUD_SCALE,
            );
            canvas.draw_texture(numbers, source, dest, Tint::WHITE);
        }
    }

    /// Play until the player leaves the game-over screen (`Ok(true)`) or
    /// closes the program (`Ok(false)`).
    pub fn run<R: Rng, H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        resources: &Resources,
        board: &mut Board<R>,
        scores: &ScoreLog,
    ) -> Result<bool> {
        let screen: Vec2 = host.screen_size();
        board.set_theme(self.theme());
        board.init(resources, screen.x, screen.y)?;

        loop {
            host.begin_frame()?;
            if host.should_close() {
                return Ok(false);
            }
            if !self.game_over && host.is_key_pressed(Key::Escape) {
                log::info!("run abandoned");
                return Ok(true);
            }

            let height = host.screen_size().y;
            let state = self.step(&*host, board, resources, scores, height)?;
            self.draw(&mut *host, resources, board);
            host.end_frame()?;

            if state == SessionState::Finished {
                return Ok(true);
            }
        }
    }
}
