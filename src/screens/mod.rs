//! Everything around the playfield: login, menu, leaderboard and the game
//! session itself. Each screen runs its own frame loop on a [`Host`].

pub mod game;
pub mod leaderboard;
pub mod login;
pub mod menu;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::auth::Authorization;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::Result;
use crate::geometry::{Rect, Tint, Vec2};
use crate::host::{draw_full, Canvas, Host};
use crate::resources::{Resources, TextureId};
use crate::scores::ScoreLog;
use crate::shop::Shop;

use self::game::GameSession;
use self::login::LoginOutcome;
use self::menu::{Menu, MenuAction};

// ── Buttons ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
}

impl Button {
    pub fn new(rect: Rect, label: &'static str) -> Self {
        Self { rect, label }
    }

    pub fn is_hovered(&self, mouse: Vec2) -> bool {
        self.rect.contains(mouse)
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, resources: &Resources, highlighted: bool) {
        let tint = if highlighted { Tint::GRAY } else { Tint::WHITE };
        draw_full(canvas, resources.texture(TextureId::Button), self.rect, tint);

        let size = 20.0;
        let width = canvas.measure_text(self.label, size);
        let pos = Vec2::new(
            self.rect.x + (self.rect.width - width) / 2.0,
            self.rect.y + (self.rect.height - size) / 2.0,
        );
        let color = if highlighted { Tint::YELLOW } else { Tint::BLACK };
        canvas.draw_text(self.label, pos, size, color);
    }
}

/// Fill the screen with `texture`.
pub fn draw_backdrop<C: Canvas + ?Sized>(canvas: &mut C, resources: &Resources, texture: TextureId) {
    let screen = canvas.screen_size();
    draw_full(
        canvas,
        resources.texture(texture),
        Rect::new(0.0, 0.0, screen.x, screen.y),
        Tint::WHITE,
    );
}

// ── Application flow ──────────────────────────────────────────────────────────

/// Owns everything that lives across screens.
pub struct App {
    pub config: GameConfig,
    pub resources: Resources,
    pub scores: ScoreLog,
    pub auth: Authorization,
    pub shop: Shop,
    pub board: Board<StdRng>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let resources = Resources::load();
        let scores = ScoreLog::new(&config.storage.scores_file);
        let auth = Authorization::load(&config.storage.users_file);
        let shop = Shop::new(&resources, config.window.width, config.window.height);
        let board = Board::new(&config, StdRng::from_entropy(), StdRng::from_entropy());
        Self {
            config,
            resources,
            scores,
            auth,
            shop,
            board,
        }
    }

    /// Login, then the menu, until the player quits.
    pub fn run<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        let username = match login::show(&mut *host, &self.resources, &mut self.auth)? {
            LoginOutcome::User(name) => name,
            LoginOutcome::Guest => String::new(),
            LoginOutcome::Quit => return Ok(()),
        };
        log::info!(
            "session started for {}",
            if username.is_empty() { "guest" } else { username.as_str() }
        );

        let mut menu = Menu::new(&username);
        loop {
            match menu.show(&mut *host, &self.resources)? {
                MenuAction::NewGame => {
                    let texture = self.shop.selected_run_texture();
                    let frames = self.shop.selected_frame_count();
                    self.board.set_character(texture, frames);
                    let theme = game::random_theme(&mut rand::thread_rng());
                    let mut session = GameSession::new(&username, theme);
                    if !session.run(&mut *host, &self.resources, &mut self.board, &self.scores)? {
                        return Ok(());
                    }
                }
                MenuAction::Shop => self.shop.show(&mut *host, &self.resources)?,
                MenuAction::Leaderboard => {
                    leaderboard::show(&mut *host, &self.resources, &self.scores)?
                }
                MenuAction::Exit => return Ok(()),
            }
            if host.should_close() {
                return Ok(());
            }
        }
    }
}
