use crate::error::Result;
use crate::geometry::{Rect, Tint, Vec2};
use crate::host::{draw_full, draw_text_centered, Canvas, Host, Input, Key};
use crate::resources::{Resources, TextureId};

use super::{draw_backdrop, Button};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    NewGame,
    Shop,
    Leaderboard,
    Exit,
}

const ENTRIES: [(MenuAction, &str); 4] = [
    (MenuAction::NewGame, "New Game"),
    (MenuAction::Shop, "Shop"),
    (MenuAction::Leaderboard, "Leaderboard"),
    (MenuAction::Exit, "Exit"),
];

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 60.0;
const BUTTON_SPACING: f32 = 80.0;
const BANNER_SCALE: f32 = 2.0;
const BANNER_Y: f32 = 40.0;

#[derive(Clone, Debug)]
pub struct Menu {
    pub welcome: String,
    /// Highlighted entry, from the mouse or the arrow keys.
    pub selected: Option<usize>,
}

impl Menu {
    pub fn new(username: &str) -> Self {
        let welcome = if username.is_empty() {
            "Welcome Guest".to_string()
        } else {
            format!("Welcome {}", username)
        };
        Self {
            welcome,
            selected: None,
        }
    }

    /// Buttons stacked around the vertical centre of the screen.
    pub fn buttons(screen: Vec2) -> Vec<Button> {
        let count = ENTRIES.len() as f32;
        let top = screen.y / 2.0 - count * BUTTON_SPACING / 2.0;
        ENTRIES
            .iter()
            .enumerate()
            .map(|(i, (_, label))| {
                Button::new(
                    Rect::new(
                        screen.x / 2.0 - BUTTON_WIDTH / 2.0,
                        top + i as f32 * BUTTON_SPACING,
                        BUTTON_WIDTH,
                        BUTTON_HEIGHT,
                    ),
                    *label,
                )
            })
            .collect()
    }

    /// Apply one frame of input, returning the chosen action if any.
    pub fn handle_input<I: Input + ?Sized>(&mut self, input: &I, screen: Vec2) -> Option<MenuAction> {
        let buttons = Self::buttons(screen);
        let mouse = input.mouse_position();
        if let Some(hovered) = buttons.iter().position(|b| b.is_hovered(mouse)) {
            self.selected = Some(hovered);
            if input.is_mouse_pressed() {
                return Some(ENTRIES[hovered].0);
            }
        }

        let count = ENTRIES.len();
        if input.is_key_pressed(Key::Down) {
            self.selected = Some(self.selected.map_or(0, |i| (i + 1) % count));
        }
        if input.is_key_pressed(Key::Up) {
            self.selected = Some(self.selected.map_or(count - 1, |i| (i + count - 1) % count));
        }
        if input.is_key_pressed(Key::Enter) {
            if let Some(i) = self.selected {
                return Some(ENTRIES[i].0);
            }
        }
        if input.is_key_pressed(Key::Escape) {
            return Some(MenuAction::Exit);
        }
        None
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, resources: &Resources) {
        draw_backdrop(canvas, resources, TextureId::MenuBackground);
        let screen = canvas.screen_size();

        let banner = resources.texture(TextureId::Banner);
        let width = banner.width as f32 * BANNER_SCALE;
        let height = banner.height as f32 * BANNER_SCALE;
        draw_full(
            canvas,
            banner,
            Rect::new(screen.x / 2.0 - width / 2.0, BANNER_Y, width, height),
            Tint::WHITE,
        );
        draw_text_centered(
            canvas,
            &self.welcome,
            screen.x / 2.0,
            BANNER_Y + (height - 30.0) / 2.0,
            30.0,
            Tint::BLACK,
        );

        for (i, button) in Self::buttons(screen).iter().enumerate() {
            button.draw(canvas, resources, self.selected == Some(i));
        }
    }

    /// Loop until an entry is chosen. Closing the game counts as Exit.
    pub fn show<H: Host + ?Sized>(&mut self, host: &mut H, resources: &Resources) -> Result<MenuAction> {
        loop {
            host.begin_frame()?;
            if host.should_close() {
                return Ok(MenuAction::Exit);
            }
            let screen = host.screen_size();
            if let Some(action) = self.handle_input(&*host, screen) {
                log::debug!("menu: {:?}", action);
                return Ok(action);
            }
            self.draw(&mut *host, resources);
            host.end_frame()?;
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new("")
    }
}

