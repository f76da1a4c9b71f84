//! Account screen shown before the menu.

use crate::auth::{Authorization, LogInResult, SignInResult, USERNAME_MAX};
use crate::error::Result;
use crate::geometry::{Rect, Tint, Vec2};
use crate::host::{draw_full, draw_text_centered, Canvas, Host, Input, Key};
use crate::resources::{Resources, TextureId};

use super::{draw_backdrop, Button};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    User(String),
    Guest,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Username,
    Password,
    LogIn,
    SignUp,
    Guest,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Username,
        Focus::Password,
        Focus::LogIn,
        Focus::SignUp,
        Focus::Guest,
    ];

    fn next(self) -> Focus {
        let i = Self::ORDER.iter().position(|&f| f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }
}

/// Longest password the field accepts.
const PASSWORD_MAX: usize = 64;
const FIELD_WIDTH: f32 = 300.0;
const FIELD_HEIGHT: f32 = 40.0;
const BUTTON_WIDTH: f32 = 140.0;

#[derive(Clone, Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: Focus,
    /// Feedback from the last attempt.
    pub message: Option<&'static str>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focus: Focus::Username,
            message: None,
        }
    }

    pub fn username_field(screen: Vec2) -> Rect {
        Rect::new(
            screen.x / 2.0 - FIELD_WIDTH / 2.0,
            screen.y / 2.0 - 110.0,
            FIELD_WIDTH,
            FIELD_HEIGHT,
        )
    }

    pub fn password_field(screen: Vec2) -> Rect {
        Rect::new(
            screen.x / 2.0 - FIELD_WIDTH / 2.0,
            screen.y / 2.0 - 40.0,
            FIELD_WIDTH,
            FIELD_HEIGHT,
        )
    }

    pub fn buttons(screen: Vec2) -> [(Focus, Button); 3] {
        let y = screen.y / 2.0 + 40.0;
        let left = screen.x / 2.0 - BUTTON_WIDTH * 1.5 - 20.0;
        let at = |i: f32| Rect::new(left + i * (BUTTON_WIDTH + 20.0), y, BUTTON_WIDTH, 50.0);
        [
            (Focus::LogIn, Button::new(at(0.0), "Log In")),
            (Focus::SignUp, Button::new(at(1.0), "Sign Up")),
            (Focus::Guest, Button::new(at(2.0), "Guest")),
        ]
    }

    /// Apply one frame of input.
    pub fn handle_input<I: Input + ?Sized>(
        &mut self,
        input: &I,
        auth: &mut Authorization,
        screen: Vec2,
    ) -> Option<LoginOutcome> {
        if input.is_key_pressed(Key::Escape) {
            return Some(LoginOutcome::Quit);
        }
        if input.is_key_pressed(Key::Tab) {
            self.focus = self.focus.next();
        }

        if input.is_mouse_pressed() {
            let mouse = input.mouse_position();
            if Self::username_field(screen).contains(mouse) {
                self.focus = Focus::Username;
            } else if Self::password_field(screen).contains(mouse) {
                self.focus = Focus::Password;
            } else if let Some((focus, _)) = Self::buttons(screen)
                .into_iter()
                .find(|(_, button)| button.is_hovered(mouse))
            {
                self.focus = focus;
                return self.activate(auth);
            }
        }

        match self.focus {
            Focus::Username => edit(&mut self.username, input, USERNAME_MAX),
            Focus::Password => edit(&mut self.password, input, PASSWORD_MAX),
            _ => {}
        }

        if input.is_key_pressed(Key::Enter) {
            return self.activate(auth);
        }
        None
    }

    /// Act on the focused item: fields pass focus on, buttons submit.
    fn activate(&mut self, auth: &mut Authorization) -> Option<LoginOutcome> {
        match self.focus {
            Focus::Username | Focus::Password => {
                self.focus = self.focus.next();
                None
            }
            Focus::LogIn => {
                let result = auth.log_in(&self.username, &self.password);
                self.message = Some(result.message());
                log::info!("log in {}: {:?}", self.username, result);
                (result == LogInResult::Success).then(|| LoginOutcome::User(self.username.clone()))
            }
            Focus::SignUp => {
                let result = auth.sign_in(&self.username, &self.password);
                self.message = Some(result.message());
                (result == SignInResult::Success).then(|| LoginOutcome::User(self.username.clone()))
            }
            Focus::Guest => Some(LoginOutcome::Guest),
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, resources: &Resources) {
        draw_backdrop(canvas, resources, TextureId::RegistrationBackground);
        let screen = canvas.screen_size();

        draw_text_centered(canvas, "Dino Rush", screen.x / 2.0, screen.y / 2.0 - 200.0, 40.0, Tint::BLACK);

        let masked = "*".repeat(self.password.chars().count());
        let fields = [
            ("Username", Self::username_field(screen), self.username.as_str(), Focus::Username),
            ("Password", Self::password_field(screen), masked.as_str(), Focus::Password),
        ];
        for (label, rect, value, focus) in fields {
            let focused = self.focus == focus;
            let tint = if focused { Tint::YELLOW } else { Tint::WHITE };
            draw_full(canvas, resources.texture(TextureId::Button), rect, tint);
            canvas.draw_text(label, Vec2::new(rect.x, rect.y - 24.0), 20.0, Tint::BLACK);
            let cursor = if focused { "_" } else { "" };
            canvas.draw_text(
                &format!("{}{}", value, cursor),
                Vec2::new(rect.x + 10.0, rect.y + 10.0),
                20.0,
                Tint::BLACK,
            );
        }

        for (focus, button) in Self::buttons(screen) {
            button.draw(canvas, resources, self.focus == focus);
        }

        if let Some(message) = self.message {
            draw_text_centered(canvas, message, screen.x / 2.0, screen.y / 2.0 + 120.0, 20.0, Tint::RED);
        }
        draw_text_centered(
            canvas,
            "TAB next - ENTER select - ESC quit",
            screen.x / 2.0,
            screen.y - 30.0,
            20.0,
            Tint::BLACK,
        );
    }
}

fn edit<I: Input + ?Sized>(field: &mut String, input: &I, max: usize) {
    if input.is_key_pressed(Key::Backspace) {
        field.pop();
    }
    for &c in input.typed_chars() {
        if c.is_ascii_alphanumeric() && field.chars().count() < max {
            field.push(c);
        }
    }
}

/// Run the login screen until the player logs in, picks guest or quits.
pub fn show<H: Host + ?Sized>(
    host: &mut H,
    resources: &Resources,
    auth: &mut Authorization,
) -> Result<LoginOutcome> {
    let mut form = LoginForm::new();
    loop {
        host.begin_frame()?;
        if host.should_close() {
            return Ok(LoginOutcome::Quit);
        }
        let screen = host.screen_size();
        if let Some(outcome) = form.handle_input(&*host, auth, screen) {
            return Ok(outcome);
        }
        form.draw(&mut *host, resources);
        host.end_frame()?;
    }
}
