#![allow(dead_code)]

use std::collections::HashSet;

use dino_rush::geometry::{Rect, Tint, Vec2};
use dino_rush::host::{Canvas, Host, Input, Key};
use dino_rush::resources::{Texture, TextureId};
use dino_rush::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub texture: TextureId,
    pub source: Rect,
    pub dest: Rect,
    pub tint: Tint,
}

/// Records draw calls and serves scripted input for one frame at a time.
#[derive(Default)]
pub struct FakeHost {
    pub draws: Vec<DrawCall>,
    pub texts: Vec<String>,
    pub keys: HashSet<Key>,
    pub typed: Vec<char>,
    pub mouse: Vec2,
    pub mouse_pressed: bool,
    pub dt: f32,
    pub close: bool,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            dt: 1.0 / 60.0,
            ..Self::default()
        }
    }

    pub fn press(&mut self, key: Key) -> &mut Self {
        self.keys.insert(key);
        self
    }

    pub fn type_str(&mut self, s: &str) -> &mut Self {
        self.typed.extend(s.chars());
        self
    }

    pub fn click(&mut self, at: Vec2) -> &mut Self {
        self.mouse = at;
        self.mouse_pressed = true;
        self
    }

    /// Forget this frame's input and drawing.
    pub fn clear(&mut self) {
        self.draws.clear();
        self.texts.clear();
        self.keys.clear();
        self.typed.clear();
        self.mouse_pressed = false;
    }
}

impl Canvas for FakeHost {
    fn draw_texture(&mut self, texture: &Texture, source: Rect, dest: Rect, tint: Tint) {
        self.draws.push(DrawCall {
            texture: texture.id,
            source,
            dest,
            tint,
        });
    }

    fn draw_text(&mut self, text: &str, _pos: Vec2, _size: f32, _color: Tint) {
        self.texts.push(text.to_string());
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size / 2.0
    }

    fn screen_size(&self) -> Vec2 {
        Vec2::new(1280.0, 720.0)
    }
}

impl Input for FakeHost {
    fn mouse_position(&self) -> Vec2 {
        self.mouse
    }

    fn is_mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn typed_chars(&self) -> &[char] {
        &self.typed
    }

    fn frame_time(&self) -> f32 {
        self.dt
    }

    fn should_close(&self) -> bool {
        self.close
    }
}

impl Host for FakeHost {
    fn begin_frame(&mut self) -> Result<()> {
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        Ok(())
    }
}
