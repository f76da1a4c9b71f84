//! The rendering/input surface the game runs on.
//!
//! The simulation never draws pixels itself: it computes rectangles and
//! frame indices and hands them to a [`Canvas`]. Screens read input through
//! [`Input`] and pace themselves with [`Host::begin_frame`] /
//! [`Host::end_frame`].

use crate::error::Result;
use crate::geometry::{Rect, Tint, Vec2};
use crate::resources::Texture;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

pub trait Canvas {
    /// Draw the `source` region of `texture` stretched over `dest`.
    fn draw_texture(&mut self, texture: &Texture, source: Rect, dest: Rect, tint: Tint);

    /// Draw `text` with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Tint);

    /// Width `text` would occupy when drawn at `size`.
    fn measure_text(&self, text: &str, size: f32) -> f32;

    /// Current logical screen size (width, height).
    fn screen_size(&self) -> Vec2;
}

pub trait Input {
    fn mouse_position(&self) -> Vec2;

    /// Left button went down during the current frame.
    fn is_mouse_pressed(&self) -> bool;

    /// `key` went down during the current frame.
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Printable characters typed during the current frame, in order.
    fn typed_chars(&self) -> &[char];

    /// Seconds elapsed since the previous frame.
    fn frame_time(&self) -> f32;

    /// The user asked to close the whole program.
    fn should_close(&self) -> bool;
}

pub trait Host: Canvas + Input {
    /// Collect input and start a fresh frame.
    fn begin_frame(&mut self) -> Result<()>;

    /// Present the frame and wait for the next display slot.
    fn end_frame(&mut self) -> Result<()>;
}

/// Draw a whole texture stretched over `dest`.
pub fn draw_full<C: Canvas + ?Sized>(canvas: &mut C, texture: &Texture, dest: Rect, tint: Tint) {
    let source = Rect::new(0.0, 0.0, texture.width as f32, texture.height as f32);
    canvas.draw_texture(texture, source, dest, tint);
}

/// Draw `text` horizontally centred on `center_x`.
pub fn draw_text_centered<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    center_x: f32,
    y: f32,
    size: f32,
    color: Tint,
) {
    let width = canvas.measure_text(text, size);
    canvas.draw_text(text, Vec2::new(center_x - width / 2.0, y), size, color);
}
