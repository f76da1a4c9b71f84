//! Terminal host: all terminal I/O lives here.
//!
//! The game draws into a logical screen (1280×720 by default). Every
//! textured rectangle is rasterised onto a grid of terminal cells, then the
//! whole grid is flushed once per frame. Input arrives from a dedicated
//! reader thread over a channel, so the frame loop never blocks on I/O.

use std::collections::HashSet;
use std::io::Write;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use dino_rush::geometry::{Rect, Tint, Vec2};
use dino_rush::host::{Canvas, Host, Input, Key};
use dino_rush::resources::Texture;
use dino_rush::Result;

/// Longest frame step fed to the simulation, in seconds.
const MAX_FRAME_TIME: f32 = 0.1;
/// Tints fainter than this are not drawn at all.
const MIN_VISIBLE_ALPHA: u8 = 64;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: Color::White,
    bg: Color::Black,
};

fn to_color(look: Tint, tint: Tint) -> Color {
    let mix = |a: u8, b: u8| ((a as u16 * b as u16) / 255) as u8;
    Color::Rgb {
        r: mix(look.r, tint.r),
        g: mix(look.g, tint.g),
        b: mix(look.b, tint.b),
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab | KeyCode::BackTab => Some(Key::Tab),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

pub struct TerminalHost<W: Write> {
    out: W,
    rx: mpsc::Receiver<Event>,
    logical: Vec2,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
    pressed: HashSet<Key>,
    typed: Vec<char>,
    mouse: Vec2,
    mouse_pressed: bool,
    close: bool,
    frame: Duration,
    frame_start: Instant,
    dt: f32,
}

impl<W: Write> TerminalHost<W> {
    pub fn new(out: W, rx: mpsc::Receiver<Event>, logical: Vec2, target_fps: u32) -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let frame = Duration::from_secs_f32(1.0 / target_fps.max(1) as f32);
        Ok(Self {
            out,
            rx,
            logical,
            cols,
            rows,
            cells: vec![BLANK; cols as usize * rows as usize],
            pressed: HashSet::new(),
            typed: Vec::new(),
            mouse: Vec2::default(),
            mouse_pressed: false,
            close: false,
            frame,
            frame_start: Instant::now(),
            dt: 0.0,
        })
    }

    // ── Coordinate mapping ────────────────────────────────────────────────────

    fn px_per_col(&self) -> f32 {
        self.logical.x / self.cols.max(1) as f32
    }

    fn px_per_row(&self) -> f32 {
        self.logical.y / self.rows.max(1) as f32
    }

    /// Cell span `[first, last)` covered by a logical interval.
    fn span(start: f32, end: f32, px_per_cell: f32, cells: u16) -> (u16, u16) {
        let first = (start / px_per_cell).floor().max(0.0);
        let last = (end / px_per_cell).ceil().min(cells as f32);
        if last <= first {
            return (0, 0);
        }
        (first as u16, last as u16)
    }

    fn cell_mut(&mut self, col: u16, row: u16) -> Option<&mut Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells.get_mut(idx)
    }

    fn cell_center(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.px_per_col(),
            (row as f32 + 0.5) * self.px_per_row(),
        )
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    fn drain_events(&mut self) {
        self.pressed.clear();
        self.typed.clear();
        self.mouse_pressed = false;

        while let Ok(event) = self.rx.try_recv() {
            match event {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => {
                    if kind == KeyEventKind::Release {
                        continue;
                    }
                    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                        self.close = true;
                        continue;
                    }
                    if let Some(key) = map_key(code) {
                        self.pressed.insert(key);
                    }
                    if let KeyCode::Char(c) = code {
                        self.typed.push(c);
                    }
                }
                Event::Mouse(MouseEvent { kind, column, row, .. }) => {
                    self.mouse = self.cell_center(column, row);
                    if kind == MouseEventKind::Down(MouseButton::Left) {
                        self.mouse_pressed = true;
                    }
                }
                Event::Resize(cols, rows) => self.resize(cols, rows),
                _ => {}
            }
        }
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        log::debug!("terminal resized to {}x{}", cols, rows);
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![BLANK; cols as usize * rows as usize];
    }

    // ── Output ────────────────────────────────────────────────────────────────

    fn present(&mut self) -> std::io::Result<()> {
        let mut fg = None;
        let mut bg = None;
        for row in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if fg != Some(cell.fg) {
                    self.out.queue(style::SetForegroundColor(cell.fg))?;
                    fg = Some(cell.fg);
                }
                if bg != Some(cell.bg) {
                    self.out.queue(style::SetBackgroundColor(cell.bg))?;
                    bg = Some(cell.bg);
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}

impl<W: Write> Canvas for TerminalHost<W> {
    fn draw_texture(&mut self, texture: &Texture, source: Rect, dest: Rect, tint: Tint) {
        if tint.a < MIN_VISIBLE_ALPHA || dest.width <= 0.0 || dest.height <= 0.0 {
            return;
        }
        let look = texture.look;
        let frame = if source.width > 0.0 {
            (source.x / source.width).round().max(0.0) as usize
        } else {
            0
        };
        let glyph = look.glyph(frame);
        let fg = to_color(look.color, tint);

        let (px_col, px_row) = (self.px_per_col(), self.px_per_row());
        let (c0, c1) = Self::span(dest.x, dest.right(), px_col, self.cols);
        let (r0, r1) = Self::span(dest.y, dest.bottom(), px_row, self.rows);

        for row in r0..r1 {
            for col in c0..c1 {
                let center = self.cell_center(col, row);
                let u = (center.x - dest.x) / dest.width;
                let v = (center.y - dest.y) / dest.height;
                // Scenery layers get a wavy skyline instead of a flat edge.
                let top = if look.fill_from > 0.0 {
                    look.fill_from + 0.04 * (u * 12.0).sin()
                } else {
                    0.0
                };
                if v < top || v >= 1.0 || !(0.0..1.0).contains(&u) {
                    continue;
                }
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.ch = glyph;
                    cell.fg = fg;
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, _size: f32, color: Tint) {
        let (px_col, px_row) = (self.px_per_col(), self.px_per_row());
        if pos.y < 0.0 {
            return;
        }
        let row = (pos.y / px_row) as u16;
        let start = (pos.x / px_col).floor();
        let fg = to_color(color, Tint::WHITE);
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as f32;
            if col < 0.0 {
                continue;
            }
            if let Some(cell) = self.cell_mut(col as u16, row) {
                // Keep whatever was painted underneath visible as a backdrop.
                if cell.ch != ' ' {
                    cell.bg = cell.fg;
                }
                cell.ch = ch;
                cell.fg = fg;
            }
        }
    }

    fn measure_text(&self, text: &str, _size: f32) -> f32 {
        text.chars().count() as f32 * self.px_per_col()
    }

    fn screen_size(&self) -> Vec2 {
        self.logical
    }
}

impl<W: Write> Input for TerminalHost<W> {
    fn mouse_position(&self) -> Vec2 {
        self.mouse
    }

    fn is_mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
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

impl<W: Write> Host for TerminalHost<W> {
    fn begin_frame(&mut self) -> Result<()> {
        let now = Instant::now();
        self.dt = now
            .duration_since(self.frame_start)
            .as_secs_f32()
            .min(MAX_FRAME_TIME);
        self.frame_start = now;

        self.drain_events();
        self.cells.fill(BLANK);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.present()?;
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        Ok(())
    }
}
