use crate::config::LEADERBOARD_SIZE;
use crate::error::Result;
use crate::geometry::{Rect, Tint};
use crate::host::{draw_full, draw_text_centered, Canvas, Host, Key};
use crate::resources::{Resources, TextureId};
use crate::scores::{ScoreEntry, ScoreLog};

use super::draw_backdrop;

/// `"1. name: score"` rows for the leaderboard.
pub fn format_rows(entries: &[ScoreEntry]) -> Vec<String> {
    entries
        .iter()
        .take(LEADERBOARD_SIZE)
        .enumerate()
        .map(|(i, e)| format!("{}. {}: {}", i + 1, e.username, e.score))
        .collect()
}

pub fn draw<C: Canvas + ?Sized>(canvas: &mut C, resources: &Resources, rows: &[String]) {
    draw_backdrop(canvas, resources, TextureId::MenuBackground);
    let screen = canvas.screen_size();

    let frame = resources.texture(TextureId::LeaderboardFrame);
    let scale = if frame.width > 0 && frame.height > 0 {
        (screen.x / frame.width as f32).min(screen.y / frame.height as f32) * 0.8
    } else {
        1.0
    };
    let width = frame.width as f32 * scale;
    let height = frame.height as f32 * scale;
    let x = (screen.x - width) / 2.0;
    let y = (screen.y - height) / 2.0;
    draw_full(canvas, frame, Rect::new(x, y, width, height), Tint::WHITE);

    let center = x + width / 2.0;
    draw_text_centered(canvas, "Leaderboard", center, y + 70.0, 40.0, Tint::BLACK);
    if rows.is_empty() {
        draw_text_centered(canvas, "No scores yet", center, y + 120.0, 30.0, Tint::BLACK);
    }
    for (i, row) in rows.iter().enumerate() {
        draw_text_centered(canvas, row, center, y + 120.0 + i as f32 * 40.0, 30.0, Tint::BLACK);
    }

    draw_text_centered(canvas, "Press ESC to return", screen.x / 2.0, screen.y - 30.0, 20.0, Tint::BLACK);
}

/// Show the best scores until Escape.
pub fn show<H: Host + ?Sized>(host: &mut H, resources: &Resources, scores: &ScoreLog) -> Result<()> {
    let rows = format_rows(&scores.leaderboard(LEADERBOARD_SIZE));
    log::debug!("leaderboard with {} rows", rows.len());
    loop {
        host.begin_frame()?;
        if host.should_close() || host.is_key_pressed(Key::Escape) {
            return Ok(());
        }
        draw(&mut *host, resources, &rows);
        host.end_frame()?;
    }
}
