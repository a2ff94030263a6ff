//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable snapshot of
//! the game.  No game logic is performed; this module only translates
//! classified cells and status fields into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::engine::Snapshot;
use crate::entities::{Cell, Mode};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::Cyan;
const C_ALIEN: Color = Color::Green;
const C_LASER: Color = Color::Red;
const C_EXPLOSION: Color = Color::Yellow;
const C_PROMPT: Color = Color::Cyan;
const C_PAUSED: Color = Color::Yellow;
const C_LEVEL_DONE: Color = Color::Green;
const C_FOCUS_HINT: Color = Color::DarkYellow;
const C_MESSAGE: Color = Color::Magenta;
const C_STATUS: Color = Color::White;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &Snapshot) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for y in 0..snap.height {
        draw_row(out, snap, y)?;
    }
    draw_status(out, snap)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, snap.height as u16 + 1))?;
    out.flush()?;
    Ok(())
}

// ── Grid rows ─────────────────────────────────────────────────────────────────

fn draw_row<W: Write>(out: &mut W, snap: &Snapshot, y: i32) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, y as u16))?;
    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(Print("│"))?;

    for x in 0..snap.width {
        let (glyph, color) = match snap.cell(x, y) {
            Cell::Player => ("^", C_PLAYER),
            Cell::Alien => ("#", C_ALIEN),
            Cell::Laser => ("|", C_LASER),
            Cell::Explosion | Cell::BigExplosionPart => ("@", C_EXPLOSION),
            Cell::Empty => (" ", C_BORDER),
        };
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(Print("│"))?;
    Ok(())
}

// ── Status line (below the grid) ──────────────────────────────────────────────

fn draw_status<W: Write>(out: &mut W, snap: &Snapshot) -> std::io::Result<()> {
    let (text, color) = match snap.mode {
        Mode::NotStarted => (
            "Press SPACE to start Console Invaders!".to_string(),
            C_PROMPT,
        ),
        Mode::Paused => (
            format!(
                "PAUSED - Press P to resume | Lvl: {} | Score: {}",
                snap.level, snap.score
            ),
            C_PAUSED,
        ),
        Mode::GameOver => (
            format!(
                "GAME OVER - Press SPACE to start new game | Lvl: {} | Score: {}",
                snap.level, snap.score
            ),
            C_PROMPT,
        ),
        Mode::LevelComplete => (
            format!(
                "Level Complete! Press SPACE for Level {} | Score: {}",
                snap.level, snap.score
            ),
            C_LEVEL_DONE,
        ),
        Mode::Playing => {
            if !snap.has_focus {
                (
                    "Focus the terminal to regain control!".to_string(),
                    C_FOCUS_HINT,
                )
            } else if let Some(message) = snap.message {
                (message.to_string(), C_MESSAGE)
            } else {
                (
                    format!("Lvl: {} | Score: {}", snap.level, snap.score),
                    C_STATUS,
                )
            }
        }
    };

    out.queue(cursor::MoveTo(0, snap.height as u16))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}
