//! All game entity types — pure data, no logic.

use std::time::Instant;

/// The player inputs the engine understands.  Mapping physical keys to
/// these is the front-end's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Shoot,
    Pause,
}

/// Which phase of the game the engine is in.  Exactly one holds at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    NotStarted,
    Playing,
    Paused,
    LevelComplete,
    GameOver,
}

/// What occupies a single grid cell, for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Player,
    Alien,
    Laser,
    Explosion,
    BigExplosionPart,
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    /// Hit aliens linger until the next frame settle removes them.
    pub is_hit: bool,
}

/// A single-cell explosion left behind by a kill.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub x: i32,
    pub y: i32,
    pub at: Instant,
}

/// The celebratory burst shown when the last alien of a level dies.
/// The cell list is computed once at creation, clipped to the grid.
#[derive(Clone, Debug)]
pub struct BigExplosion {
    pub cells: Vec<(i32, i32)>,
    pub at: Instant,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub width: i32,
    pub height: i32,
    /// Player column; the player row is always the bottom row.
    pub player_x: i32,
    pub aliens: Vec<Alien>,
    /// True while one shot is "in flight" — no second shot can fire.
    pub laser_active: bool,
    pub explosions: Vec<Explosion>,
    pub big_explosion: Option<BigExplosion>,
    /// Shared horizontal heading of the whole formation, +1 or -1.
    pub direction: i32,
    /// Accumulated across levels; survives game over (level does not).
    pub score: u32,
    pub level: u32,
    pub mode: Mode,
    /// Set on any externally visible change; cleared after a render.
    pub needs_render: bool,
}

impl GameState {
    /// The fixed row the player sits on (bottom of the grid).
    pub fn player_row(&self) -> i32 {
        self.height - 1
    }
}
