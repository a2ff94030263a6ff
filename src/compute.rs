//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` and returns a brand-new `GameState`; none of them touch a
//! clock or an RNG.  Timestamps are passed in by the caller so tests
//! control time exactly.

use std::time::{Duration, Instant};

use crate::entities::{Alien, BigExplosion, Cell, Explosion, GameState, Mode};

// ── Tuning constants ─────────────────────────────────────────────────────────

pub const GAME_WIDTH: i32 = 20;
pub const GAME_HEIGHT: i32 = 10;
pub const ALIEN_ROWS: i32 = 4;
pub const ALIENS_PER_ROW: i32 = 7;
/// Even formation rows start at this column; odd rows start one left of it.
pub const ALIEN_OFFSET: i32 = 2;
pub const ALIEN_DROP_DISTANCE: i32 = 1;
pub const POINTS_PER_KILL: u32 = 10;
pub const SPEED_INCREASE_PER_LEVEL: f64 = 0.2;

pub const BASE_ALIEN_PERIOD: Duration = Duration::from_millis(1000);
pub const FRAME_PERIOD: Duration = Duration::from_millis(200);
pub const LASER_DURATION: Duration = Duration::from_millis(300);
pub const EXPLOSION_DURATION: Duration = Duration::from_millis(400);
pub const BIG_EXPLOSION_DURATION: Duration = Duration::from_millis(1000);

/// Burst shape of the level-clearing explosion, as offsets from the kill
/// point.  Cells that fall off the grid are dropped at creation time.
const BIG_EXPLOSION_PATTERN: [(i32, i32); 17] = [
    (0, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (-2, 0),
    (2, 0),
    (0, -2),
    (0, 2),
    (-2, -1),
    (2, 1),
    (-1, 2),
    (1, -2),
];

// ── Level curve ──────────────────────────────────────────────────────────────

/// Time between alien-movement ticks.  Higher levels march strictly faster.
pub fn alien_tick_period(level: u32) -> Duration {
    let factor = 1.0 + (level.saturating_sub(1)) as f64 * SPEED_INCREASE_PER_LEVEL;
    Duration::from_secs_f64(BASE_ALIEN_PERIOD.as_secs_f64() / factor)
}

/// Points awarded per kill, scaled by the same curve that speeds aliens up.
pub fn points_for_kill(level: u32) -> u32 {
    let factor = 1.0 + (level.saturating_sub(1)) as f64 * SPEED_INCREASE_PER_LEVEL;
    (POINTS_PER_KILL as f64 * factor).floor() as u32
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// The state before the first shot: empty grid, prompt showing.
pub fn init_state() -> GameState {
    GameState {
        width: GAME_WIDTH,
        height: GAME_HEIGHT,
        player_x: GAME_WIDTH / 2,
        aliens: Vec::new(),
        laser_active: false,
        explosions: Vec::new(),
        big_explosion: None,
        direction: 1,
        score: 0,
        level: 1,
        mode: Mode::NotStarted,
        needs_render: true,
    }
}

/// Rebuild the formation and clear every transient field for a fresh level.
/// Score and level carry over; resetting those is the game-over check's job.
pub fn start_level(state: &GameState) -> GameState {
    let mut aliens = Vec::with_capacity((ALIEN_ROWS * ALIENS_PER_ROW) as usize);
    for row in 0..ALIEN_ROWS {
        // Alternating offsets give the formation its staggered look
        let start = if row % 2 == 0 { ALIEN_OFFSET } else { ALIEN_OFFSET - 1 };
        for i in 0..ALIENS_PER_ROW {
            aliens.push(Alien {
                x: start + i,
                y: row,
                is_hit: false,
            });
        }
    }

    GameState {
        player_x: state.width / 2,
        aliens,
        laser_active: false,
        explosions: Vec::new(),
        big_explosion: None,
        direction: 1,
        mode: Mode::Playing,
        needs_render: true,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    GameState {
        player_x: (state.player_x - 1).max(0),
        needs_render: true,
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState) -> GameState {
    GameState {
        player_x: (state.player_x + 1).min(state.width - 1),
        needs_render: true,
        ..state.clone()
    }
}

/// Fire the laser: hit resolution is instantaneous, not animated along a
/// trajectory.  The column is scanned from the row just above the player
/// up to the top, so the alien nearest the player dies first — and only
/// that one, even if the column holds more.
///
/// A no-op while a shot is already in flight; clearing `laser_active`
/// afterwards is the engine's scheduling concern.
pub fn fire_laser(state: &GameState, now: Instant) -> GameState {
    if state.laser_active {
        return state.clone();
    }

    let mut next = state.clone();
    next.laser_active = true;
    next.needs_render = true;

    for y in (0..next.player_row()).rev() {
        let hit = next
            .aliens
            .iter()
            .position(|a| a.x == next.player_x && a.y == y && !a.is_hit);
        if let Some(idx) = hit {
            next.aliens[idx].is_hit = true;
            next.score += points_for_kill(next.level);

            if next.aliens.iter().all(|a| a.is_hit) {
                // Last one: celebrate instead of the usual single-cell puff
                let (ax, ay) = (next.aliens[idx].x, next.aliens[idx].y);
                next.big_explosion = Some(big_explosion_at(ax, ay, next.width, next.height, now));
            } else {
                next.explosions.push(Explosion {
                    x: next.player_x,
                    y,
                    at: now,
                });
            }
            break;
        }
    }

    next
}

/// Build the level-clearing burst, clipped to the grid.
pub fn big_explosion_at(cx: i32, cy: i32, width: i32, height: i32, now: Instant) -> BigExplosion {
    let cells = BIG_EXPLOSION_PATTERN
        .iter()
        .map(|&(dx, dy)| (cx + dx, cy + dy))
        .filter(|&(x, y)| x >= 0 && x < width && y >= 0 && y < height)
        .collect();
    BigExplosion { cells, at: now }
}

// ── Periodic ticks (pure) ────────────────────────────────────────────────────

/// One alien-movement tick.  The whole formation moves in lockstep: if any
/// alien's next column would leave the grid, every alien drops one row and
/// the shared direction flips; otherwise every alien shifts sideways.
pub fn advance_aliens(state: &GameState) -> GameState {
    if state.mode != Mode::Playing || state.aliens.is_empty() {
        return state.clone();
    }

    let mut next = state.clone();
    let hit_boundary = next.aliens.iter().any(|a| {
        let nx = a.x + next.direction;
        nx < 0 || nx >= next.width
    });

    if hit_boundary {
        for alien in &mut next.aliens {
            alien.y += ALIEN_DROP_DISTANCE;
        }
        next.direction = -next.direction;
    } else {
        for alien in &mut next.aliens {
            alien.x += next.direction;
        }
    }

    next.needs_render = true;
    next
}

/// One frame tick's worth of bookkeeping: expire explosions, sweep out hit
/// aliens, and resolve the end-of-level checks.
///
/// Explosion pruning runs in every mode (a paused game still fades its
/// explosions); the alien sweep and the win/lose checks only apply while
/// playing.
pub fn settle_frame(state: &GameState, now: Instant) -> GameState {
    let mut next = state.clone();

    let before = next.explosions.len();
    next.explosions
        .retain(|e| now.duration_since(e.at) < EXPLOSION_DURATION);
    if next.explosions.len() != before {
        next.needs_render = true;
    }

    let big_expired = next
        .big_explosion
        .as_ref()
        .map_or(false, |big| now.duration_since(big.at) >= BIG_EXPLOSION_DURATION);
    if big_expired {
        next.big_explosion = None;
        next.needs_render = true;
    }

    if next.mode != Mode::Playing {
        return next;
    }

    next.aliens.retain(|a| !a.is_hit);

    if next.aliens.iter().any(|a| a.y >= next.player_row()) {
        // Aliens reached Earth.  Level resets; the score stays up as a
        // "final score" for the game-over banner.
        next.level = 1;
        next.mode = Mode::GameOver;
        next.needs_render = true;
    } else if next.aliens.is_empty() {
        next.level += 1;
        next.mode = Mode::LevelComplete;
        next.needs_render = true;
    }

    next
}

// ── Cell classification ──────────────────────────────────────────────────────

/// What the presenter should draw at `(x, y)`.  Priority order: big
/// explosion, explosion, player, laser, alien.  The laser beam fills the
/// player's column above the ship except where a live alien sits.
pub fn cell_at(state: &GameState, x: i32, y: i32) -> Cell {
    if let Some(big) = &state.big_explosion {
        if big.cells.iter().any(|&(bx, by)| bx == x && by == y) {
            return Cell::BigExplosionPart;
        }
    }
    if state.explosions.iter().any(|e| e.x == x && e.y == y) {
        return Cell::Explosion;
    }

    let alien_here = state
        .aliens
        .iter()
        .any(|a| a.x == x && a.y == y && !a.is_hit);

    if y == state.player_row() && x == state.player_x {
        Cell::Player
    } else if state.laser_active && !alien_here && y < state.player_row() && x == state.player_x {
        Cell::Laser
    } else if alien_here {
        Cell::Alien
    } else {
        Cell::Empty
    }
}
