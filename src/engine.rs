//! The simulation engine.
//!
//! `Engine` owns the `GameState` and everything time-shaped around it: the
//! 200 ms frame tick, the level-dependent alien-movement tick, and the
//! one-shot laser clear.  All of it runs cooperatively on one thread — the
//! host pumps [`Engine::poll`] and the engine fires whatever is due, so
//! there is no locking and no true parallelism anywhere.
//!
//! `handle_action` is the sole mutation entry point from outside.  The
//! presenter reads back through [`Engine::snapshot`], gated by
//! [`Engine::needs_render`].

use std::time::Instant;

use rand::Rng;

use crate::compute::{
    advance_aliens, alien_tick_period, cell_at, fire_laser, init_state, move_player_left,
    move_player_right, settle_frame, start_level, FRAME_PERIOD, LASER_DURATION,
};
use crate::entities::{Action, Cell, GameState, Mode};
use crate::messages::MessageTicker;

/// A deferred one-shot, tagged with the epoch that scheduled it.  If the
/// engine has since been re-initialized the epoch no longer matches and
/// the event is dropped unfired — a stale laser clear must not touch a
/// fresh level's state.
#[derive(Clone, Copy, Debug)]
struct Pending {
    due: Instant,
    epoch: u64,
}

/// Read-only view handed to the presenter: one classified cell per grid
/// position plus everything the status line needs.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub width: i32,
    pub height: i32,
    cells: Vec<Cell>,
    pub mode: Mode,
    pub level: u32,
    pub score: u32,
    pub has_focus: bool,
    pub message: Option<&'static str>,
}

impl Snapshot {
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.cells[(y * self.width + x) as usize]
    }
}

pub struct Engine {
    state: GameState,
    messages: MessageTicker,
    has_focus: bool,
    running: bool,
    /// Bumped on every level (re)initialization and on stop; invalidates
    /// deferred events scheduled under an older epoch.
    epoch: u64,
    frame_due: Option<Instant>,
    alien_due: Option<Instant>,
    laser_clear: Option<Pending>,
}

impl Engine {
    pub fn new() -> Self {
        Engine::with_state(init_state())
    }

    /// Build an engine around an existing state.  Useful for hosts that
    /// assemble scenarios directly, and for tests.
    pub fn with_state(state: GameState) -> Self {
        Engine {
            state,
            messages: MessageTicker::new(),
            has_focus: true,
            running: false,
            epoch: 0,
            frame_due: None,
            alien_due: None,
            laser_clear: None,
        }
    }

    /// Read-only view of the raw state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // ── Lifecycle ────────────────────────────────────────────────────────────

    /// Arm the frame tick and owe the initial "press shoot" render.
    /// Calling `start` on a running engine is a no-op — it must never
    /// spawn a second set of periodic activities.
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.frame_due = Some(now + FRAME_PERIOD);
        self.state.needs_render = true;
    }

    /// Cancel every periodic and deferred activity.  A stopped engine
    /// ignores actions and polls until started again.
    pub fn stop(&mut self) {
        self.running = false;
        self.epoch += 1;
        self.frame_due = None;
        self.alien_due = None;
        self.laser_clear = None;
    }

    /// Focus only affects the status line, never the simulation.
    pub fn set_focus(&mut self, focused: bool) {
        if self.has_focus != focused {
            self.has_focus = focused;
            self.state.needs_render = true;
        }
    }

    // ── Input ────────────────────────────────────────────────────────────────

    /// The one externally driven mutation path.  Unhandled
    /// action/mode combinations fall through as no-ops.
    pub fn handle_action(&mut self, action: Action, now: Instant) {
        if !self.running {
            return;
        }

        match (self.state.mode, action) {
            (Mode::NotStarted, Action::Shoot)
            | (Mode::GameOver, Action::Shoot)
            | (Mode::LevelComplete, Action::Shoot) => self.begin_level(now),

            (Mode::Playing, Action::Pause) => {
                self.state.mode = Mode::Paused;
                self.state.needs_render = true;
                // Freeze the formation; the frame tick keeps running so the
                // paused banner still renders.
                self.alien_due = None;
            }
            (Mode::Paused, Action::Pause) => {
                self.state.mode = Mode::Playing;
                self.state.needs_render = true;
                // Resume from the frozen position — no catch-up ticks.
                self.alien_due = Some(now + alien_tick_period(self.state.level));
            }

            (Mode::Playing, Action::MoveLeft) => self.state = move_player_left(&self.state),
            (Mode::Playing, Action::MoveRight) => self.state = move_player_right(&self.state),
            (Mode::Playing, Action::Shoot) => {
                if !self.state.laser_active {
                    self.state = fire_laser(&self.state, now);
                    self.laser_clear = Some(Pending {
                        due: now + LASER_DURATION,
                        epoch: self.epoch,
                    });
                }
            }

            _ => {}
        }
    }

    fn begin_level(&mut self, now: Instant) {
        self.epoch += 1;
        self.laser_clear = None;
        self.state = start_level(&self.state);
        self.alien_due = Some(now + alien_tick_period(self.state.level));
    }

    // ── Scheduling ───────────────────────────────────────────────────────────

    /// Fire everything that has come due.  Late deadlines coalesce: each
    /// activity runs at most once per poll and reschedules relative to
    /// `now`, so a host that fell behind doesn't replay a burst of ticks.
    pub fn poll(&mut self, now: Instant, rng: &mut impl Rng) {
        if !self.running {
            return;
        }

        if let Some(pending) = self.laser_clear {
            if now >= pending.due {
                self.laser_clear = None;
                if pending.epoch == self.epoch {
                    self.state.laser_active = false;
                    self.state.needs_render = true;
                }
            }
        }

        if let Some(due) = self.alien_due {
            if now >= due {
                self.advance_aliens();
                if self.state.mode == Mode::Playing {
                    self.alien_due = Some(now + alien_tick_period(self.state.level));
                }
            }
        }

        if let Some(due) = self.frame_due {
            if now >= due {
                self.advance_frame(now, rng);
                self.frame_due = Some(now + FRAME_PERIOD);
            }
        }
    }

    /// One alien-movement tick.  Public so hosts and tests can drive the
    /// march directly; a no-op outside of play.
    pub fn advance_aliens(&mut self) {
        if !self.running {
            return;
        }
        self.state = advance_aliens(&self.state);
    }

    /// One frame tick: rotate the ambient message, settle explosions and
    /// hit aliens, and apply the win/lose transitions.
    pub fn advance_frame(&mut self, now: Instant, rng: &mut impl Rng) {
        if !self.running {
            return;
        }

        if self.messages.tick(now, rng) {
            self.state.needs_render = true;
        }

        let was_playing = self.state.mode == Mode::Playing;
        self.state = settle_frame(&self.state, now);
        if was_playing && self.state.mode != Mode::Playing {
            // Game over or level complete: halt the march until the next
            // shot re-initializes the level.
            self.alien_due = None;
        }
    }

    // ── Render contract ──────────────────────────────────────────────────────

    /// Whether a render is owed before the next skip-eligible frame.
    pub fn needs_render(&self) -> bool {
        self.state.needs_render
    }

    /// The presenter calls this once it has drawn the current snapshot.
    pub fn mark_rendered(&mut self) {
        self.state.needs_render = false;
    }

    /// Classify every grid cell and bundle it with the status fields.
    pub fn snapshot(&self) -> Snapshot {
        let mut cells = Vec::with_capacity((self.state.width * self.state.height) as usize);
        for y in 0..self.state.height {
            for x in 0..self.state.width {
                cells.push(cell_at(&self.state, x, y));
            }
        }
        Snapshot {
            width: self.state.width,
            height: self.state.height,
            cells,
            mode: self.state.mode,
            level: self.state.level,
            score: self.state.score,
            has_focus: self.has_focus,
            message: self.messages.current(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
