//! Nostalgic status-line messages.
//!
//! Purely cosmetic: the ticker decides which one-liner (if any) accompanies
//! a render, and never touches game state.  All randomness comes through an
//! injected RNG so tests can seed it.

use std::time::{Duration, Instant};

use rand::Rng;

pub const NOSTALGIC_MESSAGES: &[&str] = &[
    "The cake is a lie.",
    "All your base are belong to us.",
    "Winner winner chicken dinner!",
    "Get over here!",
    "Insert coin to continue.",
    "Game over man, game over!",
    "Do a barrel roll!",
    "Snake? Snake?! SNAAAAKE!",
    "But can it run Doom?",
    "Loading... please wait.",
    "The truth is out there.",
    "Phone home.",
    "Take me to your leader.",
    "Area 51 is real.",
    "Trust the plan!",
    "Make console great again!",
];

/// How long a message stays on screen.
pub const MESSAGE_DURATION: Duration = Duration::from_secs(3);

/// Gap before the next message becomes eligible: 8s plus up to 12s of jitter.
const GAP_FLOOR: Duration = Duration::from_secs(8);
const GAP_JITTER_MS: u64 = 12_000;

/// Picks a message every so often and retires it after `MESSAGE_DURATION`.
///
/// The very first tick never shows anything — it only seeds the timer, so a
/// freshly started game doesn't open with a random quip.
#[derive(Clone, Debug)]
pub struct MessageTicker {
    last_shown: Option<Instant>,
    gap: Duration,
    current: Option<(&'static str, Instant)>,
}

impl MessageTicker {
    pub fn new() -> Self {
        MessageTicker {
            last_shown: None,
            gap: GAP_FLOOR,
            current: None,
        }
    }

    /// Advance the ticker.  Returns true when the visible text changed
    /// (a message appeared or expired), i.e. when a redraw is owed.
    pub fn tick(&mut self, now: Instant, rng: &mut impl Rng) -> bool {
        let mut changed = false;

        if let Some((_, shown_at)) = self.current {
            if now.duration_since(shown_at) >= MESSAGE_DURATION {
                self.current = None;
                changed = true;
            }
        }

        match self.last_shown {
            None => {
                self.last_shown = Some(now);
                self.gap = pick_gap(rng);
            }
            Some(last) => {
                if self.current.is_none() && now.duration_since(last) >= self.gap {
                    let msg = NOSTALGIC_MESSAGES[rng.gen_range(0..NOSTALGIC_MESSAGES.len())];
                    self.current = Some((msg, now));
                    self.last_shown = Some(now);
                    self.gap = pick_gap(rng);
                    changed = true;
                }
            }
        }

        changed
    }

    /// The message currently on screen, if any.
    pub fn current(&self) -> Option<&'static str> {
        self.current.map(|(msg, _)| msg)
    }
}

impl Default for MessageTicker {
    fn default() -> Self {
        Self::new()
    }
}

fn pick_gap(rng: &mut impl Rng) -> Duration {
    GAP_FLOOR + Duration::from_millis(rng.gen_range(0..GAP_JITTER_MS))
}
