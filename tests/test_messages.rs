use console_invaders::messages::{MessageTicker, NOSTALGIC_MESSAGES};

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn first_tick_only_seeds_the_timer() {
    let t0 = Instant::now();
    let mut ticker = MessageTicker::new();
    let changed = ticker.tick(t0, &mut seeded_rng());
    assert!(!changed);
    assert!(ticker.current().is_none());
}

#[test]
fn nothing_shows_before_the_minimum_gap() {
    let t0 = Instant::now();
    let mut rng = seeded_rng();
    let mut ticker = MessageTicker::new();
    ticker.tick(t0, &mut rng);

    // The gap is at least 8 seconds
    ticker.tick(t0 + secs(7), &mut rng);
    assert!(ticker.current().is_none());
}

#[test]
fn a_message_appears_within_the_window() {
    let t0 = Instant::now();
    let mut rng = seeded_rng();
    let mut ticker = MessageTicker::new();
    ticker.tick(t0, &mut rng);

    // The gap is at most 20 seconds
    let changed = ticker.tick(t0 + secs(21), &mut rng);
    assert!(changed);
    let msg = ticker.current().expect("a message should be showing");
    assert!(NOSTALGIC_MESSAGES.contains(&msg));
}

#[test]
fn a_message_expires_after_three_seconds() {
    let t0 = Instant::now();
    let mut rng = seeded_rng();
    let mut ticker = MessageTicker::new();
    ticker.tick(t0, &mut rng);
    ticker.tick(t0 + secs(21), &mut rng);
    let t_shown = t0 + secs(21);

    ticker.tick(t_shown + Duration::from_millis(2900), &mut rng);
    assert!(ticker.current().is_some());

    let changed = ticker.tick(t_shown + secs(3), &mut rng);
    assert!(changed);
    assert!(ticker.current().is_none());
}

#[test]
fn messages_keep_their_distance() {
    let t0 = Instant::now();
    let mut rng = seeded_rng();
    let mut ticker = MessageTicker::new();
    ticker.tick(t0, &mut rng);
    ticker.tick(t0 + secs(21), &mut rng);
    let t_shown = t0 + secs(21);

    // Gone at +3s, and the next one can't start before 8s since the last
    ticker.tick(t_shown + secs(3), &mut rng);
    ticker.tick(t_shown + secs(7), &mut rng);
    assert!(ticker.current().is_none());

    ticker.tick(t_shown + secs(21), &mut rng);
    assert!(ticker.current().is_some());
}

#[test]
fn selection_is_deterministic_with_a_seeded_rng() {
    let t0 = Instant::now();

    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ticker = MessageTicker::new();
        ticker.tick(t0, &mut rng);
        ticker.tick(t0 + secs(21), &mut rng);
        ticker.current()
    };

    assert_eq!(run(7), run(7));
}
