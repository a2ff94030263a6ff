use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use console_invaders::display;
use console_invaders::engine::Engine;
use console_invaders::entities::Action;

/// How often the outer loop wakes up to drain input and pump the engine.
/// The engine times its own frame and alien ticks; this only bounds input
/// latency.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut engine = Engine::new();
    engine.start(Instant::now());

    loop {
        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => {
                    // Press and OS key-repeat both count; releases don't
                    if kind == KeyEventKind::Release {
                        continue;
                    }
                    let now = Instant::now();
                    match code {
                        KeyCode::Left => engine.handle_action(Action::MoveLeft, now),
                        KeyCode::Right => engine.handle_action(Action::MoveRight, now),
                        KeyCode::Char(' ') => engine.handle_action(Action::Shoot, now),
                        KeyCode::Char('p') | KeyCode::Char('P') => {
                            engine.handle_action(Action::Pause, now)
                        }
                        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                            engine.stop();
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            engine.stop();
                            return Ok(());
                        }
                        _ => {}
                    }
                }
                Event::FocusGained => engine.set_focus(true),
                Event::FocusLost => engine.set_focus(false),
                _ => {}
            }
        }

        engine.poll(Instant::now(), &mut rng);

        if engine.needs_render() {
            display::render(out, &engine.snapshot())?;
            engine.mark_rendered();
        }

        thread::sleep(POLL_INTERVAL);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableFocusChange)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(DisableFocusChange);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
