//! Console Invaders — a tick-driven Space Invaders engine for the terminal.
//!
//! The library is the whole game: pure data in [`entities`], pure transition
//! functions in [`compute`], cooperative scheduling in [`engine`], the
//! cosmetic status-line ticker in [`messages`], and a crossterm presenter in
//! [`display`].  The binary is thin glue that maps key events to
//! [`entities::Action`]s and pumps the engine.

pub mod compute;
pub mod display;
pub mod engine;
pub mod entities;
pub mod messages;
