//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (the sim advances its own clock)
//! - Seeded RNG only
//! - No rendering, DOM, or storage dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{GamePhase, GameState, Playfield, Speaker};
pub use tick::{TickInput, tick};
