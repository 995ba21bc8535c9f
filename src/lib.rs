//! Speaker Cam - a camera-operator arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, containment, game state)
//! - `renderer`: Canvas-2D drawing adapter
//! - `input`: Held-direction flags and expiring swipe pulses
//! - `highscore`: Persisted best-score scalar
//! - `settings`: User preferences

pub mod highscore;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscore::HighScore;
pub use input::InputState;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation runs at a fixed 60 Hz, matching the original per-frame tuning
    pub const TICK_MS: f64 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Camera frame dimensions (fixed; only its position is player-controlled)
    pub const FRAME_WIDTH: f32 = 300.0;
    pub const FRAME_HEIGHT: f32 = 200.0;
    /// Frame pan step per tick while a direction is held
    pub const CAMERA_SPEED: f32 = 10.0;
    /// Stroke width of the frame outline
    pub const FRAME_OUTLINE_WIDTH: f64 = 3.0;

    /// Speaker sprite dimensions
    pub const SPEAKER_WIDTH: f32 = 100.0;
    pub const SPEAKER_HEIGHT: f32 = 200.0;
    /// Speaker velocity magnitude bounds, per axis per tick
    pub const SPEAKER_MIN_SPEED: f32 = 1.0;
    pub const SPEAKER_MAX_SPEED: f32 = 5.0;
    /// Interval bounds between random direction changes
    pub const DIRECTION_CHANGE_MIN_MS: f64 = 1000.0;
    pub const DIRECTION_CHANGE_MAX_MS: f64 = 5000.0;

    pub const TOTAL_LIVES: u8 = 3;
    /// No further life can be lost within this window after a loss
    pub const INVINCIBLE_PERIOD_MS: f64 = 2000.0;
    /// Frame outline alternates color at this interval while invincible
    pub const FLASH_INTERVAL_MS: f64 = 200.0;
    /// Score gained per tick while the speaker is in frame (~1/s at 60 Hz)
    pub const SCORE_PER_TICK: f64 = 1.0 / 60.0;

    /// Minimum swipe travel before a pulse is emitted
    pub const SWIPE_MIN_DISTANCE: f32 = 30.0;
    /// How long a swipe holds its direction
    pub const SWIPE_PULSE_MS: f64 = 300.0;
}
