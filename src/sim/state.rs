//! Game state and core simulation types
//!
//! One explicit record holds everything the simulation mutates; the platform
//! layer observes it and never reaches around it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only an explicit reset leaves this state
    GameOver,
}

/// Fixed bounding rectangle for the whole scene
#[derive(Debug, Clone, Copy)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

/// The bouncing sprite the player must keep in frame
#[derive(Debug, Clone, Copy)]
pub struct Speaker {
    pub rect: Rect,
    /// Units per tick, per axis
    pub vel: Vec2,
}

/// Complete game state, mutated only by [`tick`](super::tick::tick)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub playfield: Playfield,
    /// Player-controlled camera frame; size is fixed, position is panned
    pub frame: Rect,
    pub speaker: Speaker,
    pub lives: u8,
    pub score: f64,
    pub phase: GamePhase,
    /// Simulation clock in milliseconds, advanced by the tick itself
    pub time_ms: f64,
    /// When the next random velocity resample is due
    pub next_direction_change_at: f64,
    /// Set on each life loss; `None` until the first one
    pub last_life_lost_at: Option<f64>,
}

impl GameState {
    /// Create a fresh run: frame and speaker centered, full lives, zero score,
    /// speaker velocity seeded and the first resample scheduled.
    pub fn new(seed: u64) -> Self {
        let playfield = Playfield {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        };
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            playfield,
            frame: Rect::centered_in(FRAME_WIDTH, FRAME_HEIGHT, playfield.width, playfield.height),
            speaker: Speaker {
                rect: Rect::centered_in(
                    SPEAKER_WIDTH,
                    SPEAKER_HEIGHT,
                    playfield.width,
                    playfield.height,
                ),
                vel: Vec2::ZERO,
            },
            lives: TOTAL_LIVES,
            score: 0.0,
            phase: GamePhase::Playing,
            time_ms: 0.0,
            next_direction_change_at: 0.0,
            last_life_lost_at: None,
        };
        state.resample_velocity();
        state.schedule_direction_change();
        state
    }

    /// Redraw both velocity components: uniform magnitude in
    /// `[SPEAKER_MIN_SPEED, SPEAKER_MAX_SPEED)`, equiprobable sign, per axis.
    pub fn resample_velocity(&mut self) {
        let x = random_component(&mut self.rng);
        let y = random_component(&mut self.rng);
        self.speaker.vel = Vec2::new(x, y);
    }

    /// Schedule the next resample a random interval from now
    pub fn schedule_direction_change(&mut self) {
        let delay = self
            .rng
            .random_range(DIRECTION_CHANGE_MIN_MS..DIRECTION_CHANGE_MAX_MS);
        self.next_direction_change_at = self.time_ms + delay;
    }

    /// Within the post-life-loss window during which no further life is lost
    pub fn invincible(&self) -> bool {
        self.last_life_lost_at
            .is_some_and(|t| self.time_ms - t < INVINCIBLE_PERIOD_MS)
    }

    /// Alternates every [`FLASH_INTERVAL_MS`] while invincible; the renderer
    /// maps `true` to the alternate outline color.
    pub fn flash_on(&self) -> bool {
        match self.last_life_lost_at {
            Some(t) if self.time_ms - t < INVINCIBLE_PERIOD_MS => {
                ((self.time_ms - t) / FLASH_INTERVAL_MS) as u64 % 2 == 1
            }
            _ => false,
        }
    }
}

fn random_component(rng: &mut Pcg32) -> f32 {
    let magnitude = rng.random_range(SPEAKER_MIN_SPEED..SPEAKER_MAX_SPEED);
    if rng.random_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_initial_layout() {
        let state = GameState::new(7);
        assert_eq!(state.lives, TOTAL_LIVES);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.frame.x, 250.0);
        assert_eq!(state.frame.y, 200.0);
        assert_eq!(state.speaker.rect.x, 350.0);
        assert_eq!(state.speaker.rect.y, 200.0);
        assert!(state.last_life_lost_at.is_none());
        assert!(!state.invincible());
    }

    #[test]
    fn test_velocity_within_bounds() {
        for seed in 0..50 {
            let mut state = GameState::new(seed);
            for _ in 0..10 {
                state.resample_velocity();
                for component in [state.speaker.vel.x, state.speaker.vel.y] {
                    let mag = component.abs();
                    assert!(
                        (SPEAKER_MIN_SPEED..SPEAKER_MAX_SPEED).contains(&mag),
                        "magnitude {mag} out of bounds for seed {seed}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_schedule_window() {
        let mut state = GameState::new(3);
        state.time_ms = 10_000.0;
        for _ in 0..50 {
            state.schedule_direction_change();
            let delay = state.next_direction_change_at - state.time_ms;
            assert!((DIRECTION_CHANGE_MIN_MS..DIRECTION_CHANGE_MAX_MS).contains(&delay));
        }
    }

    #[test]
    fn test_same_seed_same_run() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        assert_eq!(a.speaker.vel, b.speaker.vel);
        assert_eq!(a.next_direction_change_at, b.next_direction_change_at);
    }

    #[test]
    fn test_flash_alternates_within_window() {
        let mut state = GameState::new(1);
        state.time_ms = 5000.0;
        state.last_life_lost_at = Some(5000.0);

        state.time_ms = 5100.0; // first interval
        assert!(!state.flash_on());
        state.time_ms = 5300.0; // second interval
        assert!(state.flash_on());
        state.time_ms = 5500.0;
        assert!(!state.flash_on());

        state.time_ms = 5000.0 + INVINCIBLE_PERIOD_MS + 1.0;
        assert!(!state.flash_on());
        assert!(!state.invincible());
    }
}
