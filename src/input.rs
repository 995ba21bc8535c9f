//! Held-direction flags and expiring swipe pulses
//!
//! Event closures only flip flags here; the game loop samples the whole thing
//! once per frame into a [`TickInput`]. Swipes don't use a delayed clear:
//! each pulse records its own expiry timestamp and a newer swipe replaces any
//! pulse still pending, so opposite swipes in quick succession can't race a
//! stale clear-timer.

use crate::consts::{SWIPE_MIN_DISTANCE, SWIPE_PULSE_MS};
use crate::sim::TickInput;

/// The four pan directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Aggregated input flags, shared between event closures and the game loop
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Directions held via keyboard or touch buttons
    held: [bool; 4],
    /// Swipe pulses: expiry timestamp per direction, if one is pending
    pulses: [Option<f64>; 4],
    /// Where the current touch began, for swipe recognition
    swipe_origin: Option<(f32, f32)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. Returns `true` if the key is one of the 12
    /// recognized bindings (arrows plus both cases of WASD), so the caller
    /// knows whether to swallow the event.
    pub fn key_down(&mut self, key: &str) -> bool {
        match Self::bind(key) {
            Some(dir) => {
                self.press(dir);
                true
            }
            None => false,
        }
    }

    /// Handle a key release. Same recognition rules as [`key_down`](Self::key_down).
    pub fn key_up(&mut self, key: &str) -> bool {
        match Self::bind(key) {
            Some(dir) => {
                self.release(dir);
                true
            }
            None => false,
        }
    }

    fn bind(key: &str) -> Option<Direction> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Hold a direction (key down, button press)
    pub fn press(&mut self, dir: Direction) {
        self.held[dir.index()] = true;
    }

    /// Release a direction (key up, button release)
    pub fn release(&mut self, dir: Direction) {
        self.held[dir.index()] = false;
    }

    /// Record where a touch started, for swipe recognition on release
    pub fn begin_swipe(&mut self, x: f32, y: f32) {
        self.swipe_origin = Some((x, y));
    }

    /// Finish a swipe gesture. Emits a pulse when the travel beats the
    /// threshold: dominant axis wins, ties go horizontal. Any pending pulse
    /// is replaced. Returns the pulsed direction, if any.
    pub fn end_swipe(&mut self, x: f32, y: f32, now: f64) -> Option<Direction> {
        let (ox, oy) = self.swipe_origin.take()?;
        let dx = x - ox;
        let dy = y - oy;

        let dir = if dx.abs() >= dy.abs() {
            if dx.abs() < SWIPE_MIN_DISTANCE {
                return None;
            }
            if dx > 0.0 { Direction::Right } else { Direction::Left }
        } else {
            if dy.abs() < SWIPE_MIN_DISTANCE {
                return None;
            }
            if dy > 0.0 { Direction::Down } else { Direction::Up }
        };

        self.pulses = [None; 4];
        self.pulses[dir.index()] = Some(now + SWIPE_PULSE_MS);
        Some(dir)
    }

    /// Drop all held flags and pending pulses (game restart)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the effective directions for one tick
    pub fn sample(&self, now: f64) -> TickInput {
        let active = |dir: Direction| {
            self.held[dir.index()] || self.pulses[dir.index()].is_some_and(|expiry| now < expiry)
        };
        TickInput {
            up: active(Direction::Up),
            down: active(Direction::Down),
            left: active(Direction::Left),
            right: active(Direction::Right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_twelve_keys_recognized() {
        let mut input = InputState::new();
        for key in [
            "ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", "w", "a", "s", "d", "W", "A", "S",
            "D",
        ] {
            assert!(input.key_down(key), "{key} should be recognized");
            assert!(input.key_up(key));
        }
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = InputState::new();
        for key in ["x", "Escape", " ", "Enter", "ArrowUpLeft"] {
            assert!(!input.key_down(key));
        }
        assert_eq!(input.sample(0.0), TickInput::default());
    }

    #[test]
    fn test_case_variants_share_a_flag() {
        let mut input = InputState::new();
        input.key_down("w");
        assert!(input.sample(0.0).up);
        // Release via the other case still clears the direction
        input.key_up("W");
        assert!(!input.sample(0.0).up);
    }

    #[test]
    fn test_hold_and_release() {
        let mut input = InputState::new();
        input.press(Direction::Left);
        input.press(Direction::Down);
        let sampled = input.sample(0.0);
        assert!(sampled.left && sampled.down);
        assert!(!sampled.up && !sampled.right);

        input.release(Direction::Left);
        assert!(!input.sample(0.0).left);
        assert!(input.sample(0.0).down);
    }

    #[test]
    fn test_swipe_below_threshold_ignored() {
        let mut input = InputState::new();
        input.begin_swipe(100.0, 100.0);
        assert_eq!(input.end_swipe(120.0, 110.0, 0.0), None);
        assert_eq!(input.sample(0.0), TickInput::default());
    }

    #[test]
    fn test_swipe_dominant_axis_wins() {
        let mut input = InputState::new();
        input.begin_swipe(100.0, 100.0);
        assert_eq!(input.end_swipe(110.0, 180.0, 0.0), Some(Direction::Down));
        assert!(input.sample(100.0).down);
    }

    #[test]
    fn test_swipe_tie_goes_horizontal() {
        let mut input = InputState::new();
        input.begin_swipe(0.0, 0.0);
        assert_eq!(input.end_swipe(-40.0, 40.0, 0.0), Some(Direction::Left));
    }

    #[test]
    fn test_pulse_expires() {
        let mut input = InputState::new();
        input.begin_swipe(0.0, 0.0);
        input.end_swipe(50.0, 0.0, 1000.0);
        assert!(input.sample(1000.0).right);
        assert!(input.sample(1299.0).right);
        assert!(!input.sample(1300.0).right);
    }

    #[test]
    fn test_new_swipe_replaces_pending_pulse() {
        let mut input = InputState::new();
        input.begin_swipe(0.0, 0.0);
        input.end_swipe(50.0, 0.0, 1000.0);

        // Opposite swipe lands before the first pulse would have expired
        input.begin_swipe(50.0, 0.0);
        input.end_swipe(0.0, 0.0, 1100.0);

        let sampled = input.sample(1150.0);
        assert!(sampled.left);
        assert!(!sampled.right);
        // The replacement pulse runs its own full window
        assert!(input.sample(1399.0).left);
        assert!(!input.sample(1400.0).left);
    }

    #[test]
    fn test_pulse_does_not_clear_held_keys() {
        let mut input = InputState::new();
        input.key_down("ArrowUp");
        input.begin_swipe(0.0, 0.0);
        input.end_swipe(50.0, 0.0, 0.0);

        let sampled = input.sample(100.0);
        assert!(sampled.up);
        assert!(sampled.right);
    }

    #[test]
    fn test_end_swipe_without_begin_is_noop() {
        let mut input = InputState::new();
        assert_eq!(input.end_swipe(500.0, 0.0, 0.0), None);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut input = InputState::new();
        input.key_down("a");
        input.begin_swipe(0.0, 0.0);
        input.end_swipe(50.0, 0.0, 0.0);
        input.clear();
        assert_eq!(input.sample(100.0), TickInput::default());
    }
}
