//! Fixed timestep simulation tick
//!
//! Advances the game by one 60 Hz step. Per-tick constants (pan step, score
//! increment) are deliberately not scaled by wall time; the accumulator in the
//! platform layer pins the tick rate to real time.

use glam::Vec2;

use super::state::{GamePhase, GameState, Playfield, Speaker};
use crate::consts::*;

/// Directions held for a single tick, sampled once from the input layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one fixed timestep.
///
/// No-op once the run has ended; only an explicit reset re-enters `Playing`.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.time_ms += TICK_MS;

    pan_frame(state, input);

    if state.time_ms > state.next_direction_change_at {
        state.resample_velocity();
        state.schedule_direction_change();
    }

    state.speaker.rect.x += state.speaker.vel.x;
    state.speaker.rect.y += state.speaker.vel.y;
    bounce(&mut state.speaker, &state.playfield);

    let contained = state.speaker.rect.overlaps(&state.frame);
    if !contained && !state.invincible() {
        state.lives -= 1;
        state.last_life_lost_at = Some(state.time_ms);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
        }
    }

    if contained {
        state.score += SCORE_PER_TICK;
    }
}

/// Move the frame by the fixed pan step per held direction, clamped to the
/// playfield. Opposite holds cancel; diagonal holds combine additively.
fn pan_frame(state: &mut GameState, input: &TickInput) {
    let mut delta = Vec2::ZERO;
    if input.up {
        delta.y -= CAMERA_SPEED;
    }
    if input.down {
        delta.y += CAMERA_SPEED;
    }
    if input.left {
        delta.x -= CAMERA_SPEED;
    }
    if input.right {
        delta.x += CAMERA_SPEED;
    }
    if delta != Vec2::ZERO {
        state.frame.x += delta.x;
        state.frame.y += delta.y;
        state
            .frame
            .clamp_within(state.playfield.width, state.playfield.height);
    }
}

/// Elastic wall reflection: clamp the crossed edge back to the bound and
/// negate that axis's velocity. Axes are independent.
fn bounce(speaker: &mut Speaker, playfield: &Playfield) {
    if speaker.rect.x < 0.0 {
        speaker.rect.x = 0.0;
        speaker.vel.x = -speaker.vel.x;
    } else if speaker.rect.right() > playfield.width {
        speaker.rect.x = playfield.width - speaker.rect.width;
        speaker.vel.x = -speaker.vel.x;
    }

    if speaker.rect.y < 0.0 {
        speaker.rect.y = 0.0;
        speaker.vel.y = -speaker.vel.y;
    } else if speaker.rect.bottom() > playfield.height {
        speaker.rect.y = playfield.height - speaker.rect.height;
        speaker.vel.y = -speaker.vel.y;
    }
}
