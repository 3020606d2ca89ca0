//! Fixed-increment simulation tick
//!
//! Advances the game by exactly one frame. Physics runs in per-tick units
//! (px/tick, px/tick²), so replaying the same inputs always reproduces the
//! same trajectory regardless of the host's frame rate.

use glam::DVec2;

use super::collision::{
    BlockHit, HitAxis, fell_out, find_block_hit, hits_ceiling, hits_paddle, hits_side_wall,
};
use super::energy::enforce_energy_conservation;
use super::state::{GameEvent, GamePhase, GameState, Surface};
use crate::consts::*;
use crate::settings::PaddleDeflection;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
    /// Launch key went down this tick
    pub launch: bool,
    /// Restart key went down this tick
    pub restart: bool,
}

/// Advance the game state by one tick
pub fn advance(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Ended runs only listen for restart
    if state.phase.is_ended() {
        if input.restart {
            log::info!("Restarting (final score {})", state.score);
            state.restart();
        }
        return;
    }

    // Paddle moves in every live phase, including before launch
    if input.left {
        state.paddle.shift(-PADDLE_STEP);
    }
    if input.right {
        state.paddle.shift(PADDLE_STEP);
    }

    if state.phase == GamePhase::NotStarted {
        if input.launch {
            state.phase = GamePhase::Playing;
            state.events.push(GameEvent::Launched);
            log::info!("Ball launched");
        }
        return;
    }

    state.time_ticks += 1;

    state.ball.snapshot();
    state.ball.integrate(GRAVITY);

    resolve_walls(state);
    resolve_paddle(state);
    resolve_blocks(state);

    check_terminal(state);
}

/// Side walls and ceiling: flip the velocity component and roll back to the
/// pre-move coordinate (not clamped to the boundary)
fn resolve_walls(state: &mut GameState) {
    let ball = &mut state.ball;

    if hits_side_wall(ball.pos.x) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = ball.prev_pos.x;
        enforce_energy_conservation(ball.pos, &mut ball.vel, state.initial_energy);
        state.events.push(GameEvent::Bounced(Surface::Wall));
    }

    if hits_ceiling(ball.pos.y) {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.prev_pos.y;
        enforce_energy_conservation(ball.pos, &mut ball.vel, state.initial_energy);
        state.events.push(GameEvent::Bounced(Surface::Ceiling));
    }
}

fn resolve_paddle(state: &mut GameState) {
    let paddle = state.paddle.rect();
    if !hits_paddle(&state.ball.rect(), &paddle) {
        return;
    }

    let ball = &mut state.ball;
    ball.vel.y = -ball.vel.y;
    if state.settings.paddle_deflection == PaddleDeflection::Angled {
        let offset = paddle.center().x - ball.rect().center().x;
        ball.vel.x = -offset * DEFLECTION_FACTOR;
    }
    // Sit flush on top of the paddle
    ball.pos.y = paddle.top() - BALL_SIZE;

    enforce_energy_conservation(ball.pos, &mut ball.vel, state.initial_energy);
    state.events.push(GameEvent::Bounced(Surface::Paddle));
}

/// At most one block is destroyed per tick
fn resolve_blocks(state: &mut GameState) {
    let prev = state.ball.prev_rect();
    let curr = state.ball.rect();
    let Some(hit) = find_block_hit(&state.blocks, &prev, &curr) else {
        return;
    };

    if state.blocks.destroy(hit.row, hit.col) {
        state.score += BLOCK_SCORE;
        state.events.push(GameEvent::BlockDestroyed {
            row: hit.row,
            col: hit.col,
        });
        log::debug!(
            "Block ({}, {}) destroyed, {:?} hit, score {}",
            hit.row,
            hit.col,
            hit.axis,
            state.score
        );
    }

    bounce_off_block(&mut state.ball.pos, &mut state.ball.vel, &hit);
    enforce_energy_conservation(state.ball.pos, &mut state.ball.vel, state.initial_energy);
    state.events.push(GameEvent::Bounced(Surface::Block));
}

/// Flip the velocity for the face that was hit and snap the ball flush
/// against that face so it can't sink into the block
fn bounce_off_block(pos: &mut DVec2, vel: &mut DVec2, hit: &BlockHit) {
    match hit.axis {
        HitAxis::Horizontal => {
            vel.x = -vel.x;
            pos.x = if vel.x > 0.0 {
                hit.cell.right()
            } else {
                hit.cell.left() - BALL_SIZE
            };
        }
        HitAxis::Vertical => {
            vel.y = -vel.y;
            pos.y = if vel.y > 0.0 {
                hit.cell.bottom()
            } else {
                hit.cell.top() - BALL_SIZE
            };
        }
    }
}

/// Clearing the board wins even if the ball also fell out on the same tick
fn check_terminal(state: &mut GameState) {
    if state.blocks.all_destroyed() {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won);
        log::info!("All blocks cleared! Score {}", state.score);
    } else if fell_out(state.ball.pos.y) {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!("Game over at tick {} with score {}", state.time_ticks, state.score);
    }
}
