//! Idle/demo mode: computer-controlled input
//!
//! Chases whichever active coin is closest to the ground.

use super::state::GameState;
use super::tick::TickInput;

/// Don't twitch when already roughly underneath the target
const DEAD_ZONE: f32 = 4.0;

/// Input that steers the gopher under the lowest falling coin
pub fn autopilot_input<S>(state: &GameState<S>) -> TickInput {
    let half_coin = state.pool.spec().size.x / 2.0;
    let target = state
        .pool
        .active()
        .max_by(|(_, a), (_, b)| a.pos.y.total_cmp(&b.pos.y))
        .map(|(_, coin)| coin.pos.x + half_coin);

    let Some(target) = target else {
        return TickInput::default();
    };

    let offset = target - state.player.center_x();
    TickInput {
        left: offset < -DEAD_ZONE,
        right: offset > DEAD_ZONE,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::source::SequenceSource;
    use crate::sim::tick::tick;
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[test]
    fn test_heads_for_lowest_coin() {
        let mut state =
            GameState::with_source(Tuning::default(), SequenceSource::new([600])).expect("valid");
        state.pool.place(0, Vec2::new(600.0, 0.0));
        state.pool.place(1, Vec2::new(0.0, 300.0));
        assert_eq!(autopilot_input(&state), TickInput::left());

        state.pool.deactivate(1);
        assert_eq!(autopilot_input(&state), TickInput::right());
    }

    #[test]
    fn test_idle_when_nothing_falls() {
        let mut state = GameState::new(1);
        state.pool.deactivate(0);
        assert_eq!(autopilot_input(&state), TickInput::default());
    }

    #[test]
    fn test_autopilot_catches_coins() {
        let mut state = GameState::new(2024);
        for _ in 0..(60 * 60) {
            let input = autopilot_input(&state);
            let _ = tick(&mut state, &input, SIM_DT);
        }
        // The gopher covers the screen in under 1.5s, so nothing is missed
        assert!(state.score > 20);
        assert_eq!(state.resets, 0);
        assert_eq!(state.lives, Some(3));
    }
}
