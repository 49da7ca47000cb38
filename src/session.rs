//! Fixed timestep driver
//!
//! Turns variable frame times from the frontend's frame pump into a whole
//! number of fixed simulation ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameEvent, GameState, SpawnSource, TickInput, TickStatus, tick};

/// Whether the frontend should keep pumping frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Quit,
}

/// A running game plus the time it still owes the simulation
#[derive(Debug)]
pub struct Session<S> {
    pub state: GameState<S>,
    accumulator: f32,
    /// Events from every tick run during the last frame
    events: Vec<GameEvent>,
    /// Pool exhaustion faults seen so far
    faults: u32,
}

impl<S: SpawnSource> Session<S> {
    pub fn new(state: GameState<S>) -> Self {
        log::info!("Session started");
        Self {
            state,
            accumulator: 0.0,
            events: Vec::new(),
            faults: 0,
        }
    }

    /// Run as many fixed ticks as `frame_dt` pays for
    ///
    /// Frame time is capped so a long stall doesn't trigger a burst of
    /// catch-up ticks. Pool exhaustion faults leave the state consistent, so
    /// they are logged and counted and the session keeps going.
    pub fn update(&mut self, frame_dt: f32, input: &TickInput) -> SessionStatus {
        self.events.clear();
        if input.quit {
            log::info!("Session quit with score {}", self.state.score);
            return SessionStatus::Quit;
        }

        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            match tick(&mut self.state, input, SIM_DT) {
                Ok(TickStatus::Running) => {}
                Ok(TickStatus::Quit) => return SessionStatus::Quit,
                Err(err) => {
                    self.faults += 1;
                    log::warn!("Tick {}: {err}", self.state.time_ticks);
                }
            }
            self.events.extend_from_slice(self.state.events());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        SessionStatus::Running
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn faults(&self) -> u32 {
        self.faults
    }

    /// Fraction of a tick left in the accumulator
    pub fn alpha(&self) -> f32 {
        self.accumulator / SIM_DT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SequenceSource;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn session() -> Session<SequenceSource> {
        let state = GameState::with_source(Tuning::default(), SequenceSource::new([0]))
            .expect("valid tuning");
        Session::new(state)
    }

    #[test]
    fn test_runs_whole_ticks_only() {
        let mut session = session();
        let input = TickInput::default();

        session.update(SIM_DT * 2.5, &input);
        assert_eq!(session.state.time_ticks, 2);
        assert!(session.alpha() > 0.4 && session.alpha() < 0.6);

        session.update(SIM_DT * 0.6, &input);
        assert_eq!(session.state.time_ticks, 3);
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut session = session();
        session.update(5.0, &TickInput::default());
        // 0.1s worth of 60 Hz ticks, give or take float rounding
        let ticks = session.state.time_ticks;
        assert!((5..=6).contains(&ticks));
        assert!(ticks <= u64::from(MAX_SUBSTEPS));
    }

    #[test]
    fn test_quit_stops_session() {
        let mut session = session();
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        assert_eq!(session.update(SIM_DT, &input), SessionStatus::Quit);
        assert_eq!(session.state.time_ticks, 0);
    }

    #[test]
    fn test_pool_exhaustion_is_survived() {
        let mut session = session();
        for slot in 0..session.state.pool.capacity() {
            session.state.pool.place(slot, Vec2::new(0.0, -1000.0));
        }
        session.state.spawner.cooldown = 0.0;

        let status = session.update(SIM_DT * 3.0, &TickInput::default());
        assert_eq!(status, SessionStatus::Running);
        assert!(session.faults() >= 2);
        assert_eq!(session.state.spawner.cooldown, 0.0);
        assert_eq!(session.state.pool.active_count(), 10);
    }

    #[test]
    fn test_collects_events_across_ticks() {
        let mut session = session();
        session.state.pool.place(0, Vec2::new(0.0, 480.0));
        session.update(SIM_DT * 1.5, &TickInput::default());
        assert_eq!(session.events(), &[GameEvent::CoinMissed { slot: 0 }]);
        assert_eq!(session.state.lives, Some(2));
    }
}
