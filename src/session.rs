//! Game session lifecycle
//!
//! A session owns the current [`GameState`] and the clock that drives timed
//! effects. It gates movement input on the game-over flag and replaces the
//! whole state on restart.

use crate::settings::Settings;
use crate::sim::{Clock, Direction, GameEvent, GameState, SystemClock, move_player, tick};

/// Golden-ratio increment used to derive per-run seeds
const SEED_STRIDE: u64 = 0x9e37_79b9_7f4a_7c15;

/// One player's game, from start through any number of restarts
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    settings: Settings,
    clock: C,
    state: GameState,
    input_enabled: bool,
    /// Number of restarts so far
    run: u64,
}

impl Session<SystemClock> {
    /// Session on the wall clock
    pub fn with_system_clock(settings: Settings) -> Self {
        Self::new(settings, SystemClock::new())
    }
}

impl<C: Clock> Session<C> {
    pub fn new(settings: Settings, clock: C) -> Self {
        let state = GameState::with_rules(settings.rules(), settings.seed);
        log::info!(
            "New session: {}x{} world, seed {:#x}",
            settings.width,
            settings.height,
            settings.seed
        );
        Self {
            settings,
            clock,
            state,
            input_enabled: true,
            run: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for tooling and scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Whether directional input is currently delivered to the player
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Apply a directional input; returns false when input is disabled
    pub fn handle_direction(&mut self, direction: Direction) -> bool {
        if !self.input_enabled {
            return false;
        }
        move_player(&mut self.state, direction);
        true
    }

    /// Apply a key press by name; unknown keys are ignored
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => self.handle_direction(direction),
            None => false,
        }
    }

    /// Run one simulation tick and return its events
    pub fn update(&mut self) -> &[GameEvent] {
        tick(&mut self.state, self.clock.now());
        if self.state.is_game_over() && self.input_enabled {
            self.input_enabled = false;
            log::info!("Input disabled until restart");
        }
        &self.state.events
    }

    /// Throw away the current state and start a fresh game
    pub fn restart(&mut self) {
        self.run += 1;
        let seed = self.settings.seed.wrapping_add(self.run.wrapping_mul(SEED_STRIDE));
        log::info!(
            "Restarting (run {}, previous score {})",
            self.run,
            self.state.score
        );
        self.state = GameState::with_rules(self.settings.rules(), seed);
        self.input_enabled = true;
    }

    /// Restarts performed so far
    pub fn run(&self) -> u64 {
        self.run
    }
}
