//! Fixed timestep driver
//!
//! Turns variable frame times into whole simulation ticks. Every tick is
//! an update followed by a present, strictly in that order. Once the
//! session is over the driver stops ticking until it is restarted.

use crate::consts::MAX_SUBSTEPS;
use crate::renderer::{Presenter, Scene};
use crate::session::Session;
use crate::sim::{Clock, Direction, GameEvent, SystemClock};

/// Longest frame time accepted before clamping (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Runs a session against a presenter
#[derive(Debug)]
pub struct Driver<P: Presenter, C: Clock = SystemClock> {
    session: Session<C>,
    presenter: P,
    accumulator: f32,
    sim_dt: f32,
    running: bool,
}

impl<P: Presenter, C: Clock> Driver<P, C> {
    pub fn new(session: Session<C>, mut presenter: P) -> Self {
        let sim_dt = session.settings().sim_dt();
        presenter.present(&Scene::from_state(session.state()));
        Self {
            running: !session.is_game_over(),
            session,
            presenter,
            accumulator: 0.0,
            sim_dt,
        }
    }

    /// Advance by `dt` seconds of real time; returns the ticks run
    pub fn frame(&mut self, dt: f32) -> u32 {
        if !self.running {
            return 0;
        }

        self.accumulator += dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.sim_dt && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.sim_dt;
            substeps += 1;
            if !self.step() {
                break;
            }
        }
        substeps
    }

    /// Run exactly one tick and present it; false once the game is over
    pub fn step(&mut self) -> bool {
        if !self.running {
            return false;
        }

        let game_over = self
            .session
            .update()
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }));
        self.presenter.present(&Scene::from_state(self.session.state()));

        if game_over {
            self.running = false;
            self.accumulator = 0.0;
            log::info!("Stopping tick loop, final score {}", self.session.state().score);
        }
        self.running
    }

    /// Forward a directional input between ticks
    pub fn handle_direction(&mut self, direction: Direction) -> bool {
        self.session.handle_direction(direction)
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        self.session.handle_key(key)
    }

    /// Start a fresh game and re-arm the tick loop
    pub fn restart(&mut self) {
        self.session.restart();
        self.accumulator = 0.0;
        self.running = true;
        self.presenter.present(&Scene::from_state(self.session.state()));
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> &Session<C> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<C> {
        &mut self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{NullPresenter, VertexPresenter};
    use crate::settings::Settings;
    use crate::sim::{Color, ManualClock, Square};

    fn driver(settings: Settings) -> Driver<NullPresenter, ManualClock> {
        Driver::new(Session::new(settings, ManualClock::new()), NullPresenter::default())
    }

    fn drop_square_on_player<P: Presenter>(driver: &mut Driver<P, ManualClock>) {
        let state = driver.session_mut().state_mut();
        let pos = state.player.pos;
        state.squares.push(Square {
            pos,
            size: 20.0,
            speed: 0.0,
            color: Color::BLACK,
        });
    }

    #[test]
    fn test_accumulates_whole_ticks() {
        let mut driver = driver(Settings::default());
        driver.session_mut().state_mut().player.pos.x = -1000.0;
        assert_eq!(driver.frame(0.01), 0);
        assert_eq!(driver.frame(0.01), 1);
        assert_eq!(driver.frame(0.045), 2);
        assert_eq!(driver.session().state().frame, 3);
        // initial present plus one per tick
        assert_eq!(driver.presenter().frames, 4);
    }

    #[test]
    fn test_substeps_capped() {
        let settings = Settings {
            tick_rate: 1000,
            ..Default::default()
        };
        let mut driver = driver(settings);
        driver.session_mut().state_mut().player.pos.x = -1000.0;
        assert_eq!(driver.frame(5.0), MAX_SUBSTEPS);
    }

    #[test]
    fn test_stops_on_game_over() {
        let mut driver = driver(Settings::default());
        drop_square_on_player(&mut driver);
        assert!(!driver.step());
        assert!(!driver.is_running());
        let frame = driver.session().state().frame;

        assert_eq!(driver.frame(1.0), 0);
        assert!(!driver.handle_direction(Direction::Left));
        assert_eq!(driver.session().state().frame, frame);
    }

    #[test]
    fn test_restart_rearms() {
        let mut driver = Driver::new(
            Session::new(Settings::default(), ManualClock::new()),
            VertexPresenter::default(),
        );
        drop_square_on_player(&mut driver);
        driver.step();
        assert!(driver.presenter().overlay_visible);

        driver.restart();
        assert!(driver.is_running());
        assert!(!driver.presenter().overlay_visible);
        assert_eq!(driver.presenter().label, "Score: 0");
        assert!(driver.handle_key("ArrowUp"));
    }
}
