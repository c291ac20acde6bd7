//! Fixed timestep simulation tick
//!
//! Core game loop that advances the state by one frame. Order matters:
//! collisions are checked after movement, and pickups are only processed
//! when the frame did not end the game.

use std::time::Duration;

use super::collision::touches;
use super::effects::EffectKind;
use super::spawn::{spawn_gem, spawn_powerup, spawn_square};
use super::state::{GameEvent, GamePhase, GameState, PowerupKind, Rules};
use crate::consts::{PICKUP_FALL_SPEED, SCORE_POWERUP_BONUS};

/// Which factories fire on a given frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnSchedule {
    pub square: bool,
    pub gem: bool,
    pub powerup: bool,
}

impl SpawnSchedule {
    pub fn for_frame(frame: u64, rules: &Rules) -> Self {
        Self {
            square: frame % rules.square_interval == 0,
            gem: frame % rules.gem_interval == 0,
            powerup: frame % rules.powerup_interval == 0,
        }
    }
}

/// Advance the game state by one tick
///
/// `now` is the current clock time, used only for timed effects.
pub fn tick(state: &mut GameState, now: Duration) {
    state.events.clear();

    // Frozen until restart
    if state.phase == GamePhase::GameOver {
        return;
    }

    for kind in state.effects.expire(&mut state.player, now) {
        log::debug!("{kind:?} effect expired");
        state.events.push(GameEvent::EffectExpired(kind));
    }

    // Spawning
    let due = SpawnSchedule::for_frame(state.frame, &state.rules);
    if due.square {
        spawn_square(state);
    }
    if due.gem {
        spawn_gem(state);
    }
    if due.powerup {
        spawn_powerup(state);
    }

    // Movement and pruning
    let floor = state.rules.bounds.height;
    for square in &mut state.squares {
        square.pos.y += square.speed;
    }
    state.squares.retain(|s| s.pos.y <= floor);

    for gem in &mut state.gems {
        gem.pos.y += PICKUP_FALL_SPEED;
    }
    state.gems.retain(|g| g.pos.y <= floor);

    for powerup in &mut state.powerups {
        powerup.pos.y += PICKUP_FALL_SPEED;
    }
    state.powerups.retain(|p| p.pos.y <= floor);

    // Hazards
    let player = &state.player;
    if state
        .squares
        .iter()
        .any(|s| touches(player.pos, player.radius, s.pos, s.size))
    {
        state.phase = GamePhase::GameOver;
        log::info!("Game over at frame {} with score {}", state.frame, state.score);
        state.events.push(GameEvent::GameOver { score: state.score });
        // The losing frame still counts; nothing else moves after it
        state.frame += 1;
        return;
    }

    // Gems
    let mut gained = 0u64;
    let player = &state.player;
    let events = &mut state.events;
    state.gems.retain(|gem| {
        if touches(player.pos, player.radius, gem.pos, gem.size) {
            gained += gem.value as u64;
            events.push(GameEvent::GemCollected { value: gem.value });
            false
        } else {
            true
        }
    });
    if gained > 0 {
        log::debug!("collected {gained} points of gems");
        state.award(gained);
    }

    // Powerups, applied one at a time so a grown radius counts for the rest
    let mut i = 0;
    while i < state.powerups.len() {
        let candidate = &state.powerups[i];
        if touches(state.player.pos, state.player.radius, candidate.pos, candidate.size) {
            let powerup = state.powerups.remove(i);
            apply_powerup(state, powerup.kind, now);
        } else {
            i += 1;
        }
    }

    state.frame += 1;
}

/// Resolve a collected powerup's effect
pub fn apply_powerup(state: &mut GameState, kind: PowerupKind, now: Duration) {
    let duration = state.rules.effect_duration;
    match kind {
        PowerupKind::Shield => {
            state
                .effects
                .activate(EffectKind::Shield, &mut state.player, now, duration)
        }
        // Grows the hitbox rather than the movement step
        PowerupKind::Speed => {
            state
                .effects
                .activate(EffectKind::Grow, &mut state.player, now, duration)
        }
        PowerupKind::Score => state.award(SCORE_POWERUP_BONUS),
    }
    log::debug!("{kind:?} powerup collected");
    state.events.push(GameEvent::PowerupCollected(kind));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Color, Gem, PlayerLook, Powerup, Square};
    use glam::Vec2;

    /// State past frame 0 so nothing spawns on the next tick
    fn quiet_state() -> GameState {
        let mut state = GameState::new(42);
        state.frame = 1;
        state
    }

    fn square(x: f32, y: f32, size: f32, speed: f32) -> Square {
        Square {
            pos: Vec2::new(x, y),
            size,
            speed,
            color: Color::BLACK,
        }
    }

    fn powerup(x: f32, y: f32, kind: PowerupKind) -> Powerup {
        Powerup {
            pos: Vec2::new(x, y),
            size: 10.0,
            color: Color::WHITE,
            kind,
        }
    }

    #[test]
    fn test_square_hit_ends_game() {
        let mut state = quiet_state();
        state.squares.push(square(250.0, 250.0, 20.0, 1.0));
        tick(&mut state, Duration::ZERO);
        assert!(state.is_game_over());
        assert_eq!(state.events, vec![GameEvent::GameOver { score: 0 }]);
        // the losing frame still advances the counter
        assert_eq!(state.frame, 2);
    }

    #[test]
    fn test_gem_pickup() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(100.0, 100.0);
        state.gems.push(Gem {
            pos: Vec2::new(105.0, 100.0),
            size: 10.0,
            color: Color::WHITE,
            value: 3,
        });
        tick(&mut state, Duration::ZERO);
        assert_eq!(state.score, 3);
        assert!(state.gems.is_empty());
        assert_eq!(state.events, vec![GameEvent::GemCollected { value: 3 }]);
    }

    #[test]
    fn test_no_pickups_on_losing_frame() {
        let mut state = quiet_state();
        state.squares.push(square(250.0, 250.0, 20.0, 1.0));
        state.gems.push(Gem {
            pos: Vec2::new(252.0, 250.0),
            size: 10.0,
            color: Color::WHITE,
            value: 5,
        });
        state.powerups.push(powerup(248.0, 250.0, PowerupKind::Score));
        tick(&mut state, Duration::ZERO);
        assert!(state.is_game_over());
        assert_eq!(state.score, 0);
        assert_eq!(state.gems.len(), 1);
        assert_eq!(state.powerups.len(), 1);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = quiet_state();
        state.squares.push(square(250.0, 250.0, 20.0, 1.0));
        tick(&mut state, Duration::ZERO);
        let frozen_y = state.squares[0].pos.y;
        for _ in 0..10 {
            tick(&mut state, Duration::from_secs(1));
        }
        assert_eq!(state.squares[0].pos.y, frozen_y);
        assert_eq!(state.frame, 2);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_offscreen_entities_pruned() {
        let mut state = quiet_state();
        state.squares.push(square(0.0, 498.0, 10.0, 3.0));
        state.squares.push(square(20.0, 10.0, 10.0, 1.0));
        state.squares.push(square(40.0, 501.0, 10.0, 1.0));
        state.gems.push(Gem {
            pos: Vec2::new(0.0, 500.0),
            size: 10.0,
            color: Color::WHITE,
            value: 1,
        });
        state.powerups.push(powerup(0.0, 499.0, PowerupKind::Shield));
        tick(&mut state, Duration::ZERO);

        assert_eq!(state.squares.len(), 1);
        assert_eq!(state.squares[0].pos, Vec2::new(20.0, 11.0));
        assert!(state.gems.is_empty());
        // 499 + 1 == 500, still on screen
        assert_eq!(state.powerups.len(), 1);
    }

    #[test]
    fn test_survivor_order_preserved() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(-1000.0, -1000.0);
        for (i, y) in [10.0, 499.0, 20.0, 497.0, 30.0].into_iter().enumerate() {
            state.squares.push(square(i as f32 * 60.0, y, 10.0, 5.0));
        }
        tick(&mut state, Duration::ZERO);
        let xs: Vec<f32> = state.squares.iter().map(|s| s.pos.x).collect();
        assert_eq!(xs, vec![0.0, 120.0, 240.0]);
    }

    #[test]
    fn test_score_powerup_adds_ten() {
        let mut state = quiet_state();
        state.score = 7;
        state.effects.activate(
            EffectKind::Shield,
            &mut state.player,
            Duration::ZERO,
            EFFECT_DURATION,
        );
        state.powerups.push(powerup(250.0, 250.0, PowerupKind::Score));
        tick(&mut state, Duration::from_secs(1));
        assert_eq!(state.score, 17);
        assert!(state.powerups.is_empty());
    }

    #[test]
    fn test_shield_lasts_five_seconds() {
        let mut state = quiet_state();
        state.powerups.push(powerup(250.0, 250.0, PowerupKind::Shield));
        tick(&mut state, Duration::from_secs(10));
        assert_eq!(state.player.look, PlayerLook::Shielded);

        // Tick count is irrelevant, only clock time
        for _ in 0..50 {
            tick(&mut state, Duration::from_millis(14_999));
        }
        assert_eq!(state.player.look, PlayerLook::Shielded);

        tick(&mut state, Duration::from_secs(15));
        assert_eq!(state.player.look, PlayerLook::Normal);
        assert_eq!(state.events, vec![GameEvent::EffectExpired(EffectKind::Shield)]);
    }

    #[test]
    fn test_speed_powerup_grows_hitbox() {
        let mut state = quiet_state();
        state.powerups.push(powerup(250.0, 250.0, PowerupKind::Speed));
        tick(&mut state, Duration::ZERO);
        assert_eq!(state.player.radius, PLAYER_GROWN_RADIUS);

        // 22 away from the corner: misses radius 10 (20) but hits radius 15 (25)
        state.squares.push(square(272.0, 249.0, 20.0, 1.0));
        tick(&mut state, Duration::from_secs(1));
        assert!(state.is_game_over());
    }

    #[test]
    fn test_speed_powerup_reverts() {
        let mut state = quiet_state();
        state.powerups.push(powerup(250.0, 250.0, PowerupKind::Speed));
        tick(&mut state, Duration::ZERO);
        tick(&mut state, EFFECT_DURATION);
        assert_eq!(state.player.radius, PLAYER_RADIUS);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = GameState::new(9);
        // Park the player far away so nothing ends the run
        state.player.pos = Vec2::new(-10_000.0, -10_000.0);

        let (mut squares, mut gems, mut powerups) = (Vec::new(), Vec::new(), Vec::new());
        for _ in 0..=1800 {
            let frame = state.frame;
            tick(&mut state, Duration::ZERO);
            for event in &state.events {
                match event {
                    GameEvent::SquareSpawned => squares.push(frame),
                    GameEvent::GemSpawned => gems.push(frame),
                    GameEvent::PowerupSpawned(_) => powerups.push(frame),
                    _ => {}
                }
            }
        }

        assert_eq!(squares, (0..=1800).step_by(60).collect::<Vec<u64>>());
        assert_eq!(gems, vec![0, 600, 1200, 1800]);
        assert_eq!(powerups, vec![0, 900, 1800]);
        assert_eq!(state.frame, 1801);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        for f in 0..600u64 {
            let now = Duration::from_millis(f * 16);
            tick(&mut a, now);
            tick(&mut b, now);
        }
        assert_eq!(a.frame, b.frame);
        assert_eq!(a.score, b.score);
        assert_eq!(a.squares, b.squares);
        assert_eq!(a.gems, b.gems);
        assert_eq!(a.phase, b.phase);
    }
}
