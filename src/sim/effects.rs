//! Timed power-up effects
//!
//! Shield and speed effects last a fixed span of clock time, independent of
//! the tick count. Instead of deferred callbacks the state keeps an expiry
//! table that every tick checks against an injected [`Clock`].

use std::cell::Cell;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::state::{Player, PlayerLook};
use crate::consts::{PLAYER_GROWN_RADIUS, PLAYER_RADIUS};

/// Source of "now" for effect expiry
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed epoch
    fn now(&self) -> Duration;
}

/// Monotonic wall clock
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Hand-driven clock for tests and replays
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Effects that expire on their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Shielded look
    Shield,
    /// Enlarged radius from the speed powerup
    Grow,
}

impl EffectKind {
    fn apply(self, player: &mut Player) {
        match self {
            EffectKind::Shield => player.look = PlayerLook::Shielded,
            EffectKind::Grow => player.radius = PLAYER_GROWN_RADIUS,
        }
    }

    fn revert(self, player: &mut Player) {
        match self {
            EffectKind::Shield => player.look = PlayerLook::Normal,
            EffectKind::Grow => player.radius = PLAYER_RADIUS,
        }
    }
}

/// Expiry table: effect kind -> clock time it ends at
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffects {
    expiries: BTreeMap<EffectKind, Duration>,
}

impl ActiveEffects {
    /// Start an effect, or restart its full duration if already running
    pub fn activate(&mut self, kind: EffectKind, player: &mut Player, now: Duration, duration: Duration) {
        kind.apply(player);
        self.expiries.insert(kind, now + duration);
    }

    /// Revert every effect whose expiry is at or before `now`
    pub fn expire(&mut self, player: &mut Player, now: Duration) -> Vec<EffectKind> {
        let expired: Vec<EffectKind> = self
            .expiries
            .iter()
            .filter(|&(_, &until)| until <= now)
            .map(|(&kind, _)| kind)
            .collect();
        for kind in &expired {
            self.expiries.remove(kind);
            kind.revert(player);
        }
        expired
    }

    pub fn is_active(&self, kind: EffectKind) -> bool {
        self.expiries.contains_key(&kind)
    }

    /// Clock time the effect ends at, if running
    #[cfg(test)]
    pub(crate) fn expires_at(&self, kind: EffectKind) -> Option<Duration> {
        self.expiries.get(&kind).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.expiries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Bounds;

    const FIVE: Duration = Duration::from_secs(5);

    #[test]
    fn test_shield_expires() {
        let mut player = Player::new(&Bounds::default());
        let mut effects = ActiveEffects::default();
        effects.activate(EffectKind::Shield, &mut player, Duration::ZERO, FIVE);
        assert_eq!(player.look, PlayerLook::Shielded);

        assert!(effects.expire(&mut player, Duration::from_millis(4_999)).is_empty());
        assert_eq!(player.look, PlayerLook::Shielded);

        assert_eq!(effects.expire(&mut player, FIVE), vec![EffectKind::Shield]);
        assert_eq!(player.look, PlayerLook::Normal);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_repeat_pickup_resets_duration() {
        let mut player = Player::new(&Bounds::default());
        let mut effects = ActiveEffects::default();
        effects.activate(EffectKind::Grow, &mut player, Duration::ZERO, FIVE);
        effects.activate(EffectKind::Grow, &mut player, Duration::from_secs(3), FIVE);
        assert_eq!(effects.expires_at(EffectKind::Grow), Some(Duration::from_secs(8)));

        effects.expire(&mut player, Duration::from_secs(6));
        assert_eq!(player.radius, PLAYER_GROWN_RADIUS);
        effects.expire(&mut player, Duration::from_secs(8));
        assert_eq!(player.radius, PLAYER_RADIUS);
    }

    #[test]
    fn test_effects_are_independent() {
        let mut player = Player::new(&Bounds::default());
        let mut effects = ActiveEffects::default();
        effects.activate(EffectKind::Shield, &mut player, Duration::ZERO, FIVE);
        effects.activate(EffectKind::Grow, &mut player, Duration::from_secs(2), FIVE);

        effects.expire(&mut player, Duration::from_secs(5));
        assert_eq!(player.look, PlayerLook::Normal);
        assert!(effects.is_active(EffectKind::Grow));
        assert_eq!(player.radius, PLAYER_GROWN_RADIUS);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(250));
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now(), Duration::from_millis(500));
        clock.set(Duration::from_secs(9));
        assert_eq!((&clock).now(), Duration::from_secs(9));
    }
}
