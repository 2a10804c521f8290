use std::f32::consts::TAU;

use crate::scene::TransformState;

/// Duration of the reveal scale-up, seconds.
pub const REVEAL_DURATION: f32 = 2.0;
/// Seconds per full turn of the idle rotation.
pub const ROTATION_PERIOD: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    OutQuad,
    OutCubic,
    /// Decaying oscillation: overshoots the target, then settles.
    ElasticOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::ElasticOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    (2.0_f32).powf(-10.0 * t) * ((10.0 * t - 0.75) * (TAU / 3.0)).sin() + 1.0
                }
            }
        }
    }
}

/// One-shot interpolation of a scalar from `from` to `to`.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    ease: Ease,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn value(&self) -> f32 {
        let t = self.ease.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Unbounded linear rotation, one full turn per `period` seconds. The
/// angle wraps modulo a full turn; since the wrap point equals the
/// start point the period boundary is invisible.
#[derive(Debug, Clone, Copy)]
pub struct Spin {
    period: f32,
    elapsed: f32,
}

impl Spin {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn angle(&self) -> f32 {
        TAU * (self.elapsed / self.period).fract()
    }
}

/// Receives the sequencer's animation side effects. Split out as a
/// trait so tests can substitute a recorder for the real driver.
pub trait Animator {
    fn reveal(&mut self);
    fn rotate(&mut self);
}

/// Translates sequencer events into interpolations on the polytope
/// transform. Both requests are fire-and-forget: once armed they run
/// to completion (or forever, for the spin) independent of the
/// sequencer. Re-arming the spin supersedes the active one.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    scale: Option<Tween>,
    spin: Option<Spin>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample active interpolations and write the transform. Scale and
    /// rotation are disjoint fields, so the two writers never conflict.
    pub fn advance(&mut self, dt: f32, target: &mut TransformState) {
        if let Some(tween) = &mut self.scale {
            tween.advance(dt);
            target.scale = tween.value();
            if tween.finished() {
                target.scale = 1.0;
                self.scale = None;
            }
        }
        if let Some(spin) = &mut self.spin {
            spin.advance(dt);
            target.rotation_y = spin.angle();
        }
    }
}

impl Animator for AnimationDriver {
    fn reveal(&mut self) {
        self.scale = Some(Tween::new(0.0, 1.0, REVEAL_DURATION, Ease::ElasticOut));
    }

    fn rotate(&mut self) {
        self.spin = Some(Spin::new(ROTATION_PERIOD));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_stable() {
        for ease in [Ease::Linear, Ease::OutQuad, Ease::OutCubic, Ease::ElasticOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn elastic_overshoots_then_settles() {
        let peak = (0..200)
            .map(|i| Ease::ElasticOut.apply(i as f32 / 200.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "elastic-out must overshoot, peak was {}", peak);
        assert!((Ease::ElasticOut.apply(0.999) - 1.0).abs() < 0.01);
    }

    #[test]
    fn spin_wraps_one_turn_per_period() {
        let mut spin = Spin::new(20.0);
        spin.advance(7.5);
        let first = spin.angle();
        spin.advance(20.0);
        let second = spin.angle();
        assert!((first - second).abs() < 1e-3);
    }
}
