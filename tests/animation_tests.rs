use std::f32::consts::TAU;

use amplituhedron::animation::{AnimationDriver, Animator, REVEAL_DURATION, ROTATION_PERIOD};
use amplituhedron::overlay::Overlay;
use amplituhedron::scene::TransformState;
use amplituhedron::script::hero_script;
use amplituhedron::sequencer::Sequencer;

const DT: f32 = 1.0 / 60.0;

fn step(driver: &mut AnimationDriver, transform: &mut TransformState, seconds: f32) {
    let frames = (seconds / DT).round() as usize;
    for _ in 0..frames {
        driver.advance(DT, transform);
    }
}

#[cfg(test)]
mod animation_tests {
    use super::*;

    #[test]
    fn test_reveal_leaves_zero_scale_immediately() {
        let mut driver = AnimationDriver::new();
        let mut transform = TransformState::hidden();

        driver.reveal();
        step(&mut driver, &mut transform, 0.5);

        assert!(transform.scale > 0.0, "mid-reveal scale must be non-zero");
    }

    #[test]
    fn test_reveal_settles_at_unit_scale() {
        let mut driver = AnimationDriver::new();
        let mut transform = TransformState::hidden();

        driver.reveal();
        step(&mut driver, &mut transform, REVEAL_DURATION + 0.5);

        assert_eq!(transform.scale, 1.0);

        // Fire-and-forget: further frames leave the settled value alone.
        step(&mut driver, &mut transform, 1.0);
        assert_eq!(transform.scale, 1.0);
    }

    #[test]
    fn test_reveal_overshoots_past_unit_scale() {
        let mut driver = AnimationDriver::new();
        let mut transform = TransformState::hidden();

        driver.reveal();
        let mut peak = 0.0f32;
        for _ in 0..((REVEAL_DURATION / DT) as usize) {
            driver.advance(DT, &mut transform);
            peak = peak.max(transform.scale);
        }

        assert!(peak > 1.0, "elastic reveal must overshoot, peak {}", peak);
    }

    #[test]
    fn test_rotation_repeats_modulo_one_turn() {
        let mut driver = AnimationDriver::new();
        let mut transform = TransformState::hidden();

        driver.rotate();
        step(&mut driver, &mut transform, 7.0);
        let first = transform.rotation_y;

        step(&mut driver, &mut transform, ROTATION_PERIOD);
        let second = transform.rotation_y;

        let wrapped = (first - second).abs().min(TAU - (first - second).abs());
        assert!(
            wrapped < 1e-2,
            "one full period later the angle must match: {} vs {}",
            first,
            second
        );
    }

    #[test]
    fn test_rotation_never_exceeds_one_turn() {
        let mut driver = AnimationDriver::new();
        let mut transform = TransformState::hidden();

        driver.rotate();
        step(&mut driver, &mut transform, 3.0 * ROTATION_PERIOD + 1.0);

        assert!(transform.rotation_y >= 0.0);
        assert!(transform.rotation_y < TAU);
    }

    #[test]
    fn test_rearming_rotation_supersedes() {
        let mut driver = AnimationDriver::new();
        let mut transform = TransformState::hidden();

        driver.rotate();
        step(&mut driver, &mut transform, 5.0);
        let advanced = transform.rotation_y;

        driver.rotate();
        step(&mut driver, &mut transform, 1.0);

        assert!(
            transform.rotation_y < advanced,
            "a superseding spin restarts from zero"
        );
    }

    /// The end-to-end scenario: a simulated 60 Hz loop driving the real
    /// sequencer, overlay and animation driver from t=0 to past the
    /// final beat.
    #[test]
    fn test_hero_timeline_end_to_end() {
        let mut sequencer = Sequencer::new(hero_script());
        let mut overlay = Overlay::new();
        let mut driver = AnimationDriver::new();
        let mut transform = TransformState::hidden();

        let mut check = |elapsed: f32,
                         overlay: &Overlay,
                         transform: &TransformState,
                         previous_rotation: f32| {
            if (elapsed - 0.5).abs() < DT / 2.0 {
                assert!(overlay.is_visible());
                assert_eq!(
                    overlay.content().unwrap().title,
                    "The Complexity of Quantum Interactions"
                );
                assert_eq!(transform.scale, 0.0);
            }
            if (elapsed - 6.0).abs() < DT / 2.0 {
                assert_eq!(overlay.content().unwrap().title, "The Problem");
            }
            if (elapsed - 11.5).abs() < DT / 2.0 {
                assert!(!overlay.is_visible(), "overlay hidden during reveal");
                assert!(transform.scale > 0.0, "scale must not be zero mid-reveal");
            }
            if (elapsed - 31.5).abs() < DT / 2.0 {
                assert!(overlay.is_visible());
                assert_eq!(overlay.content().unwrap().title, "A New Era in Physics");
                assert!(transform.rotation_y != 0.0);
                assert!(
                    transform.rotation_y != previous_rotation,
                    "rotation keeps advancing frame to frame"
                );
            }
        };

        let total_frames = (32.0 / DT) as usize;
        let mut previous_rotation = 0.0;
        for frame in 0..total_frames {
            let elapsed = frame as f32 * DT;
            sequencer.tick(elapsed, &mut overlay, &mut driver);
            driver.advance(DT, &mut transform);

            check(elapsed, &overlay, &transform, previous_rotation);
            previous_rotation = transform.rotation_y;
        }

        assert!(sequencer.is_done());
        assert_eq!(transform.scale, 1.0);
    }
}
