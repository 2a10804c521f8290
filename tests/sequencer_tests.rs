use std::cell::RefCell;
use std::rc::Rc;

use amplituhedron::animation::Animator;
use amplituhedron::script::hero_script;
use amplituhedron::sequencer::{OverlayContent, OverlaySink, Sequencer};

/// Recorded side effects, in the order the sequencer issued them.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Show(&'static str),
    Hide,
    Reveal,
    Rotate,
}

/// Test doubles over one shared event log, so ordering across the two
/// sinks is observable.
#[derive(Clone, Default)]
struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }
}

impl OverlaySink for Log {
    fn show(&mut self, content: &OverlayContent) {
        self.0.borrow_mut().push(Event::Show(content.title));
    }

    fn hide(&mut self) {
        self.0.borrow_mut().push(Event::Hide);
    }
}

impl Animator for Log {
    fn reveal(&mut self) {
        self.0.borrow_mut().push(Event::Reveal);
    }

    fn rotate(&mut self) {
        self.0.borrow_mut().push(Event::Rotate);
    }
}

fn rig() -> (Sequencer, Log, Log) {
    let log = Log::default();
    (Sequencer::new(hero_script()), log.clone(), log)
}

#[cfg(test)]
mod sequencer_tests {
    use super::*;

    #[test]
    fn test_first_beat_fires_at_zero() {
        let (mut seq, mut overlay, mut fx) = rig();
        seq.tick(0.0, &mut overlay, &mut fx);

        assert_eq!(
            overlay.events(),
            vec![Event::Show("The Complexity of Quantum Interactions")]
        );
        assert_eq!(seq.position(), 1);
    }

    #[test]
    fn test_beats_fire_in_strict_order() {
        let (mut seq, mut overlay, mut fx) = rig();

        // Jump straight past all beats; they must still fire in order.
        seq.tick(100.0, &mut overlay, &mut fx);

        assert_eq!(
            overlay.events(),
            vec![
                Event::Show("The Complexity of Quantum Interactions"),
                Event::Show("The Problem"),
                Event::Show("Introducing the Amplituhedron"),
                Event::Hide,
                Event::Reveal,
                Event::Rotate,
                Event::Show("How It Solves the Problem"),
                Event::Show("A New Era in Physics"),
            ]
        );
        assert!(seq.is_done());
    }

    #[test]
    fn test_no_reveal_before_eleven_seconds() {
        let (mut seq, mut overlay, mut fx) = rig();
        seq.tick(10.9, &mut overlay, &mut fx);

        let events = overlay.events();
        assert!(!events.contains(&Event::Hide));
        assert!(!events.contains(&Event::Reveal));
        assert!(!events.contains(&Event::Rotate));
        assert_eq!(seq.position(), 3);
    }

    #[test]
    fn test_exactly_hide_and_reveal_at_eleven_seconds() {
        let (mut seq, mut overlay, mut fx) = rig();
        seq.tick(11.0, &mut overlay, &mut fx);

        let events = overlay.events();
        // Three overlay updates, then atomically: hide, reveal, rotate.
        assert_eq!(
            &events[3..],
            &[Event::Hide, Event::Reveal, Event::Rotate]
        );
        assert_eq!(seq.position(), 4);
        // No beat after #4 has fired.
        assert!(!events.iter().any(|e| matches!(e, Event::Show("How It Solves the Problem"))));
    }

    #[test]
    fn test_each_beat_fires_exactly_once() {
        let (mut seq, mut overlay, mut fx) = rig();

        // Repeated ticks at the same and later times must not re-fire.
        seq.tick(11.0, &mut overlay, &mut fx);
        seq.tick(11.0, &mut overlay, &mut fx);
        seq.tick(15.0, &mut overlay, &mut fx);

        let reveals = overlay
            .events()
            .iter()
            .filter(|e| **e == Event::Reveal)
            .count();
        assert_eq!(reveals, 1);
    }

    #[test]
    fn test_done_is_terminal() {
        let (mut seq, mut overlay, mut fx) = rig();
        seq.tick(31.0, &mut overlay, &mut fx);
        assert!(seq.is_done());

        let before = overlay.events().len();
        seq.tick(1000.0, &mut overlay, &mut fx);
        assert_eq!(overlay.events().len(), before);
        assert_eq!(seq.position(), 6);
    }

    #[test]
    fn test_cumulative_start_times_match_script() {
        // Checkpoints straddling each beat boundary of the canonical
        // table: 0, 5, 10, 11, 21, 31 seconds.
        let checkpoints = [
            (4.9, 1),
            (5.0, 2),
            (9.9, 2),
            (10.0, 3),
            (10.9, 3),
            (11.0, 4),
            (20.9, 4),
            (21.0, 5),
            (30.9, 5),
            (31.0, 6),
        ];

        let (mut seq, mut overlay, mut fx) = rig();
        for (time, expected_position) in checkpoints {
            seq.tick(time, &mut overlay, &mut fx);
            assert_eq!(
                seq.position(),
                expected_position,
                "unexpected position at t={}",
                time
            );
        }
    }
}
