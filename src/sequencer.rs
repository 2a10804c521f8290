use crate::animation::Animator;

/// Title and body text shown by the overlay while a beat is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayContent {
    pub title: &'static str,
    pub body: &'static str,
}

/// Side-effect sink for overlay updates, injected so tests can record
/// calls instead of drawing text.
pub trait OverlaySink {
    fn show(&mut self, content: &OverlayContent);
    fn hide(&mut self);
}

/// Animation side effect a beat may carry. The reveal beat is the only
/// one in the script, so the rotation can never be armed twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeatEffect {
    /// Scale the polytope up from zero and start the idle rotation.
    RevealAndSpin,
}

/// One scheduled step of the narrative: a delay relative to the
/// previous beat, an optional overlay replacement, an optional overlay
/// hide, and an optional animation effect.
#[derive(Debug, Clone, Copy)]
pub struct Beat {
    pub delay_before_start: f32,
    pub overlay: Option<OverlayContent>,
    pub hide_overlay: bool,
    pub effect: Option<BeatEffect>,
}

/// Open-loop presentation state machine: Idle -> Beat 0 .. Beat N-1 ->
/// Done. Beats fire strictly in order once their cumulative start time
/// has elapsed on the schedule clock; each fires exactly once. There is
/// no pause, skip, or reset, and Done is terminal.
pub struct Sequencer {
    beats: Vec<Beat>,
    starts: Vec<f32>,
    next: usize,
}

impl Sequencer {
    pub fn new(beats: Vec<Beat>) -> Self {
        let mut cumulative = 0.0;
        let starts = beats
            .iter()
            .map(|beat| {
                cumulative += beat.delay_before_start;
                cumulative
            })
            .collect();
        Self {
            beats,
            starts,
            next: 0,
        }
    }

    /// Advance the schedule to `elapsed` seconds since process start,
    /// firing every due beat in order. A beat fires atomically: overlay
    /// replace, overlay hide, then its animation effect.
    pub fn tick(&mut self, elapsed: f32, overlay: &mut dyn OverlaySink, fx: &mut dyn Animator) {
        while self.next < self.beats.len() && self.starts[self.next] <= elapsed {
            let beat = self.beats[self.next];
            self.next += 1;

            if let Some(content) = &beat.overlay {
                overlay.show(content);
            }
            if beat.hide_overlay {
                overlay.hide();
            }
            match beat.effect {
                Some(BeatEffect::RevealAndSpin) => {
                    fx.reveal();
                    fx.rotate();
                }
                None => {}
            }
        }
    }

    /// Index of the next beat to fire, in `[0, N]`.
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn is_done(&self) -> bool {
        self.next == self.beats.len()
    }
}
