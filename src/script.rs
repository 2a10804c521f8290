//! The canonical narrative script: six beats starting at 0, 5, 10, 11,
//! 21 and 31 seconds from process start. Beat 4 carries no text; it
//! hides the overlay and triggers the polytope reveal and rotation.

use crate::sequencer::{Beat, BeatEffect, OverlayContent};

const INTRO: OverlayContent = OverlayContent {
    title: "The Complexity of Quantum Interactions",
    body: "When particles collide, the number of possible interactions \
           explodes. Predicting the outcome of even a simple scattering \
           event once demanded hundreds of pages of calculation.",
};

const PROBLEM: OverlayContent = OverlayContent {
    title: "The Problem",
    body: "Feynman diagrams enumerate every possible path a particle can \
           take. For realistic processes, that means summing thousands of \
           diagrams, most of which cancel each other out.",
};

const CONCEPT: OverlayContent = OverlayContent {
    title: "Introducing the Amplituhedron",
    body: "A single geometric object whose volume encodes the scattering \
           amplitude directly. No diagrams, no redundancy.",
};

const RESOLUTION: OverlayContent = OverlayContent {
    title: "How It Solves the Problem",
    body: "What took hundreds of pages of algebra reduces to computing \
           the volume of one polytope. The geometry does the bookkeeping \
           that the diagrams spread across thousands of terms.",
};

const CONCLUSION: OverlayContent = OverlayContent {
    title: "A New Era in Physics",
    body: "If spacetime and quantum mechanics emerge from geometry, the \
           amplituhedron may be a first glimpse of what lies beneath \
           both.",
};

/// Build the hero timeline. Delays are relative to the previous beat;
/// the sequencer accumulates them into the start times above.
pub fn hero_script() -> Vec<Beat> {
    vec![
        Beat {
            delay_before_start: 0.0,
            overlay: Some(INTRO),
            hide_overlay: false,
            effect: None,
        },
        Beat {
            delay_before_start: 5.0,
            overlay: Some(PROBLEM),
            hide_overlay: false,
            effect: None,
        },
        Beat {
            delay_before_start: 5.0,
            overlay: Some(CONCEPT),
            hide_overlay: false,
            effect: None,
        },
        Beat {
            delay_before_start: 1.0,
            overlay: None,
            hide_overlay: true,
            effect: Some(BeatEffect::RevealAndSpin),
        },
        Beat {
            delay_before_start: 10.0,
            overlay: Some(RESOLUTION),
            hide_overlay: false,
            effect: None,
        },
        Beat {
            delay_before_start: 10.0,
            overlay: Some(CONCLUSION),
            hide_overlay: false,
            effect: None,
        },
    ]
}
