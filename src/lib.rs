pub mod animation;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod hull;
pub mod overlay;
pub mod polytope;
pub mod renderer;
pub mod scene;
pub mod script;
pub mod sequencer;
pub mod types;
