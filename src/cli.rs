// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "amplituhedron")]
#[command(about = "Animated amplituhedron hero visualization", long_about = None)]
pub struct Cli {
    /// Number of points sampled for the polytope
    #[arg(long = "points", default_value_t = crate::polytope::DEFAULT_POINT_COUNT)]
    pub points: usize,

    /// Half-extent of the sampling cube
    #[arg(long = "bounds", default_value_t = crate::polytope::DEFAULT_BOUNDS)]
    pub bounds: f32,

    /// Seed for the point cloud (random when omitted)
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Disable the narrative text overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
