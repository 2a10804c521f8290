use glam::Vec3;
use rand::Rng;

use crate::hull::{convex_hull, HullError};

pub const DEFAULT_POINT_COUNT: usize = 30;
pub const DEFAULT_BOUNDS: f32 = 2.0;

/// Fixed alpha of the translucent surface.
pub const SURFACE_ALPHA: f32 = 0.6;

/// Triangle soup for the hull boundary: three vertices per face, in
/// the winding order the hull routine produced. Built once at startup
/// and immutable afterwards.
#[derive(Debug, Clone)]
pub struct PolytopeSurface {
    pub positions: Vec<Vec3>,
}

impl PolytopeSurface {
    pub fn face_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Wireframe line segments, stored as consecutive endpoint pairs.
/// Edges shared by adjacent faces appear twice, once per incident
/// face; the resulting overdraw is accepted and never deduplicated.
#[derive(Debug, Clone)]
pub struct EdgeSet {
    pub endpoints: Vec<Vec3>,
}

impl EdgeSet {
    pub fn segment_count(&self) -> usize {
        self.endpoints.len() / 2
    }
}

/// Sample `count` points, each coordinate drawn independently and
/// uniformly from `[-bounds, +bounds]`.
pub fn sample_cloud(rng: &mut impl Rng, count: usize, bounds: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-bounds..=bounds),
                rng.random_range(-bounds..=bounds),
                rng.random_range(-bounds..=bounds),
            )
        })
        .collect()
}

/// For every face (v1, v2, v3) emit the edges (v1,v2), (v2,v3), (v3,v1)
/// in that fixed order. The segment count is always exactly three times
/// the face count.
pub fn extract_edges(surface: &PolytopeSurface) -> EdgeSet {
    let mut endpoints = Vec::with_capacity(surface.positions.len() * 2);
    for face in surface.positions.chunks_exact(3) {
        endpoints.extend_from_slice(&[face[0], face[1], face[1], face[2], face[2], face[0]]);
    }
    EdgeSet { endpoints }
}

/// Map a vertex position inside the sampling cube to an RGBA color by
/// remapping each axis from `[-bounds, bounds]` to `[0, 1]`. Pure and
/// deterministic; alpha is fixed at [`SURFACE_ALPHA`].
pub fn vertex_color(position: Vec3, bounds: f32) -> [f32; 4] {
    let remap = (position + Vec3::splat(bounds)) / (2.0 * bounds);
    [remap.x, remap.y, remap.z, SURFACE_ALPHA]
}

/// Generate the renderable polytope: sample a point cloud, take its
/// convex hull, flatten the faces into a triangle soup and extract the
/// wireframe edges. Degenerate clouds fail with the hull routine's
/// error; there is no re-sampling.
pub fn build(
    rng: &mut impl Rng,
    count: usize,
    bounds: f32,
) -> Result<(PolytopeSurface, EdgeSet), HullError> {
    let cloud = sample_cloud(rng, count, bounds);
    let faces = convex_hull(&cloud)?;

    let positions = faces
        .iter()
        .flat_map(|&[i, j, k]| [cloud[i], cloud[j], cloud[k]])
        .collect();
    let surface = PolytopeSurface { positions };
    let edges = extract_edges(&surface);

    log::info!(
        "polytope: {} points -> {} faces, {} edge segments",
        count,
        surface.face_count(),
        edges.segment_count()
    );

    Ok((surface, edges))
}
