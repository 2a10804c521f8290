use glam::{Mat4, Vec3};

use crate::polytope::{vertex_color, EdgeSet, PolytopeSurface};
use crate::types::MeshVertex;

/// Wireframe line color. The surface gets the position-derived remap;
/// the edges stay a constant translucent white so line weight does not
/// vary with position.
const EDGE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.5];

/// Transform of the polytope group node. Written only by the animation
/// driver, read every frame by the renderer. Starts at zero scale so
/// the polytope is invisible until the reveal beat.
#[derive(Debug, Clone, Copy)]
pub struct TransformState {
    pub scale: f32,
    pub rotation_y: f32,
}

impl TransformState {
    pub fn hidden() -> Self {
        Self {
            scale: 0.0,
            rotation_y: 0.0,
        }
    }

    /// Model matrix: uniform scale, then rotation about the vertical axis.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y) * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

/// Render-ready scene data: vertex buffers for the translucent surface
/// and its wireframe, plus the shared group transform. Pure structural
/// wiring over the polytope geometry.
pub struct SceneAssembly {
    pub surface_vertices: Vec<MeshVertex>,
    pub edge_vertices: Vec<MeshVertex>,
    pub transform: TransformState,
}

impl SceneAssembly {
    pub fn new(surface: &PolytopeSurface, edges: &EdgeSet, bounds: f32) -> Self {
        let surface_vertices = surface
            .positions
            .iter()
            .map(|&p| MeshVertex {
                position: p.to_array(),
                color: vertex_color(p, bounds),
            })
            .collect();

        let edge_vertices = edges
            .endpoints
            .iter()
            .map(|&p| MeshVertex {
                position: p.to_array(),
                color: EDGE_COLOR,
            })
            .collect();

        Self {
            surface_vertices,
            edge_vertices,
            transform: TransformState::hidden(),
        }
    }
}
