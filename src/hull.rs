use glam::Vec3;
use thiserror::Error;

/// Tolerance for the geometric predicates below. Coordinates in this
/// crate live within a few units of the origin, so an absolute epsilon
/// is sufficient.
const EPSILON: f32 = 1e-6;

#[derive(Debug, Error)]
pub enum HullError {
    #[error("convex hull requires at least 4 points, got {0}")]
    InsufficientPoints(usize),
    #[error("point cloud is degenerate (collinear or coplanar)")]
    Degenerate,
}

/// Signed distance of `point` from the plane of face `[i, j, k]`,
/// positive on the outward side. The normal is left un-normalized;
/// only the sign (against EPSILON) is ever used.
fn signed_distance(points: &[Vec3], face: [usize; 3], point: Vec3) -> f32 {
    let [i, j, k] = face;
    let normal = (points[j] - points[i]).cross(points[k] - points[i]);
    normal.dot(point - points[i])
}

/// Find four affinely independent points to seed the hull.
fn initial_tetrahedron(points: &[Vec3]) -> Result<[usize; 4], HullError> {
    let i0 = 0;

    let i1 = points
        .iter()
        .position(|p| (*p - points[i0]).length_squared() > EPSILON)
        .ok_or(HullError::Degenerate)?;

    let edge = points[i1] - points[i0];
    let i2 = points
        .iter()
        .position(|p| edge.cross(*p - points[i0]).length_squared() > EPSILON)
        .ok_or(HullError::Degenerate)?;

    let normal = edge.cross(points[i2] - points[i0]);
    let i3 = points
        .iter()
        .position(|p| normal.dot(*p - points[i0]).abs() > EPSILON)
        .ok_or(HullError::Degenerate)?;

    Ok([i0, i1, i2, i3])
}

/// Incremental (beneath-beyond) convex hull of a 3D point set.
///
/// Returns the hull boundary as index triangles into `points`, each
/// wound counter-clockwise when viewed from outside. Points strictly
/// inside the hull contribute no faces. Fails on fewer than 4 points
/// or on a collinear/coplanar cloud; no re-sampling is attempted.
pub fn convex_hull(points: &[Vec3]) -> Result<Vec<[usize; 3]>, HullError> {
    if points.len() < 4 {
        return Err(HullError::InsufficientPoints(points.len()));
    }

    let [a, b, c, d] = initial_tetrahedron(points)?;

    // Seed with the tetrahedron, flipping each face so its opposite
    // vertex lies on the inside.
    let mut faces: Vec<[usize; 3]> = [([a, b, c], d), ([a, b, d], c), ([a, c, d], b), ([b, c, d], a)]
        .into_iter()
        .map(|(face, opposite)| {
            if signed_distance(points, face, points[opposite]) > 0.0 {
                [face[0], face[2], face[1]]
            } else {
                face
            }
        })
        .collect();

    for p in 0..points.len() {
        if p == a || p == b || p == c || p == d {
            continue;
        }
        insert_point(&mut faces, points, p);
    }

    Ok(faces)
}

/// Grow the hull by one point: drop every face the point can see and
/// stitch a fan from the point to the horizon edges left behind.
fn insert_point(faces: &mut Vec<[usize; 3]>, points: &[Vec3], p: usize) {
    let point = points[p];

    let visible: Vec<[usize; 3]> = faces
        .iter()
        .copied()
        .filter(|face| signed_distance(points, *face, point) > EPSILON)
        .collect();

    if visible.is_empty() {
        // Inside (or on) the current hull.
        return;
    }

    faces.retain(|face| signed_distance(points, *face, point) <= EPSILON);

    // A directed edge of a visible face is on the horizon exactly when
    // its reverse belongs to no visible face. Visible faces are CCW
    // outward, so the fan (u, v, p) inherits the outward winding.
    let directed: Vec<(usize, usize)> = visible
        .iter()
        .flat_map(|&[i, j, k]| [(i, j), (j, k), (k, i)])
        .collect();

    for &(u, v) in &directed {
        if !directed.contains(&(v, u)) {
            faces.push([u, v, p]);
        }
    }
}
