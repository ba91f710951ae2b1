//! # Triangulator Adapter
//!
//! Thin wrapper over the external Delaunay service. Its only job is to
//! flatten the vertex set into the service's input format and materialize
//! the returned index buffer. No retries, no fallback: degenerate input is
//! a configuration defect upstream.

use crate::error::{GeometryError, GeometryResult};
use crate::point::Vec2;

/// Flat triangle index list.
///
/// Length is always a multiple of 3; each consecutive triple indexes three
/// entries of the vertex set it was produced from.
pub type IndexList = Vec<usize>;

/// Triangulates a vertex set into a flat index list.
///
/// Delegates to the Delaunay service. The output indices are valid positions
/// into `vertices`; triangles collectively cover the convex hull of the set
/// (Delaunay-style, so no coverage guarantee past the clamped boundary).
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateInput`] when fewer than 3 points are
/// supplied, or when the set is collinear and yields no triangles.
pub fn triangulate(vertices: &[Vec2]) -> GeometryResult<IndexList> {
    if vertices.len() < 3 {
        return Err(GeometryError::DegenerateInput {
            point_count: vertices.len(),
        });
    }

    let flat: Vec<delaunator::Point> = vertices
        .iter()
        .map(|v| delaunator::Point {
            x: f64::from(v.x),
            y: f64::from(v.y),
        })
        .collect();

    let triangulation = delaunator::triangulate(&flat);
    if triangulation.triangles.is_empty() {
        return Err(GeometryError::DegenerateInput {
            point_count: vertices.len(),
        });
    }

    Ok(triangulation.triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_list_shape_and_validity() {
        let vertices = [
            Vec2::new(50.0, 50.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
        ];

        let indices = triangulate(&vertices).unwrap();

        assert!(!indices.is_empty());
        assert_eq!(indices.len() % 3, 0);
        for &i in &indices {
            assert!(i < vertices.len(), "index {i} out of range");
        }
    }

    #[test]
    fn test_minimal_triangle() {
        let vertices = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        ];

        let indices = triangulate(&vertices).unwrap();
        assert_eq!(indices.len(), 3);
    }

    #[test]
    fn test_too_few_points_is_hard_error() {
        let vertices = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)];

        let err = triangulate(&vertices).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateInput { point_count: 2 });
    }

    #[test]
    fn test_collinear_points_are_degenerate() {
        let vertices = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(3.0, 3.0),
        ];

        assert!(triangulate(&vertices).is_err());
    }
}
