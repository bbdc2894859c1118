/// Shape definitions: vertex, edge and face tables
use nalgebra::Point3;

use crate::error::{Error, Result};

/// Unordered pair of vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge(pub usize, pub usize);

/// Ordered loop of vertex indices; the order is the polygon boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    indices: Vec<usize>,
}

impl Face {
    pub const MIN_VERTICES: usize = 3;

    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<const N: usize> From<[usize; N]> for Face {
    fn from(indices: [usize; N]) -> Self {
        Self::new(indices.to_vec())
    }
}

/// A polyhedron in local space.
///
/// Construction checks every face and edge against the vertex table, so the render path can
/// index without further checks.
#[derive(Debug, Clone)]
pub struct Shape {
    vertices: Vec<Point3<f64>>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl Shape {
    pub fn new(vertices: Vec<Point3<f64>>, edges: Vec<Edge>, faces: Vec<Face>) -> Result<Self> {
        let len = vertices.len();

        for (i, face) in faces.iter().enumerate() {
            if face.len() < Face::MIN_VERTICES {
                return Err(Error::InvalidFace {
                    face: i,
                    reason: format!(
                        "{} vertices, at least {} required",
                        face.len(),
                        Face::MIN_VERTICES
                    ),
                });
            }
            if let Some(&index) = face.indices().iter().find(|&&index| index >= len) {
                return Err(Error::IndexOutOfBounds {
                    index,
                    len,
                    context: format!("face {}", i),
                });
            }
        }

        for (i, edge) in edges.iter().enumerate() {
            for index in [edge.0, edge.1] {
                if index >= len {
                    return Err(Error::IndexOutOfBounds {
                        index,
                        len,
                        context: format!("edge {}", i),
                    });
                }
            }
        }

        Ok(Self {
            vertices,
            edges,
            faces,
        })
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Axis-aligned cube centered on the local origin
    pub fn cube(half_extent: f64) -> Self {
        let h = half_extent;
        let vertices = vec![
            Point3::new(-h, -h, -h),
            Point3::new(h, -h, -h),
            Point3::new(h, h, -h),
            Point3::new(-h, h, -h),
            Point3::new(-h, -h, h),
            Point3::new(h, -h, h),
            Point3::new(h, h, h),
            Point3::new(-h, h, h),
        ];

        let edges = vec![
            Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 0), // back
            Edge(4, 5), Edge(5, 6), Edge(6, 7), Edge(7, 4), // front
            Edge(0, 4), Edge(1, 5), Edge(2, 6), Edge(3, 7), // connecting
        ];

        let faces = vec![
            Face::from([0, 1, 2, 3]),
            Face::from([4, 5, 6, 7]),
            Face::from([0, 1, 5, 4]),
            Face::from([2, 3, 7, 6]),
            Face::from([0, 3, 7, 4]),
            Face::from([1, 2, 6, 5]),
        ];

        Self {
            vertices,
            edges,
            faces,
        }
    }
}
