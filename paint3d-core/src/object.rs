/// Renderable objects and their per-object face collection pass
use log::{debug, trace};
use nalgebra::{Point3, Vector3};

use crate::color::Color;
use crate::config::RenderConfig;
use crate::draw::{DrawList, DrawRequest};
use crate::error::Result;
use crate::geometry::{Edge, Face, Shape};
use crate::transform::{Rotate, RotationState};

/// A shape placed in the world with an orientation and two colors
#[derive(Debug, Clone)]
pub struct RenderableObject {
    shape: Shape,
    pub position: Point3<f64>,
    pub rotation: RotationState,
    pub fill: Color,
    pub outline: Color,
}

impl RenderableObject {
    pub fn new(shape: Shape, position: Point3<f64>, fill: Color, outline: Color) -> Self {
        Self {
            shape,
            position,
            rotation: RotationState::zero(),
            fill,
            outline,
        }
    }

    /// Build from raw tables, validating every index
    pub fn from_tables(
        vertices: Vec<Point3<f64>>,
        edges: Vec<Edge>,
        faces: Vec<Face>,
        position: Point3<f64>,
        fill: Color,
        outline: Color,
    ) -> Result<Self> {
        let shape = Shape::new(vertices, edges, faces)?;
        Ok(Self::new(shape, position, fill, outline))
    }

    pub fn cube(half_extent: f64, position: Point3<f64>, fill: Color, outline: Color) -> Self {
        Self::new(Shape::cube(half_extent), position, fill, outline)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn with_rotation(mut self, rotation: RotationState) -> Self {
        self.rotation = rotation;
        self
    }

    fn world_vertex(&self, index: usize) -> Point3<f64> {
        self.shape.vertices()[index] + self.position.coords
    }

    fn rotated_world_vertex(&self, index: usize, config: &RenderConfig) -> Point3<f64> {
        self.world_vertex(index)
            .rotated_around(&self.position, &self.rotation, config.rotation)
    }

    /// Mean distance from the world origin of the face's rotated world vertices
    pub fn mean_vertex_distance(&self, face: &Face, config: &RenderConfig) -> f64 {
        let total: f64 = face
            .indices()
            .iter()
            .map(|&i| self.rotated_world_vertex(i, config).coords.norm())
            .sum();
        total / face.len() as f64
    }

    /// Mean of the face's world vertices, before rotation
    pub fn centroid(&self, face: &Face) -> Point3<f64> {
        let sum = face
            .indices()
            .iter()
            .fold(Vector3::zeros(), |acc, &i| acc + self.world_vertex(i).coords);
        Point3::from(sum / face.len() as f64)
    }

    /// Faces ordered by mean rotated vertex distance, furthest first
    pub fn sort_faces(&self, config: &RenderConfig) -> Vec<&Face> {
        let mut keyed: Vec<(f64, &Face)> = self
            .shape
            .faces()
            .iter()
            .map(|face| (self.mean_vertex_distance(face, config), face))
            .collect();
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        keyed.into_iter().map(|(_, face)| face).collect()
    }

    /// Project every face and append one request per face to `list`
    pub fn render(&self, list: &mut DrawList, config: &RenderConfig) {
        let projection = config.projection();
        let faces = self.sort_faces(config);
        debug!(
            "rendering {} faces at {:?} rotated by {:?}",
            faces.len(),
            self.position,
            self.rotation
        );

        for face in faces {
            let depth = self.centroid(face).coords.norm();
            let polygon = face
                .indices()
                .iter()
                .map(|&i| projection.project(&self.rotated_world_vertex(i, config)))
                .collect();
            trace!("face {:?} depth {}", face.indices(), depth);

            list.push(DrawRequest {
                polygon,
                depth,
                fill: self.fill,
                outline: self.outline,
            });
        }
    }
}
