/// Render pipeline settings
use crate::projection::Projection;
use crate::transform::RotationStrategy;

/// Settings shared by every object rendered in a cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub focal_length: f64,
    pub epsilon: f64,
    pub rotation: RotationStrategy,
    /// Pen width used for the outline pass
    pub outline_width: f64,
}

impl RenderConfig {
    pub const DEFAULT_OUTLINE_WIDTH: f64 = 10.0;

    pub fn new() -> Self {
        Self {
            focal_length: Projection::DEFAULT_FOCAL_LENGTH,
            epsilon: Projection::DEFAULT_EPSILON,
            rotation: RotationStrategy::default(),
            outline_width: Self::DEFAULT_OUTLINE_WIDTH,
        }
    }

    pub fn with_focal_length(mut self, focal_length: f64) -> Self {
        self.focal_length = focal_length;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_rotation(mut self, rotation: RotationStrategy) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_outline_width(mut self, outline_width: f64) -> Self {
        self.outline_width = outline_width;
        self
    }

    pub fn projection(&self) -> Projection {
        Projection::from_config(self)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.focal_length, 200.0);
        assert_eq!(config.epsilon, 1e-16);
        assert_eq!(config.rotation, RotationStrategy::Matrix);
        assert_eq!(config.outline_width, 10.0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = RenderConfig::new()
            .with_rotation(RotationStrategy::Legacy)
            .with_focal_length(120.0)
            .with_epsilon(1e-9)
            .with_outline_width(2.0);
        assert_eq!(config.rotation, RotationStrategy::Legacy);
        assert_eq!(config.projection(), Projection::new(120.0, 1e-9));
        assert_eq!(config.outline_width, 2.0);
    }
}
