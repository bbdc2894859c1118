/// A set of objects rendered together in one compositing cycle
use log::debug;

use crate::compositor::{composite, DrawingSurface};
use crate::config::RenderConfig;
use crate::draw::DrawList;
use crate::object::RenderableObject;

#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<RenderableObject>,
    pub config: RenderConfig,
}

impl Scene {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            objects: Vec::new(),
            config,
        }
    }

    pub fn add(&mut self, object: RenderableObject) -> &mut Self {
        self.objects.push(object);
        self
    }

    /// Collect draw requests from every object without drawing them
    pub fn collect(&self) -> DrawList {
        let capacity = self.objects.iter().map(|o| o.shape().faces().len()).sum();
        let mut list = DrawList::with_capacity(capacity);
        for object in &self.objects {
            object.render(&mut list, &self.config);
        }
        list
    }

    /// Run one full cycle: collect, sort, draw. Returns the number of faces drawn.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> crate::Result<usize> {
        let mut list = self.collect();
        debug!(
            "scene cycle: {} objects, {} faces",
            self.objects.len(),
            list.len()
        );
        composite(&mut list, surface, &self.config)
    }
}
