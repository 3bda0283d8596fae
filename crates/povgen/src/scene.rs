use crate::classes::GlobalSettings;
use povgen_core::{Error, Node, sdl::quote};
use std::rc::Rc;

/// Language version written at the top of every scene.
pub const VERSION: &str = "3.7";

///
/// Scene
///
/// A complete scene file: version directive, includes, global settings and
/// the top-level objects in insertion order.
///

#[derive(Debug, Default)]
pub struct Scene {
    includes: Vec<String>,
    global_settings: Option<GlobalSettings>,
    objects: Vec<Rc<dyn Node>>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an `#include` directive.
    #[must_use]
    pub fn include(mut self, file: impl Into<String>) -> Self {
        self.includes.push(file.into());
        self
    }

    #[must_use]
    pub fn global_settings(mut self, settings: GlobalSettings) -> Self {
        self.global_settings = Some(settings);
        self
    }

    pub fn add(&mut self, node: impl Node + 'static) -> &mut Self {
        self.objects.push(Rc::new(node));
        self
    }

    /// Adds an object that is also referenced elsewhere.
    pub fn add_shared(&mut self, node: Rc<dyn Node>) -> &mut Self {
        self.objects.push(node);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The whole scene. Inactive objects are skipped.
    pub fn to_sdl(&self) -> Result<String, Error> {
        let mut sections = vec![format!("#version {VERSION};")];

        if !self.includes.is_empty() {
            sections.push(
                self.includes
                    .iter()
                    .map(|file| format!("#include {}", quote(file)))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        if let Some(settings) = &self.global_settings {
            sections.push(settings.to_sdl(0)?);
        }

        for node in &self.objects {
            if !node.is_active() {
                tracing::debug!(class = node.class_name(), "skipping inactive object");
                continue;
            }
            sections.push(node.to_sdl(0)?);
        }

        tracing::trace!(objects = self.objects.len(), "scene written");

        Ok(sections.join("\n\n") + "\n")
    }
}
