use crate::error::Error;
use std::{any::Any, fmt};

///
/// Node
///
/// A constructed object that can appear inside another object's attributes
/// and serialize itself to scene-description text.
///

pub trait Node: fmt::Debug {
    fn class_name(&self) -> &'static str;

    /// True when `class` is this object's class or one of its ancestors.
    fn is_a(&self, class: &str) -> bool;

    /// Scene-description text, indented by `stops` levels.
    fn to_sdl(&self, stops: usize) -> Result<String, Error>;

    fn as_any(&self) -> &dyn Any;

    /// Inactive objects are left out of a scene.
    fn is_active(&self) -> bool {
        true
    }
}
