//! Validated POV-Ray scene objects.
//!
//! The classes in [`classes`] are generated at build time from the
//! `povgen-schema` catalog. Every mutable attribute has a getter and a
//! validating setter; [`sdl`] and [`Scene`] turn constructed objects into
//! scene-description text.

pub mod sdl;

mod scene;
mod vectors;

pub use scene::Scene;

/// Generated classes, one per catalog entry.
#[allow(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    dead_code,
    unused_mut
)]
pub mod classes {
    include!(concat!(env!("OUT_DIR"), "/classes.rs"));
}

// re-exports
pub use povgen_core::{Error, Node, Options, Slot, Value, Vector, VectorKind};
pub use povgen_schema::Class;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Scene, classes};
    pub use povgen_core::prelude::*;
    pub use povgen_schema::Class;
}
