//! Scene management: transforms, renderable objects and the registry.

pub mod object;
pub mod scene;
pub mod transform;

// Re-export main types
pub use object::{Object, ObjectId};
pub use scene::Scene;
pub use transform::{Bounce, Transform};
