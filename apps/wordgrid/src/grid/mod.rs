// Word grid core: model, direction set, fit check, filler pass, and the builder
// that ties them together. Everything here is synchronous and allocation-bounded.

pub mod builder;
pub mod direction;
pub mod filler;
pub mod fit;
pub mod model;

// Re-export the public API consumed by adapters.
pub use builder::{BuildReport, GridBuilder, GridRequest};
pub use direction::Direction;
pub use model::{Coordinate, Grid, Placement};
