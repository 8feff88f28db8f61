pub mod ai;
pub mod bounds;
pub mod collision;
pub mod movement;

pub use ai::*;
pub use bounds::*;
pub use collision::*;
pub use movement::*;
