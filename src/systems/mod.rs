pub mod color_flash;
pub mod combat;
pub mod net_entity;
pub mod tint_animation;

pub use color_flash::*;
pub use combat::*;
pub use net_entity::*;
pub use tint_animation::*;
