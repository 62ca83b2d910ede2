pub mod color_flash;
pub mod health;
pub mod net_entity;
pub mod ship;
pub mod tint_animation;

pub use color_flash::*;
pub use health::*;
pub use net_entity::*;
pub use ship::*;
pub use tint_animation::*;
