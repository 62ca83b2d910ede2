pub mod color_flash;
pub mod combat;
pub mod debug_ui;
pub mod demo;
pub mod input;
pub mod tint_animation;
