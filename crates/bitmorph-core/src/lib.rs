pub mod anim;
pub mod brightness;
pub mod constants;
pub mod engine;
pub mod error;
pub mod particle;
pub mod render;
pub mod shape;

pub use anim::*;
pub use brightness::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use particle::*;
pub use render::*;
pub use shape::*;
