pub mod feature;
pub mod focus;
pub mod gesture;
pub mod interaction;
pub mod picking;
pub mod world;

pub use world::*;
