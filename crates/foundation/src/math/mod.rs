pub mod albers;
pub mod conic;
pub mod vec;

pub use albers::*;
pub use conic::*;
pub use vec::*;
