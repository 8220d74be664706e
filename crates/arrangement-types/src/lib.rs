pub mod curve;
pub mod point;
pub mod pools;

pub use curve::*;
pub use point::*;
pub use pools::*;
