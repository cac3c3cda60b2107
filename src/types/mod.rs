//! Value types shared across the grid core.

mod descriptors;
mod point;
mod pointer;
mod properties;
mod selection;

pub use descriptors::*;
pub use point::*;
pub use pointer::*;
pub use properties::*;
pub use selection::*;
