//! Graph algorithms
mod breadth_first;
pub use self::breadth_first::*;
mod depth_first;
pub use self::depth_first::*;
