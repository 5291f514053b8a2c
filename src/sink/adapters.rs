mod filter;
mod map;
mod map_output;

pub use filter::*;
pub use map::*;
pub use map_output::*;
