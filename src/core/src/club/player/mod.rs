pub mod capabilities;
pub mod player;
pub mod positions;
pub mod statistics;

pub use capabilities::*;
pub use player::*;
pub use positions::*;
pub use statistics::*;
