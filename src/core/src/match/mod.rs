pub mod commentary;
pub mod engine;
pub mod error;
pub mod random;
pub mod result;
pub mod squad;
pub mod statistics;

pub use commentary::*;
pub use engine::*;
pub use error::*;
pub use random::*;
pub use result::*;
pub use squad::*;
pub use statistics::*;
