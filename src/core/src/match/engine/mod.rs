pub mod engine;
pub mod resolver;
pub mod state;
pub mod tactics;

pub use engine::*;
pub use resolver::*;
pub use state::*;
pub use tactics::*;
