pub mod club;
pub mod r#match;
pub mod simulator;

pub use club::*;
pub use r#match::*;
pub use simulator::*;
