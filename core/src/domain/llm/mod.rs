pub mod output;
pub mod ports;

pub use ports::*;
