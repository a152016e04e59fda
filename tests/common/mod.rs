pub mod strategies;

pub use strategies::*;
