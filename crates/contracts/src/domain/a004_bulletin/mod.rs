pub mod aggregate;
pub mod data;

pub use aggregate::*;
