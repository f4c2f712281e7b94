pub mod context;
pub mod identity;
