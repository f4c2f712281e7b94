pub mod list;
pub mod create;
