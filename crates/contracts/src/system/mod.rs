pub mod auth;
pub mod navigation;
