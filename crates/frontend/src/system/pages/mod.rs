pub mod navigation_preview;
pub mod not_found;
pub mod settings;
