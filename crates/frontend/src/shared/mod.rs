pub mod components;
pub mod config;
pub mod date_utils;
pub mod i18n;
pub mod icons;
pub mod list_utils;
pub mod live_updates;
pub mod page_frame;
pub mod page_standard;
pub mod query_params;
