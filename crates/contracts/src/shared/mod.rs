pub mod dataset;
pub mod label;
pub mod list_query;
pub mod live_event;
pub mod menu;
