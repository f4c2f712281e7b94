pub mod empty_state;
pub mod filter_panel;
pub mod filter_select;
pub mod pagination_controls;
pub mod stat_card;
