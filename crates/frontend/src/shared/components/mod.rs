pub mod search_input;
pub mod show_more;
pub mod stat_card;
pub mod toast;
pub mod ui;
