pub mod api_utils;
pub mod components;
pub mod display_window;
pub mod form;
pub mod format_utils;
