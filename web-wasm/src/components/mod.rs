pub mod error_panel;
pub mod header;
pub mod menu_item_card;
pub mod menu_uploader;
pub mod progress_bar;
pub mod results_display;
