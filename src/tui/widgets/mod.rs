// TUI widget modules for each dashboard panel.

pub mod confirm;
pub mod draw_results;
pub mod groups;
pub mod help_bar;
pub mod list_preview;
pub mod slot_banner;
pub mod status_bar;
