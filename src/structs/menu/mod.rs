pub mod menu_entry;
pub mod menu_click;
pub mod action_click;
