pub mod chat_area;
pub mod input_bar;
pub mod login;
pub mod profile;
pub mod sidebar;
pub mod toasts;
