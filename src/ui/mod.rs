pub mod app;
pub mod components;
pub mod notifications;
pub mod state;
pub mod store;

pub use app::ChatApp;
