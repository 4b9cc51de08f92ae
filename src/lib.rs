pub mod app;
pub mod catalog;
pub mod cli;
pub mod events;
pub mod theme;
pub mod ui;

pub use app::App;
