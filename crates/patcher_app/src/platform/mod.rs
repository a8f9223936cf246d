mod app;
mod config;
mod context;
mod effects;
mod logging;
mod notifications;
mod ui;

pub use app::run_app;
