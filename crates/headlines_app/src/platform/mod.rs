//! Terminal host for the headlines list: configuration, logging, effect
//! execution and a line-oriented presentation of the view model.
mod app;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
