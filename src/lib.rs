//! Terminal dashboard for managing food items against a REST backend.

pub mod api;
pub mod config;
pub mod food;
pub mod logging;
pub mod ui;
