pub mod app;
pub mod dashboard;
pub mod events;
pub mod food_dialog;
pub mod food_list;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
